//! Validation of role themes supplied as JSON
//!
//! The built-in theme is checked by the compiler. Themes that arrive as data
//! go through [`RoleTheme::from_json`], which walks the document by hand so
//! every rejection names the exact path that is wrong. Nothing is defaulted:
//! a document either describes every role completely or it is refused.

use std::collections::HashSet;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ThemeError, ThemeResult};
use crate::palette::ColorToken;
use crate::role::RoleName;
use crate::style::{FillStyle, RoleStyle, StateStyle};
use crate::theme::RoleTheme;

const STATE_FIELDS: [&str; 4] = ["background", "outline", "text", "fill"];
const FILL_FIELDS: [&str; 3] = ["solid", "outline", "text"];
const VARIANT_FIELDS: [&str; 2] = ["hover", "disabled"];

impl RoleTheme {
    /// Parse and validate a theme document
    pub fn from_json(text: &str) -> ThemeResult<Self> {
        let checked: CheckedValue = serde_json::from_str(text)?;
        if let Some(path) = checked.duplicate {
            return Err(ThemeError::DuplicateKey(path));
        }
        Self::from_value(&checked.value)
    }

    /// Validate an already parsed theme document
    ///
    /// `serde_json::Value` keeps only the last of any repeated key, so
    /// duplicate detection is only available through [`RoleTheme::from_json`].
    pub fn from_value(value: &Value) -> ThemeResult<Self> {
        let roles = object(value, "")?;

        for key in roles.keys() {
            key.parse::<RoleName>()?;
        }

        let mut styles = Vec::with_capacity(RoleName::COUNT);
        for role in RoleName::ALL {
            let node = roles
                .get(role.as_str())
                .ok_or_else(|| ThemeError::MissingRole(role.to_string()))?;
            styles.push(role_style(node, role.as_str())?);
            debug!(role = %role, "validated role style");
        }

        // One style per role, pushed in ordinal order.
        Ok(RoleTheme::new(|role| styles[role.index()]))
    }

    /// Pretty-printed JSON document that [`RoleTheme::from_json`] accepts
    pub fn to_json_pretty(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn role_style(value: &Value, path: &str) -> ThemeResult<RoleStyle> {
    let fields = object(value, path)?;
    reject_unknown(fields, path, &[&STATE_FIELDS[..], &VARIANT_FIELDS[..]])?;

    let base = state_fields(fields, path)?;
    let variant = |name: &str| -> ThemeResult<Option<StateStyle>> {
        match fields.get(name) {
            None => Ok(None),
            Some(node) => state_style(node, &join(path, name)).map(Some),
        }
    };

    Ok(RoleStyle {
        base,
        hover: variant("hover")?,
        disabled: variant("disabled")?,
    })
}

fn state_style(value: &Value, path: &str) -> ThemeResult<StateStyle> {
    let fields = object(value, path)?;
    reject_unknown(fields, path, &[&STATE_FIELDS[..]])?;
    state_fields(fields, path)
}

fn state_fields(fields: &Map<String, Value>, path: &str) -> ThemeResult<StateStyle> {
    let fill_path = join(path, "fill");
    let fill_node = required(fields, path, "fill")?;
    let fill_fields = object(fill_node, &fill_path)?;
    reject_unknown(fill_fields, &fill_path, &[&FILL_FIELDS[..]])?;

    Ok(StateStyle {
        background: token(fields, path, "background")?,
        outline: token(fields, path, "outline")?,
        text: token(fields, path, "text")?,
        fill: FillStyle {
            solid: token(fill_fields, &fill_path, "solid")?,
            outline: token(fill_fields, &fill_path, "outline")?,
            text: token(fill_fields, &fill_path, "text")?,
        },
    })
}

fn token(fields: &Map<String, Value>, path: &str, name: &str) -> ThemeResult<ColorToken> {
    let node = required(fields, path, name)?;
    let field_path = join(path, name);
    let text = node.as_str().ok_or_else(|| ThemeError::UnknownToken {
        path: field_path.clone(),
        token: node.to_string(),
    })?;
    text.parse().map_err(|_| ThemeError::UnknownToken {
        path: field_path,
        token: text.to_string(),
    })
}

fn required<'a>(fields: &'a Map<String, Value>, path: &str, name: &str) -> ThemeResult<&'a Value> {
    fields
        .get(name)
        .ok_or_else(|| ThemeError::MissingField(join(path, name)))
}

fn object<'a>(value: &'a Value, path: &str) -> ThemeResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        let at = if path.is_empty() { "<root>" } else { path };
        ThemeError::shape(at, format!("expected an object, found {}", kind(value)))
    })
}

fn reject_unknown(fields: &Map<String, Value>, path: &str, allowed: &[&[&str]]) -> ThemeResult<()> {
    match fields
        .keys()
        .find(|key| !allowed.iter().any(|set| set.contains(&key.as_str())))
    {
        Some(key) => Err(ThemeError::UnknownField(join(path, key))),
        None => Ok(()),
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// Style records deserialize through the same checks as whole themes, so a
// partial record, an unknown key or a `null` variant is refused here too.

impl<'de> Deserialize<'de> for StateStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        state_style(&value, "").map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for RoleStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        role_style(&value, "").map_err(de::Error::custom)
    }
}

/// JSON value that remembers the first repeated object key it saw
struct CheckedValue {
    value: Value,
    duplicate: Option<String>,
}

impl CheckedValue {
    fn plain(value: Value) -> Self {
        Self {
            value,
            duplicate: None,
        }
    }
}

impl<'de> Deserialize<'de> for CheckedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CheckedVisitor)
    }
}

struct CheckedVisitor;

impl<'de> Visitor<'de> for CheckedVisitor {
    type Value = CheckedValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<CheckedValue, E> {
        Ok(CheckedValue::plain(Value::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<CheckedValue, E> {
        Ok(CheckedValue::plain(Value::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<CheckedValue, E> {
        Ok(CheckedValue::plain(Value::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<CheckedValue, E> {
        Ok(CheckedValue::plain(Value::from(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<CheckedValue, E> {
        Ok(CheckedValue::plain(Value::String(v.to_string())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<CheckedValue, E> {
        Ok(CheckedValue::plain(Value::String(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<CheckedValue, E> {
        Ok(CheckedValue::plain(Value::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<CheckedValue, E> {
        Ok(CheckedValue::plain(Value::Null))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<CheckedValue, A::Error> {
        let mut items = Vec::new();
        let mut duplicate = None;
        while let Some(item) = seq.next_element::<CheckedValue>()? {
            if duplicate.is_none() {
                duplicate = item
                    .duplicate
                    .map(|inner| join(&items.len().to_string(), &inner));
            }
            items.push(item.value);
        }
        Ok(CheckedValue {
            value: Value::Array(items),
            duplicate,
        })
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<CheckedValue, A::Error> {
        let mut fields = Map::new();
        let mut seen = HashSet::new();
        let mut duplicate = None;
        while let Some((key, item)) = map.next_entry::<String, CheckedValue>()? {
            if duplicate.is_none() {
                if !seen.insert(key.clone()) {
                    duplicate = Some(key.clone());
                } else if let Some(inner) = item.duplicate {
                    duplicate = Some(join(&key, &inner));
                }
            }
            fields.insert(key, item.value);
        }
        Ok(CheckedValue {
            value: Value::Object(fields),
            duplicate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dark_blue;
    use crate::role::InteractionState;

    fn dark_blue_value() -> Value {
        serde_json::to_value(dark_blue::theme()).unwrap()
    }

    #[test]
    fn test_dark_blue_document_validates() {
        let json = dark_blue::theme().to_json_pretty().unwrap();
        let theme = RoleTheme::from_json(&json).unwrap();
        assert_eq!(&theme, dark_blue::theme());
    }

    #[test]
    fn test_missing_role() {
        let mut value = dark_blue_value();
        value.as_object_mut().unwrap().remove("notice");
        let err = RoleTheme::from_value(&value).unwrap_err();
        assert!(matches!(err, ThemeError::MissingRole(ref r) if r == "notice"));
    }

    #[test]
    fn test_unknown_role() {
        let mut value = dark_blue_value();
        let danger = value["danger"].clone();
        value
            .as_object_mut()
            .unwrap()
            .insert("critical".to_string(), danger);
        let err = RoleTheme::from_value(&value).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownRole(ref r) if r == "critical"));
    }

    #[test]
    fn test_missing_base_field() {
        let mut value = dark_blue_value();
        value["error"].as_object_mut().unwrap().remove("outline");
        let err = RoleTheme::from_value(&value).unwrap_err();
        assert!(matches!(err, ThemeError::MissingField(ref p) if p == "error.outline"));
    }

    #[test]
    fn test_partial_variant_rejected() {
        let mut value = dark_blue_value();
        value["danger"]["hover"]["fill"]
            .as_object_mut()
            .unwrap()
            .remove("solid");
        let err = RoleTheme::from_value(&value).unwrap_err();
        assert!(
            matches!(err, ThemeError::MissingField(ref p) if p == "danger.hover.fill.solid"),
            "{}",
            err
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut value = dark_blue_value();
        value["info"]["pressed"] = value["info"]["fill"].clone();
        let err = RoleTheme::from_value(&value).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownField(ref p) if p == "info.pressed"));

        let mut value = dark_blue_value();
        value["success"]["hover"]["hover"] = Value::Null;
        let err = RoleTheme::from_value(&value).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownField(ref p) if p == "success.hover.hover"));
    }

    #[test]
    fn test_raw_color_rejected() {
        let mut value = dark_blue_value();
        value["warning"]["background"] = Value::String("#451a03".to_string());
        let err = RoleTheme::from_value(&value).unwrap_err();
        match err {
            ThemeError::UnknownToken { path, token } => {
                assert_eq!(path, "warning.background");
                assert_eq!(token, "#451a03");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_non_string_token_rejected() {
        let mut value = dark_blue_value();
        value["warning"]["text"] = Value::from(50);
        let err = RoleTheme::from_value(&value).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownToken { ref path, .. } if path == "warning.text"));
    }

    #[test]
    fn test_wrong_node_type() {
        let err = RoleTheme::from_value(&Value::from("dark blue")).unwrap_err();
        assert!(matches!(err, ThemeError::ShapeViolation { ref path, .. } if path == "<root>"));

        let mut value = dark_blue_value();
        value["active"]["disabled"] = Value::Array(vec![]);
        let err = RoleTheme::from_value(&value).unwrap_err();
        assert!(
            matches!(err, ThemeError::ShapeViolation { ref path, .. } if path == "active.disabled")
        );
    }

    #[test]
    fn test_duplicate_role_key() {
        let error = serde_json::to_string(&dark_blue_value()["error"]).unwrap();
        let json = dark_blue::theme().to_json_pretty().unwrap();
        // Repeat the error role at the end of the document
        let trimmed = json.trim_end().trim_end_matches('}');
        let doubled = format!("{},\n  \"error\": {}\n}}", trimmed, error);
        let err = RoleTheme::from_json(&doubled).unwrap_err();
        assert!(matches!(err, ThemeError::DuplicateKey(ref k) if k == "error"), "{}", err);
    }

    #[test]
    fn test_duplicate_nested_key() {
        let json = r#"{"danger": {"fill": {"solid": "red-500", "solid": "red-600"}}}"#;
        let err = RoleTheme::from_json(json).unwrap_err();
        assert!(matches!(err, ThemeError::DuplicateKey(ref k) if k == "danger.fill.solid"));
    }

    #[test]
    fn test_malformed_json() {
        let err = RoleTheme::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
        assert!(!err.is_shape_violation());
    }

    fn red_base() -> Value {
        serde_json::json!({
            "background": "red-950",
            "outline": "red-600",
            "text": "red-50",
            "fill": { "solid": "red-400", "outline": "red-400", "text": "white" }
        })
    }

    #[test]
    fn test_role_style_deserialize_matches_validator() {
        let style: RoleStyle = serde_json::from_value(red_base()).unwrap();
        assert_eq!(&style, dark_blue::theme().get(RoleName::Error));

        let mut value = red_base();
        value["pressed"] = Value::String("red-500".to_string());
        value["hover"] = Value::Null;
        let err = serde_json::from_value::<RoleStyle>(value).unwrap_err();
        assert!(err.to_string().contains("Unknown field: pressed"), "{}", err);
    }

    #[test]
    fn test_role_style_deserialize_rejects_null_variant() {
        let mut value = red_base();
        value["hover"] = Value::Null;
        let err = serde_json::from_str::<RoleStyle>(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("hover"), "{}", err);
    }

    #[test]
    fn test_state_style_deserialize_rejects_unknown_field() {
        let mut value = red_base();
        value["shadow"] = Value::String("red-900".to_string());
        let err = serde_json::from_str::<StateStyle>(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("Unknown field: shadow"), "{}", err);

        let mut value = red_base();
        value["fill"].as_object_mut().unwrap().remove("text");
        let err = serde_json::from_value::<StateStyle>(value).unwrap_err();
        assert!(err.to_string().contains("Missing field: fill.text"), "{}", err);
    }

    #[test]
    fn test_omitted_variants_stay_absent() {
        let theme = RoleTheme::from_value(&dark_blue_value()).unwrap();
        let error = theme.get(RoleName::Error);
        assert!(error.hover.is_none());
        assert_eq!(
            theme.resolve(RoleName::Error, InteractionState::Hover),
            &error.base
        );
    }
}
