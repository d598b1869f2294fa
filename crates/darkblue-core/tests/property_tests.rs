//! Property-based tests for role themes
//!
//! Uses proptest to verify the fallback law, construction idempotence and
//! the closed vocabularies for roles and color tokens.

use darkblue_core::{
    dark_blue, ColorFamily, ColorToken, InteractionState, RoleName, RoleTheme, Shade, ThemeError,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn role_strategy() -> impl Strategy<Value = RoleName> {
    prop::sample::select(RoleName::ALL.to_vec())
}

fn state_strategy() -> impl Strategy<Value = InteractionState> {
    prop::sample::select(InteractionState::ALL.to_vec())
}

fn token_strategy() -> impl Strategy<Value = ColorToken> {
    prop_oneof![
        9 => (
            prop::sample::select(ColorFamily::ALL.to_vec()),
            prop::sample::select(Shade::ALL.to_vec()),
        )
            .prop_map(|(family, shade)| ColorToken::new(family, shade)),
        1 => Just(ColorToken::White),
        1 => Just(ColorToken::Black),
    ]
}

/// Lowercase words that are not role names
fn non_role_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,12}")
        .expect("valid regex")
        .prop_filter("not a role", |s| {
            RoleName::ALL.iter().all(|role| role.as_str() != s.as_str())
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A state without a declared override renders exactly like the default state
    #[test]
    fn fallback_law(role in role_strategy(), state in state_strategy()) {
        let theme = dark_blue::theme();
        let style = theme.get(role);
        let resolved = theme.resolve(role, state);
        if style.declares(state) {
            let declared = match state {
                InteractionState::Default => Some(&style.base),
                InteractionState::Hover => style.hover.as_ref(),
                InteractionState::Disabled => style.disabled.as_ref(),
            };
            prop_assert_eq!(Some(resolved), declared);
        } else {
            prop_assert_eq!(resolved, theme.resolve(role, InteractionState::Default));
        }
    }

    /// Role names outside the closed set never reach a lookup
    #[test]
    fn unknown_role_names_rejected(name in non_role_strategy()) {
        let parsed = name.parse::<RoleName>();
        prop_assert!(matches!(parsed, Err(ThemeError::UnknownRole(_))));
    }

    /// Tokens print to a form that parses back to the same token
    #[test]
    fn token_text_form(token in token_strategy()) {
        let text = token.to_string();
        prop_assert_eq!(text.parse::<ColorToken>().unwrap(), token);
        prop_assert_eq!(token.hex().len(), 7);
    }

    /// Rewriting any one token of the document still validates, and only that
    /// role changes
    #[test]
    fn single_token_edit(role in role_strategy(), token in token_strategy()) {
        let mut value = serde_json::to_value(dark_blue::theme()).unwrap();
        value[role.as_str()]["outline"] = serde_json::Value::String(token.to_string());
        let edited = RoleTheme::from_value(&value).unwrap();

        prop_assert_eq!(edited.get(role).base.outline, token);
        for other in RoleName::ALL.into_iter().filter(|r| *r != role) {
            prop_assert_eq!(edited.get(other), dark_blue::theme().get(other));
        }
    }
}

#[test]
fn construction_is_idempotent() {
    assert_eq!(dark_blue::build(), dark_blue::build());
    assert_eq!(&dark_blue::build(), dark_blue::theme());
}

#[test]
fn every_role_complete_in_every_state() {
    let theme = dark_blue::theme();
    for role in RoleName::ALL {
        for state in InteractionState::ALL {
            let style = theme.resolve(role, state);
            let tokens = [
                style.background,
                style.outline,
                style.text,
                style.fill.solid,
                style.fill.outline,
                style.fill.text,
            ];
            for token in tokens {
                assert!(!token.to_string().is_empty());
                assert!(token.hex().starts_with('#'));
            }
        }
    }
}
