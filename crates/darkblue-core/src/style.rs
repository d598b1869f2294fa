//! Style records for a single role
//!
//! A role has one base [`StateStyle`] plus optional hover and disabled
//! overrides. Overrides are whole records; there is no field-level merging.

use serde::{Deserialize, Serialize};

use crate::palette::ColorToken;
use crate::role::InteractionState;

/// Coloring of a filled affordance (e.g. a solid button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FillStyle {
    /// Fill color
    pub solid: ColorToken,
    /// Border color
    pub outline: ColorToken,
    /// Foreground text color
    pub text: ColorToken,
}

/// Full visual treatment of a role in one interaction state
///
/// Deserialization is strict and lives in the schema module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StateStyle {
    pub background: ColorToken,
    pub outline: ColorToken,
    pub text: ColorToken,
    pub fill: FillStyle,
}

/// Style descriptor for one role
///
/// Serializes with the base state inlined at the top level:
///
/// ```json
/// { "background": "red-950", "outline": "red-600", "text": "red-50",
///   "fill": { "solid": "red-400", "outline": "red-400", "text": "white" } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RoleStyle {
    #[serde(flatten)]
    pub base: StateStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<StateStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<StateStyle>,
}

impl RoleStyle {
    /// Role style with no state overrides
    pub const fn new(base: StateStyle) -> Self {
        Self {
            base,
            hover: None,
            disabled: None,
        }
    }

    pub const fn with_hover(mut self, hover: StateStyle) -> Self {
        self.hover = Some(hover);
        self
    }

    pub const fn with_disabled(mut self, disabled: StateStyle) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Style to render in `state`
    ///
    /// Hover and disabled use their declared override when present and fall
    /// back to the base state otherwise.
    pub fn resolve(&self, state: InteractionState) -> &StateStyle {
        let variant = match state {
            InteractionState::Default => None,
            InteractionState::Hover => self.hover.as_ref(),
            InteractionState::Disabled => self.disabled.as_ref(),
        };
        variant.unwrap_or(&self.base)
    }

    /// Whether `state` has an explicit override (the default state always does)
    pub fn declares(&self, state: InteractionState) -> bool {
        match state {
            InteractionState::Default => true,
            InteractionState::Hover => self.hover.is_some(),
            InteractionState::Disabled => self.disabled.is_some(),
        }
    }
}
