//! Semantic role names and interaction states

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};

/// Semantic UI role
///
/// The set is closed: a theme maps every one of these, and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Danger,
    Error,
    Warning,
    Notice,
    Info,
    Success,
    Active,
    Inactive,
    Preview,
}

impl RoleName {
    /// Number of roles in a theme
    pub const COUNT: usize = 9;

    /// All roles, in declaration order
    pub const ALL: [RoleName; Self::COUNT] = [
        RoleName::Danger,
        RoleName::Error,
        RoleName::Warning,
        RoleName::Notice,
        RoleName::Info,
        RoleName::Success,
        RoleName::Active,
        RoleName::Inactive,
        RoleName::Preview,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RoleName::Danger => "danger",
            RoleName::Error => "error",
            RoleName::Warning => "warning",
            RoleName::Notice => "notice",
            RoleName::Info => "info",
            RoleName::Success => "success",
            RoleName::Active => "active",
            RoleName::Inactive => "inactive",
            RoleName::Preview => "preview",
        }
    }

    /// Position of this role in [`RoleName::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = ThemeError;

    fn from_str(s: &str) -> ThemeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownRole(s.to_string()))
    }
}

/// Interaction state a role is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    #[default]
    Default,
    Hover,
    Disabled,
}

impl InteractionState {
    pub const ALL: [InteractionState; 3] = [
        InteractionState::Default,
        InteractionState::Hover,
        InteractionState::Disabled,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            InteractionState::Default => "default",
            InteractionState::Hover => "hover",
            InteractionState::Disabled => "disabled",
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for InteractionState {
    type Err = ThemeError;

    fn from_str(s: &str) -> ThemeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownState(s.to_string()))
    }
}
