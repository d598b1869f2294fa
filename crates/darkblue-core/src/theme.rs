//! Role theme: the total mapping from role name to role style

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::role::{InteractionState, RoleName};
use crate::style::{RoleStyle, StateStyle};

/// Complete role theme
///
/// Styles are stored by role ordinal, so a constructed theme always has
/// exactly one entry per role. There are no mutating methods; switching
/// themes means holding a different `RoleTheme` value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleTheme {
    styles: [RoleStyle; RoleName::COUNT],
}

impl RoleTheme {
    /// Build a theme from a style for every role
    pub fn new(mut style_for: impl FnMut(RoleName) -> RoleStyle) -> Self {
        Self {
            styles: RoleName::ALL.map(&mut style_for),
        }
    }

    /// Style for `role`
    pub fn get(&self, role: RoleName) -> &RoleStyle {
        &self.styles[role.index()]
    }

    /// Style for `role` rendered in `state`, applying the hover/disabled fallback
    pub fn resolve(&self, role: RoleName, state: InteractionState) -> &StateStyle {
        self.get(role).resolve(state)
    }

    /// Roles and their styles in [`RoleName::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (RoleName, &RoleStyle)> + '_ {
        RoleName::ALL.into_iter().zip(self.styles.iter())
    }
}

impl Serialize for RoleTheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RoleName::COUNT))?;
        for (role, style) in self.iter() {
            map.serialize_entry(role.as_str(), style)?;
        }
        map.end()
    }
}
