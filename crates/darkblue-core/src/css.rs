//! CSS custom property export
//!
//! Renders a theme as a `:root` block the styling layer can drop into its
//! global stylesheet. Every role gets a full set of properties for every
//! interaction state, resolved through the hover/disabled fallback, so
//! stylesheets never need their own fallback chains.

use std::fmt::Write;

use crate::palette::ColorToken;
use crate::role::{InteractionState, RoleName};
use crate::style::StateStyle;
use crate::theme::RoleTheme;

/// Custom property name for one role, state and field
///
/// The default state carries no state segment: `--role-danger-background`,
/// `--role-danger-hover-fill-solid`.
pub fn property_name(role: RoleName, state: InteractionState, field: &str) -> String {
    match state {
        InteractionState::Default => format!("--role-{}-{}", role, field),
        _ => format!("--role-{}-{}-{}", role, state, field),
    }
}

/// Field names paired with their tokens, in output order
pub fn fields(style: &StateStyle) -> [(&'static str, ColorToken); 6] {
    [
        ("background", style.background),
        ("outline", style.outline),
        ("text", style.text),
        ("fill-solid", style.fill.solid),
        ("fill-outline", style.fill.outline),
        ("fill-text", style.fill.text),
    ]
}

/// `:root { ... }` block with every role, state and field
pub fn custom_properties(theme: &RoleTheme) -> String {
    let mut css = String::from(":root {\n");
    for (role, style) in theme.iter() {
        let _ = writeln!(css, "  /* {} */", role);
        for state in InteractionState::ALL {
            for (field, token) in fields(style.resolve(state)) {
                let _ = writeln!(
                    css,
                    "  {}: {};",
                    property_name(role, state, field),
                    token.hex()
                );
            }
        }
    }
    css.push_str("}\n");
    css
}
