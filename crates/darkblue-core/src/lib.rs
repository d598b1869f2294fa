//! Dark Blue Role Theme
//!
//! Semantic color roles for UI components under the "dark blue" theme.
//!
//! ## Overview
//!
//! Nine roles (danger, error, warning, notice, info, success, active,
//! inactive, preview) each map to a [`RoleStyle`]: a base treatment with
//! background, outline, text and fill colors, plus optional hover and
//! disabled overrides. Every color is a [`ColorToken`] into the Tailwind
//! palette, never a raw value.
//!
//! ## Quick Start
//!
//! ```
//! use darkblue_core::{dark_blue, InteractionState, RoleName};
//!
//! let theme = dark_blue::theme();
//!
//! let hover = theme.resolve(RoleName::Danger, InteractionState::Hover);
//! assert_eq!(hover.background.to_string(), "orange-900");
//!
//! // Roles without a hover override render their base style
//! let error = theme.get(RoleName::Error);
//! assert_eq!(theme.resolve(RoleName::Error, InteractionState::Hover), &error.base);
//! ```

pub mod css;
pub mod dark_blue;
pub mod error;
pub mod palette;
pub mod role;
pub mod schema;
pub mod style;
pub mod theme;

// Re-exports
pub use error::{ThemeError, ThemeResult};
pub use palette::{ColorFamily, ColorToken, Shade};
pub use role::{InteractionState, RoleName};
pub use style::{FillStyle, RoleStyle, StateStyle};
pub use theme::RoleTheme;
