//! The "dark blue" role theme
//!
//! Values are kept exactly as designed, including the preview role whose
//! disabled state repeats its hover state on a zinc background.

use std::sync::OnceLock;

use crate::palette::tokens::{amber, blue, cyan, gray, green, orange, red, sky, zinc, WHITE};
use crate::palette::ColorToken;
use crate::palette::Shade::{S200, S300, S400, S50, S500, S600, S800, S900, S950};
use crate::role::RoleName;
use crate::style::{FillStyle, RoleStyle, StateStyle};
use crate::theme::RoleTheme;

static THEME: OnceLock<RoleTheme> = OnceLock::new();

/// Shared dark blue theme, built on first access
pub fn theme() -> &'static RoleTheme {
    THEME.get_or_init(|| {
        tracing::trace!("building dark blue role theme");
        build()
    })
}

/// Build a fresh copy of the dark blue theme
pub fn build() -> RoleTheme {
    RoleTheme::new(role_style)
}

const fn state(
    background: ColorToken,
    outline: ColorToken,
    text: ColorToken,
    fill: FillStyle,
) -> StateStyle {
    StateStyle {
        background,
        outline,
        text,
        fill,
    }
}

const fn fill(solid: ColorToken, outline: ColorToken, text: ColorToken) -> FillStyle {
    FillStyle {
        solid,
        outline,
        text,
    }
}

fn role_style(role: RoleName) -> RoleStyle {
    match role {
        RoleName::Danger => RoleStyle::new(state(
            orange(S950),
            orange(S500),
            orange(S50),
            fill(orange(S500), orange(S400), WHITE),
        ))
        .with_disabled(state(
            orange(S950),
            orange(S800),
            orange(S200),
            fill(orange(S800), orange(S800), WHITE),
        ))
        .with_hover(state(
            orange(S900),
            orange(S500),
            WHITE,
            fill(orange(S500), orange(S500), WHITE),
        )),

        RoleName::Error => RoleStyle::new(state(
            red(S950),
            red(S600),
            red(S50),
            fill(red(S400), red(S400), WHITE),
        )),

        RoleName::Warning => RoleStyle::new(state(
            amber(S950),
            amber(S300),
            amber(S50),
            fill(amber(S500), amber(S500), WHITE),
        )),

        RoleName::Notice => RoleStyle::new(state(
            blue(S950),
            blue(S400),
            blue(S50),
            fill(blue(S500), blue(S600), WHITE),
        )),

        RoleName::Info => RoleStyle::new(state(
            gray(S950),
            gray(S400),
            gray(S50),
            fill(gray(S500), gray(S600), WHITE),
        )),

        RoleName::Success => RoleStyle::new(state(
            green(S950),
            green(S500),
            green(S50),
            fill(green(S600), green(S600), WHITE),
        ))
        .with_disabled(state(
            green(S950),
            green(S800),
            green(S200),
            fill(green(S800), green(S800), WHITE),
        ))
        .with_hover(state(
            green(S900),
            green(S500),
            WHITE,
            fill(green(S500), green(S500), WHITE),
        )),

        RoleName::Active => RoleStyle::new(state(
            sky(S950),
            sky(S500),
            sky(S50),
            fill(sky(S600), sky(S400), WHITE),
        ))
        .with_disabled(state(
            sky(S950),
            sky(S800),
            sky(S200),
            fill(sky(S800), sky(S800), WHITE),
        ))
        .with_hover(state(
            sky(S900),
            sky(S500),
            WHITE,
            fill(sky(S500), sky(S500), WHITE),
        )),

        RoleName::Inactive => RoleStyle::new(state(
            gray(S950),
            gray(S500),
            gray(S50),
            fill(gray(S400), gray(S400), WHITE),
        )),

        RoleName::Preview => RoleStyle::new(state(
            cyan(S950),
            cyan(S600),
            cyan(S400),
            fill(cyan(S400), cyan(S400), WHITE),
        ))
        .with_hover(state(
            zinc(S950),
            cyan(S500),
            cyan(S300),
            fill(cyan(S600), cyan(S600), WHITE),
        ))
        .with_disabled(state(
            zinc(S950),
            cyan(S500),
            cyan(S300),
            fill(cyan(S600), cyan(S600), WHITE),
        )),
    }
}
