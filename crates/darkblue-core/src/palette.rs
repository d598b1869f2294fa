//! Base color palette
//!
//! Tailwind v3 hue ramps for the families the role themes draw from.
//! Every color a theme can name is a [`ColorToken`] pointing into this
//! table, so there is exactly one place where hex values live.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ThemeError, ThemeResult};

/// Color family (hue ramp) in the base palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorFamily {
    Amber,
    Blue,
    Cyan,
    Gray,
    Green,
    Orange,
    Red,
    Sky,
    Zinc,
}

impl ColorFamily {
    /// All families, in table order
    pub const ALL: [ColorFamily; 9] = [
        ColorFamily::Amber,
        ColorFamily::Blue,
        ColorFamily::Cyan,
        ColorFamily::Gray,
        ColorFamily::Green,
        ColorFamily::Orange,
        ColorFamily::Red,
        ColorFamily::Sky,
        ColorFamily::Zinc,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ColorFamily::Amber => "amber",
            ColorFamily::Blue => "blue",
            ColorFamily::Cyan => "cyan",
            ColorFamily::Gray => "gray",
            ColorFamily::Green => "green",
            ColorFamily::Orange => "orange",
            ColorFamily::Red => "red",
            ColorFamily::Sky => "sky",
            ColorFamily::Zinc => "zinc",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.as_str() == s)
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Shade level within a family (50 = lightest, 950 = darkest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    /// All shades, lightest first
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// Numeric shade level
    pub const fn level(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    /// Look up a shade by its numeric level
    pub fn from_level(level: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|shade| shade.level() == level)
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

// === HEX TABLE ===
// Rows follow `ColorFamily::ALL`, columns follow `Shade::ALL`.
const HEX: [[&str; 11]; 9] = [
    // amber
    [
        "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309",
        "#92400e", "#78350f", "#451a03",
    ],
    // blue
    [
        "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
        "#1e40af", "#1e3a8a", "#172554",
    ],
    // cyan
    [
        "#ecfeff", "#cffafe", "#a5f3fc", "#67e8f9", "#22d3ee", "#06b6d4", "#0891b2", "#0e7490",
        "#155e75", "#164e63", "#083344",
    ],
    // gray
    [
        "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
        "#1f2937", "#111827", "#030712",
    ],
    // green
    [
        "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
        "#166534", "#14532d", "#052e16",
    ],
    // orange
    [
        "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c", "#c2410c",
        "#9a3412", "#7c2d12", "#431407",
    ],
    // red
    [
        "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
        "#991b1b", "#7f1d1d", "#450a0a",
    ],
    // sky
    [
        "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#0284c7", "#0369a1",
        "#075985", "#0c4a6e", "#082f49",
    ],
    // zinc
    [
        "#fafafa", "#f4f4f5", "#e4e4e7", "#d4d4d8", "#a1a1aa", "#71717a", "#52525b", "#3f3f46",
        "#27272a", "#18181b", "#09090b",
    ],
];

const WHITE: &str = "#ffffff";
const BLACK: &str = "#000000";

// Decoded once at compile time; a malformed entry in `HEX` fails the build.
const RGB: [[(u8, u8, u8); 11]; 9] = {
    let mut table = [[(0, 0, 0); 11]; 9];
    let mut family = 0;
    while family < HEX.len() {
        let mut shade = 0;
        while shade < HEX[family].len() {
            table[family][shade] = decode_hex(HEX[family][shade]);
            shade += 1;
        }
        family += 1;
    }
    table
};

const fn decode_hex(hex: &str) -> (u8, u8, u8) {
    let bytes = hex.as_bytes();
    assert!(bytes.len() == 7 && bytes[0] == b'#', "palette colors are #rrggbb");
    (
        nibble(bytes[1]) * 16 + nibble(bytes[2]),
        nibble(bytes[3]) * 16 + nibble(bytes[4]),
        nibble(bytes[5]) * 16 + nibble(bytes[6]),
    )
}

const fn nibble(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        _ => panic!("palette colors use lowercase hex digits"),
    }
}

/// A color drawn from the base palette
///
/// Only the palette vocabulary is representable; there is no raw hex variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Palette { family: ColorFamily, shade: Shade },
    White,
    Black,
}

impl ColorToken {
    /// Token for `family` at `shade`
    pub const fn new(family: ColorFamily, shade: Shade) -> Self {
        ColorToken::Palette { family, shade }
    }

    /// Concrete `#rrggbb` value of this token
    pub const fn hex(&self) -> &'static str {
        match *self {
            ColorToken::Palette { family, shade } => HEX[family as usize][shade as usize],
            ColorToken::White => WHITE,
            ColorToken::Black => BLACK,
        }
    }

    /// Decoded `(r, g, b)` components
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match *self {
            ColorToken::Palette { family, shade } => RGB[family as usize][shade as usize],
            ColorToken::White => (255, 255, 255),
            ColorToken::Black => (0, 0, 0),
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorToken::Palette { family, shade } => write!(f, "{}-{}", family, shade),
            ColorToken::White => f.write_str("white"),
            ColorToken::Black => f.write_str("black"),
        }
    }
}

impl FromStr for ColorToken {
    type Err = ThemeError;

    fn from_str(s: &str) -> ThemeResult<Self> {
        parse_token(s).ok_or_else(|| ThemeError::UnknownToken {
            path: "<input>".to_string(),
            token: s.to_string(),
        })
    }
}

fn parse_token(s: &str) -> Option<ColorToken> {
    match s {
        "white" => return Some(ColorToken::White),
        "black" => return Some(ColorToken::Black),
        _ => {}
    }
    let (family, level) = s.split_once('-')?;
    let family = ColorFamily::parse(family)?;
    let shade = Shade::from_level(level.parse().ok()?)?;
    Some(ColorToken::new(family, shade))
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColorToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Shorthands used by the theme tables
pub mod tokens {
    use super::{ColorFamily, ColorToken, Shade};

    pub const WHITE: ColorToken = ColorToken::White;

    macro_rules! family_fn {
        ($($name:ident => $family:ident),* $(,)?) => {
            $(
                pub const fn $name(shade: Shade) -> ColorToken {
                    ColorToken::new(ColorFamily::$family, shade)
                }
            )*
        };
    }

    family_fn! {
        amber => Amber,
        blue => Blue,
        cyan => Cyan,
        gray => Gray,
        green => Green,
        orange => Orange,
        red => Red,
        sky => Sky,
        zinc => Zinc,
    }
}
