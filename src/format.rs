//! Render a [`Color`] as a CSS color string.

use std::{fmt, str::FromStr};

use crate::Color;

/// The notation used when rendering a [`Color`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `#rrggbb`
    Hex,
    /// `rgb(r, g, b)`
    #[default]
    Rgb,
    /// `rgba(r, g, b, a)`
    Rgba,
    /// `hsl(h, s, l)`
    Hsl,
    /// `hsla(h, s, l, a)`
    Hsla,
}

impl Mode {
    /// Parse a mode name, falling back to [`Mode::Hex`] for anything
    /// unknown.
    pub fn parse_or_hex(name: &str) -> Self {
        name.parse().unwrap_or(Self::Hex)
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            "hsl" => Ok(Self::Hsl),
            "hsla" => Ok(Self::Hsla),
            _ => Err(()),
        }
    }
}

impl Color {
    /// Render this color in the given notation.
    pub fn to_css(&self, mode: Mode) -> String {
        match mode {
            Mode::Hex => self.hex().to_string(),
            Mode::Rgb => format!("rgb({})", self.rgb()),
            Mode::Rgba => format!("rgba({})", self.rgba()),
            Mode::Hsl => format!("hsl({})", self.hsl()),
            Mode::Hsla => format!("hsla({}, {})", self.hsl(), self.alpha()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(Mode::default()))
    }
}
