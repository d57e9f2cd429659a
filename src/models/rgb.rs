//! Model a color with the RGB notation.

use std::fmt;

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color specified with red, green and blue channels in `[0, 255]`.
    ///
    /// Channels are integral everywhere except in the intermediate result of
    /// [`crate::mix::mix_rgba_values`].
    pub struct Rgb {
        /// The red channel of the color.
        red: Component,
        /// The green channel of the color.
        green: Component,
        /// The blue channel of the color.
        blue: Component,
    }
}

impl Rgb {
    /// The fallback for every input that can not be resolved.
    pub const BLACK: Rgb = Rgb {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    /// Create a new color from 8-bit channels.
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red.into(), green.into(), blue.into())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::from_u8(red, green, blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.red, self.green, self.blue)
    }
}

/// RGB channels along with an alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// The color channels.
    pub rgb: Rgb,
    /// The alpha component of the color.
    pub alpha: Component,
}

impl Rgba {
    /// Create a new color with RGB channels and an alpha.
    pub fn new(rgb: Rgb, alpha: Component) -> Self {
        Self { rgb, alpha }
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb, 1.0)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.rgb, self.alpha)
    }
}
