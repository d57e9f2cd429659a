//! Model a color with the HSL notation.

use std::fmt;

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color specified with the HSL notation.
    ///
    /// When produced by [`crate::convert::rgb_to_hsl`] the hue is a fraction
    /// of a full turn and every component is rounded to 2 decimal places, so
    /// converting back to RGB can land up to 1.8 degrees away from the
    /// source hue.
    /// [`Hsl::to_rgb`] expects the hue in degrees.
    pub struct Hsl {
        /// The hue component of the color.
        hue: Component,
        /// The saturation component of the color, in `[0, 1]`.
        saturation: Component,
        /// The lightness component of the color, in `[0, 1]`.
        lightness: Component,
    }
}

impl Hsl {
    /// Returns true if the color has no hue.
    pub fn is_achromatic(&self) -> bool {
        self.saturation == 0.0
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.hue, self.saturation, self.lightness)
    }
}
