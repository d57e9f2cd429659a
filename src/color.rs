//! A [`Color`] is a snapshot of one color in every projection the crate
//! supports (hex, RGB, HSL, alpha) together with its derived shade.

use bitflags::bitflags;

use crate::alpha::{alpha_value_with, AlphaValue};
use crate::convert::{hex_to_rgb, rgb_to_hex};
use crate::diagnostics::{Policy, Warning};
use crate::mix::mix_rgba_values;
use crate::models::{Hsl, Rgb, Rgba};
use crate::parse::{resolve, ColorValue};
use crate::shade::{classify, Shade};

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Returns true if all three components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite()
    }
}

bitflags! {
    /// Flags to mark any fallbacks that were applied while building a
    /// [`Color`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when the input was a name missing from the CSS name table.
        const UNKNOWN_NAME = 1 << 0;
        /// Set when the input was an RGB value that could not be used.
        const INVALID_RGB = 1 << 1;
        /// Set when the input was a hex string that could not be parsed.
        const INVALID_HEX = 1 << 2;
        /// Set when the alpha was clamped or replaced.
        const ALPHA_COERCED = 1 << 3;

        /// Set when the color components fell back to black.
        const FELL_BACK_TO_BLACK =
            Self::UNKNOWN_NAME.bits() | Self::INVALID_RGB.bits() | Self::INVALID_HEX.bits();
    }
}

/// Default amount used by [`Color::lighten`] and [`Color::darken`].
pub const DEFAULT_ADJUST_AMOUNT: Component = 20.0;

/// One color, projected into every supported notation.
///
/// A `Color` is never patched in place. Every transformation returns a new
/// snapshot that is derived from scratch, so the projections can not go out
/// of sync with each other.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    alpha: Component,
    shade: Shade,
    flags: Flags,
}

impl Color {
    /// Create a new [`Color`] from any supported input. Unusable inputs are
    /// reported through `tracing` and replaced with black.
    /// ```rust
    /// use tincture::Color;
    /// let c = Color::new("dodgerblue");
    /// assert_eq!(c.hex(), "#1e90ff");
    /// ```
    pub fn new(value: impl Into<ColorValue>) -> Self {
        let mut flags = Flags::empty();
        let rgb = resolve(&value.into(), Policy::Log, &mut flags).unwrap_or(Rgb::BLACK);
        Self::build(rgb, 1.0, flags)
    }

    /// Create a new [`Color`], reporting any fallbacks through the given
    /// policy. Only [`Policy::Raise`] can produce an error.
    pub fn with_policy(value: impl Into<ColorValue>, policy: Policy) -> Result<Self, Warning> {
        let mut flags = Flags::empty();
        let rgb = resolve(&value.into(), policy, &mut flags)?;
        Ok(Self::build(rgb, 1.0, flags))
    }

    /// Create a new [`Color`] from RGB channels.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::new(ColorValue::Rgb(rgb))
    }

    /// Derive every projection from the given channels. The channels are
    /// snapped to the hex value first so that the RGB projection always
    /// round-trips through the hex projection.
    fn build(rgb: Rgb, alpha: Component, flags: Flags) -> Self {
        let hex = rgb_to_hex(rgb.red, rgb.green, rgb.blue);
        let rgb = hex_to_rgb(&hex).unwrap_or(Rgb::BLACK);
        let hsl = rgb.to_hsl();
        let shade = classify(&rgb, &hsl, None);

        Self {
            hex,
            rgb,
            hsl,
            alpha,
            shade,
            flags,
        }
    }

    /// The hex projection, `#rrggbb` in lowercase.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The RGB projection.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The HSL projection. The hue is stored as a fraction of a full turn.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The RGB projection along with the alpha of this color.
    pub fn rgba(&self) -> Rgba {
        Rgba::new(self.rgb, self.alpha)
    }

    /// The alpha of this color in `[0, 1]`.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// The shade classification of this color.
    pub fn shade(&self) -> Shade {
        self.shade
    }

    /// Any fallbacks that were applied while building this color.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Return this color with a new alpha. Out of range or non numeric
    /// values are coerced.
    pub fn with_alpha(&self, alpha: impl Into<AlphaValue>) -> Self {
        let mut flags = self.flags;
        let alpha = alpha_value_with(alpha, Policy::Log, &mut flags).unwrap_or(1.0);
        Self {
            alpha,
            flags,
            ..self.clone()
        }
    }

    /// Return this color with its lightness raised by `amount` percent.
    ///
    /// The color is rebuilt from the rounded HSL projection, so the hue of a
    /// chromatic color can drift by up to 1.8 degrees.
    pub fn lighten(&self, amount: Component) -> Self {
        self.shift_lightness(amount)
    }

    /// Return this color with its lightness lowered by `amount` percent.
    pub fn darken(&self, amount: Component) -> Self {
        self.shift_lightness(-amount)
    }

    fn shift_lightness(&self, amount: Component) -> Self {
        if amount == 0.0 || amount.is_nan() {
            return self.clone();
        }

        let Hsl {
            hue,
            saturation,
            lightness,
        } = self.hsl;

        // The stored hue is a fraction of a turn, the conversion wants
        // degrees.
        let shifted = Hsl::new(hue * 360.0, saturation, lightness + amount / 100.0);
        Self::build(shifted.to_rgb(), self.alpha, self.flags)
    }

    /// Mix another color into this one. `weight` is the share of this color
    /// in the result, `0.5` being an even mix.
    pub fn mix(&self, other: &Color, weight: Component) -> Self {
        let mixed = mix_rgba_values(&self.rgba(), &other.rgba(), weight);
        Self::build(mixed.rgb, mixed.alpha, self.flags | other.flags)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::build(Rgb::BLACK, 1.0, Flags::empty())
    }
}
