//! Coarse classification of a color and the text color to put on top of it.

use std::fmt;

use crate::{
    color::Component,
    convert::hex_to_rgb,
    models::{Hsl, Rgb},
    parse::is_hex,
};

/// Lightness at or above which a color is always [`Shade::Lightest`].
const LIGHTEST_THRESHOLD: Component = 0.9;
/// Lightness at or above which a color is considered light.
const LIGHT_THRESHOLD: Component = 0.61;
/// Lightness below which a color is always [`Shade::Darkest`].
const DARKEST_THRESHOLD: Component = 0.16;

/// Coarse lightness/contrast classification of a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shade {
    /// Near white.
    Lightest,
    /// Light enough to carry black text.
    Light,
    /// Dark enough to carry white text.
    Dark,
    /// Near black.
    Darkest,
}

impl Shade {
    /// The lowercase name of the shade.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lightest => "lightest",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Darkest => "darkest",
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The text color that reads best on a background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// Black text.
    Black,
    /// White text.
    White,
}

impl TextColor {
    /// The CSS name of the text color.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per channel weights, in thousandths, used to estimate how bright a
/// background is.
///
/// The defaults lean much harder on green than the usual `299/587/114`
/// luminance weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LuminanceWeights {
    /// Weight of the red channel.
    pub red: Component,
    /// Weight of the green channel.
    pub green: Component,
    /// Weight of the blue channel.
    pub blue: Component,
}

impl Default for LuminanceWeights {
    fn default() -> Self {
        Self {
            red: 129.0,
            green: 522.0,
            blue: 49.0,
        }
    }
}

fn text_color_for(rgb: &Rgb, weights: &LuminanceWeights) -> TextColor {
    let shade =
        ((rgb.red * weights.red + rgb.green * weights.green + rgb.blue * weights.blue) / 1000.0)
            .round();

    if shade >= 128.0 {
        TextColor::Black
    } else {
        TextColor::White
    }
}

/// Return the text color that reads best on the given background hex.
///
/// Returns [`None`] when the background is not a hex string and
/// [`TextColor::Black`] when it is one that can not be parsed.
pub fn optimal_text_color(
    background_hex: &str,
    weights: Option<LuminanceWeights>,
) -> Option<TextColor> {
    if !is_hex(background_hex) {
        return None;
    }

    let Some(rgb) = hex_to_rgb(background_hex) else {
        return Some(TextColor::Black);
    };

    Some(text_color_for(&rgb, &weights.unwrap_or_default()))
}

/// Classify a color that was already resolved. `hsl` must be the HSL
/// projection of `rgb`.
pub(crate) fn classify(rgb: &Rgb, hsl: &Hsl, weights: Option<LuminanceWeights>) -> Shade {
    let l = hsl.lightness;
    let dark_text = text_color_for(rgb, &weights.unwrap_or_default()) == TextColor::Black;

    // The two middle bands classify the same way on purpose.
    if l >= LIGHTEST_THRESHOLD {
        Shade::Lightest
    } else if l >= LIGHT_THRESHOLD {
        if dark_text {
            Shade::Light
        } else {
            Shade::Dark
        }
    } else if l >= DARKEST_THRESHOLD {
        if dark_text {
            Shade::Light
        } else {
            Shade::Dark
        }
    } else {
        Shade::Darkest
    }
}

/// Return the shade classification of a hex color, or [`None`] when it is
/// not a valid hex.
pub fn color_shade(hex: &str, weights: Option<LuminanceWeights>) -> Option<Shade> {
    let rgb = hex_to_rgb(hex)?;
    Some(classify(&rgb, &rgb.to_hsl(), weights))
}
