//! String in, string out helpers in the spirit of the Sass color functions.
//!
//! Every helper accepts anything that converts into a [`ColorValue`] and
//! falls back to black for inputs that can not be resolved.

use crate::{
    alpha::AlphaValue,
    color::{Color, Component},
    format::Mode,
    parse::ColorValue,
};

/// Lighten a color by `amount` percent and return the hex result.
pub fn lighten(color: impl Into<ColorValue>, amount: Component) -> String {
    Color::new(color).lighten(amount).to_css(Mode::Hex)
}

/// Darken a color by `amount` percent and return the hex result.
pub fn darken(color: impl Into<ColorValue>, amount: Component) -> String {
    Color::new(color).darken(amount).to_css(Mode::Hex)
}

/// Mix two colors and return the hex result. `weight` is the share of the
/// first color.
pub fn mix(
    first: impl Into<ColorValue>,
    second: impl Into<ColorValue>,
    weight: Component,
) -> String {
    Color::new(first)
        .mix(&Color::new(second), weight)
        .to_css(Mode::Hex)
}

/// Render a color with the given alpha as `rgba(r, g, b, a)`.
pub fn rgba(color: impl Into<ColorValue>, alpha: impl Into<AlphaValue>) -> String {
    Color::new(color).with_alpha(alpha).to_css(Mode::Rgba)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_ADJUST_AMOUNT, DEFAULT_MIX_WEIGHT};

    #[test]
    fn darken_to_a_value() {
        assert_eq!(darken("red", 20.0), "#990000");
        assert_eq!(darken("#eee", 20.0), "#bababa");
        assert_eq!(darken("#ff0000", 30.0), "#660000");
        assert_eq!(darken("#dd0202", 37.0), "#230000");
        assert_eq!(darken("#fff", DEFAULT_ADJUST_AMOUNT), "#cccccc");
    }

    #[test]
    fn darken_by_zero() {
        assert_eq!(darken("#fff", 0.0), "#ffffff");
    }

    #[test]
    fn lighten_to_a_value() {
        assert_eq!(lighten("red", 20.0), "#ff6565");
        assert_eq!(lighten("black", 20.0), "#333333");
        assert_eq!(lighten("#ff0000", 30.0), "#ff9999");
        assert_eq!(lighten("#dd0202", 37.0), "#fe9f9f");
        assert_eq!(lighten("#000", DEFAULT_ADJUST_AMOUNT), "#333333");
    }

    #[test]
    fn lighten_by_zero() {
        assert_eq!(lighten("#000", 0.0), "#000000");
    }

    #[test]
    fn mix_using_color_names() {
        assert_eq!(mix("red", "yellow", DEFAULT_MIX_WEIGHT), "#ff8000");
        assert_eq!(mix("dodgerblue", "yellow", DEFAULT_MIX_WEIGHT), "#8fc880");
        assert_eq!(mix("black", "white", DEFAULT_MIX_WEIGHT), "#808080");
        assert_eq!(mix("red", "white", DEFAULT_MIX_WEIGHT), "#ff8080");
    }

    #[test]
    fn mix_with_weight_values() {
        assert_eq!(mix("red", "white", 0.0), "#ffffff");
        assert_eq!(mix("red", "white", 0.1), "#ffe6e6");
        assert_eq!(mix("red", "white", 0.2), "#ffcccc");
        assert_eq!(mix("red", "white", 0.3), "#ffb3b3");
        assert_eq!(mix("red", "white", 0.5), "#ff8080");
        assert_eq!(mix("red", "white", 0.87), "#ff2121");
        assert_eq!(mix("red", "white", 0.99), "#ff0303");
    }

    #[test]
    fn rgba_from_color_names() {
        assert_eq!(rgba("black", 1.0), "rgba(0, 0, 0, 1)");
        assert_eq!(rgba("white", 1.0), "rgba(255, 255, 255, 1)");
        assert_eq!(rgba("yellow", 1.0), "rgba(255, 255, 0, 1)");
        assert_eq!(rgba("dodgerblue", 1.0), "rgba(30, 144, 255, 1)");
    }

    #[test]
    fn rgba_from_hex() {
        assert_eq!(rgba("#000000", 1.0), "rgba(0, 0, 0, 1)");
        assert_eq!(rgba("#ffffff", 1.0), "rgba(255, 255, 255, 1)");
        assert_eq!(rgba("#ff9900", 1.0), "rgba(255, 153, 0, 1)");
        assert_eq!(rgba("#00ff00", 1.0), "rgba(0, 255, 0, 1)");
    }

    #[test]
    fn rgba_from_rgb_strings() {
        assert_eq!(rgba("0,0,0", 1.0), "rgba(0, 0, 0, 1)");
        assert_eq!(rgba("255, 255, 255", 1.0), "rgba(255, 255, 255, 1)");
        assert_eq!(rgba("255, 153, 0", 1.0), "rgba(255, 153, 0, 1)");
        assert_eq!(rgba("0, 255,0", 1.0), "rgba(0, 255, 0, 1)");
    }

    #[test]
    fn rgba_with_numeric_alpha() {
        assert_eq!(rgba("black", 0.5), "rgba(0, 0, 0, 0.5)");
        assert_eq!(rgba("black", 0.21), "rgba(0, 0, 0, 0.21)");
        assert_eq!(rgba("white", 0.21), "rgba(255, 255, 255, 0.21)");
        assert_eq!(rgba("white", 0.0), "rgba(255, 255, 255, 0)");
    }

    #[test]
    fn rgba_with_string_alpha() {
        assert_eq!(rgba("black", "0.5"), "rgba(0, 0, 0, 0.5)");
        assert_eq!(rgba("black", "0.21"), "rgba(0, 0, 0, 0.21)");
        assert_eq!(rgba("white", "0.21"), "rgba(255, 255, 255, 0.21)");
        assert_eq!(rgba("white", "0"), "rgba(255, 255, 255, 0)");
    }

    #[test]
    fn rgba_corrects_alpha_over_one() {
        assert_eq!(rgba("black", 1.0), "rgba(0, 0, 0, 1)");
        assert_eq!(rgba("black", 1.2), "rgba(0, 0, 0, 1)");
        assert_eq!(rgba("black", 21.0), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn rgba_corrects_alpha_under_zero() {
        assert_eq!(rgba("black", 0.0), "rgba(0, 0, 0, 0)");
        assert_eq!(rgba("black", -0.23), "rgba(0, 0, 0, 0)");
        assert_eq!(rgba("black", -10.0), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn rgba_falls_back_to_black() {
        assert_eq!(rgba("", None::<Component>), "rgba(0, 0, 0, 1)");
        assert_eq!(rgba("notacolor", "nope"), "rgba(0, 0, 0, 1)");
    }
}
