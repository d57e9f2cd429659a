//! Resolve raw color inputs into RGB channels.
//!
//! An input is classified once into a [`ColorValue`] and then resolved with
//! a single match. Resolution never fails under the default policy, any
//! input that can not be used resolves to black.

use crate::{
    color::{Component, Flags},
    convert::hex_to_rgb,
    diagnostics::{Policy, Warning},
    math::clamp_channel,
    models::{Rgb, Rgba},
    names::hex_by_color_name,
};

/// Returns true if the value looks like a hex color. Only the leading `#` is
/// checked, the digits are validated by [`hex_to_rgb`].
pub fn is_hex(value: &str) -> bool {
    value.starts_with('#')
}

/// Returns true if the string splits on commas into exactly 3 parts.
pub fn is_rgb(value: &str) -> bool {
    rgb_values_from_str(value).is_some()
}

/// Split an `"r,g,b"` string into its 3 trimmed parts.
pub fn rgb_values_from_str(value: &str) -> Option<[&str; 3]> {
    let mut parts = value.split(',').map(str::trim);
    let values = [parts.next()?, parts.next()?, parts.next()?];
    if parts.next().is_some() {
        return None;
    }
    Some(values)
}

/// Parse an `"r,g,b"` string into RGB channels. Each part must be a number,
/// the channels are rounded and clamped into `[0, 255]`.
pub fn rgb_from_str(value: &str) -> Option<Rgb> {
    let [r, g, b] = rgb_values_from_str(value)?;
    let channel = |v: &str| -> Option<Component> {
        let v = v.parse::<Component>().ok()?;
        v.is_finite().then(|| clamp_channel(v.round()))
    };
    Some(Rgb::new(channel(r)?, channel(g)?, channel(b)?))
}

/// Any input that can be resolved to a color.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    /// A `#rgb` or `#rrggbb` string.
    Hex(String),
    /// RGB channels that are passed through.
    Rgb(Rgb),
    /// An `"r,g,b"` string.
    RgbString(String),
    /// A CSS color name.
    Named(String),
}

impl ColorValue {
    /// Classify a string input.
    pub fn parse(value: &str) -> Self {
        if is_hex(value) {
            Self::Hex(value.to_string())
        } else if is_rgb(value) {
            Self::RgbString(value.to_string())
        } else {
            Self::Named(value.to_string())
        }
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&String> for ColorValue {
    fn from(value: &String) -> Self {
        Self::parse(value)
    }
}

impl From<Rgb> for ColorValue {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Rgba> for ColorValue {
    fn from(value: Rgba) -> Self {
        Self::Rgb(value.rgb)
    }
}

impl From<(u8, u8, u8)> for ColorValue {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::Rgb(value.into())
    }
}

/// Resolve any input to RGB channels, falling back to black. Fallbacks are
/// logged.
pub fn resolve_to_rgb(value: impl Into<ColorValue>) -> Rgb {
    let mut flags = Flags::empty();
    resolve(&value.into(), Policy::Log, &mut flags).unwrap_or(Rgb::BLACK)
}

/// Resolve any input to RGB channels.
///
/// The channels are always integers in `[0, 255]`. Every fallback to black is reported to `policy` and marked in `flags`.
/// An error is only returned when the policy raises.
pub fn resolve(value: &ColorValue, policy: Policy, flags: &mut Flags) -> Result<Rgb, Warning> {
    let fallback = |flags: &mut Flags, flag: Flags, warning: Warning| {
        *flags |= flag;
        policy.report(warning).map(|_| Rgb::BLACK)
    };

    match value {
        ColorValue::Hex(hex) => match hex_to_rgb(hex) {
            Some(rgb) => Ok(rgb),
            None => fallback(flags, Flags::INVALID_HEX, Warning::InvalidHex(hex.clone())),
        },
        ColorValue::Rgb(rgb) => {
            if rgb.to_components().is_finite() {
                Ok(rgb.map(|c| clamp_channel(c.round())))
            } else {
                fallback(flags, Flags::INVALID_RGB, Warning::InvalidRgb(rgb.to_string()))
            }
        }
        ColorValue::RgbString(value) => match rgb_from_str(value) {
            Some(rgb) => Ok(rgb),
            None => fallback(flags, Flags::INVALID_RGB, Warning::InvalidRgb(value.clone())),
        },
        ColorValue::Named(name) => {
            let Some(hex) = hex_by_color_name(name) else {
                *flags |= Flags::UNKNOWN_NAME;
                policy.report(Warning::UnknownColorName(name.clone()))?;
                return fallback(flags, Flags::UNKNOWN_NAME, Warning::InvalidColor(name.clone()));
            };
            match hex_to_rgb(hex) {
                Some(rgb) => Ok(rgb),
                None => fallback(flags, Flags::INVALID_HEX, Warning::InvalidHex(hex.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        assert!(is_hex("#fff"));
        assert!(is_hex("#nope"));
        assert!(!is_hex("fff"));
        assert!(!is_hex(""));

        assert!(is_rgb("0,0,0"));
        assert!(is_rgb("255, 153, 0"));
        assert!(is_rgb("a,b,c"));
        assert!(!is_rgb("0,0"));
        assert!(!is_rgb("0,0,0,0"));
        assert!(!is_rgb("red"));
    }

    #[test]
    fn rgb_values_are_trimmed() {
        assert_eq!(rgb_values_from_str(" 0, 255,0 "), Some(["0", "255", "0"]));
    }

    #[test]
    fn rgb_strings_parse_to_channels() {
        assert_eq!(rgb_from_str("0, 255,0"), Some(Rgb::new(0.0, 255.0, 0.0)));
        assert_eq!(rgb_from_str("300, -1, 12"), Some(Rgb::new(255.0, 0.0, 12.0)));
        assert_eq!(rgb_from_str("a, b, c"), None);
        assert_eq!(rgb_from_str("NaN, 0, 0"), None);
    }

    #[test]
    fn inputs_are_classified_once() {
        assert_eq!(ColorValue::from("#abc"), ColorValue::Hex("#abc".to_string()));
        assert_eq!(
            ColorValue::from("1, 2, 3"),
            ColorValue::RgbString("1, 2, 3".to_string())
        );
        assert_eq!(ColorValue::from("red"), ColorValue::Named("red".to_string()));
        assert_eq!(
            ColorValue::from((1, 2, 3)),
            ColorValue::Rgb(Rgb::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn resolve_every_kind_of_input() {
        assert_eq!(resolve_to_rgb("#ff9900"), Rgb::new(255.0, 153.0, 0.0));
        assert_eq!(resolve_to_rgb("255, 153, 0"), Rgb::new(255.0, 153.0, 0.0));
        assert_eq!(resolve_to_rgb("dodgerblue"), Rgb::new(30.0, 144.0, 255.0));
        assert_eq!(
            resolve_to_rgb(Rgb::new(12.0, 400.0, -3.0)),
            Rgb::new(12.0, 255.0, 0.0)
        );
    }

    #[test]
    fn fractional_channels_are_rounded() {
        assert_eq!(rgb_from_str("1.5, 2.4, 3"), Some(Rgb::new(2.0, 2.0, 3.0)));
        assert_eq!(resolve_to_rgb("1.5, 2.4, 3"), Rgb::new(2.0, 2.0, 3.0));
        assert_eq!(
            resolve_to_rgb(Rgb::new(10.7, 0.2, 254.6)),
            Rgb::new(11.0, 0.0, 255.0)
        );

        let rgb = resolve_to_rgb(Rgb::new(127.5, 300.4, -0.6));
        for c in [rgb.red, rgb.green, rgb.blue] {
            assert_eq!(c.fract(), 0.0);
        }
    }

    #[test]
    fn unknown_names_fall_back_to_black() {
        let mut flags = Flags::empty();
        let rgb = resolve(&"nope".into(), Policy::Silent, &mut flags).unwrap();
        assert_eq!(rgb, Rgb::BLACK);
        assert_eq!(flags, Flags::UNKNOWN_NAME);
    }

    #[test]
    fn invalid_inputs_fall_back_to_black() {
        let mut flags = Flags::empty();
        let rgb = resolve(&"#12".into(), Policy::Silent, &mut flags).unwrap();
        assert_eq!(rgb, Rgb::BLACK);
        assert_eq!(flags, Flags::INVALID_HEX);

        let mut flags = Flags::empty();
        let rgb = resolve(&"x, y, z".into(), Policy::Silent, &mut flags).unwrap();
        assert_eq!(rgb, Rgb::BLACK);
        assert_eq!(flags, Flags::INVALID_RGB);

        let mut flags = Flags::empty();
        let value = ColorValue::Rgb(Rgb::new(Component::NAN, 0.0, 0.0));
        let rgb = resolve(&value, Policy::Log, &mut flags).unwrap();
        assert_eq!(rgb, Rgb::BLACK);
        assert_eq!(flags, Flags::INVALID_RGB);
    }

    #[test]
    fn raise_policy_returns_the_first_warning() {
        let mut flags = Flags::empty();
        let err = resolve(&"nope".into(), Policy::Raise, &mut flags).unwrap_err();
        assert_eq!(err, Warning::UnknownColorName("nope".to_string()));
        assert!(flags.contains(Flags::UNKNOWN_NAME));

        let err = resolve(&"#xyz".into(), Policy::Raise, &mut flags).unwrap_err();
        assert_eq!(err, Warning::InvalidHex("#xyz".to_string()));
    }

    #[test]
    fn valid_inputs_leave_flags_empty() {
        let mut flags = Flags::empty();
        resolve(&"red".into(), Policy::Raise, &mut flags).unwrap();
        resolve(&"#abc".into(), Policy::Raise, &mut flags).unwrap();
        resolve(&"1,2,3".into(), Policy::Raise, &mut flags).unwrap();
        assert!(flags.is_empty());
    }
}
