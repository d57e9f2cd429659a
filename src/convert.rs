//! Conversions between the hex, RGB and HSL notations.
//!
//! The low level parsers return [`None`] when a value can not be parsed. A
//! parse failure is never the same as black, falling back is left to the
//! resolvers in [`crate::parse`].
//!
//! NOTE: The arithmetic below follows a fixed order of operations. Shade and
//!       lighten/darken results sit right on floor boundaries for many common
//!       colors, so reordering the math changes visible output.

use crate::{
    color::{Component, Components},
    math::{clamp_channel, round_to_hundredths},
    models::{Hsl, Rgb},
    parse::is_hex,
};

impl Rgb {
    /// Convert this color to a `#rrggbb` hex string.
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.red, self.green, self.blue)
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.red, self.green, self.blue)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB. The hue is taken in
    /// degrees.
    pub fn to_rgb(&self) -> Rgb {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

/// Parse a `#rgb` or `#rrggbb` hex string into RGB channels.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    if !is_hex(hex) {
        return None;
    }

    let digits = hex[1..].as_bytes();
    let expanded: [u8; 6] = match *digits {
        [r, g, b] => [r, r, g, g, b, b],
        [r0, r1, g0, g1, b0, b1] => [r0, r1, g0, g1, b0, b1],
        _ => return None,
    };

    let byte = |hi: u8, lo: u8| -> Option<Component> {
        Some((from_hex(hi)? * 16 + from_hex(lo)?).into())
    };

    Some(Rgb::new(
        byte(expanded[0], expanded[1])?,
        byte(expanded[2], expanded[3])?,
        byte(expanded[4], expanded[5])?,
    ))
}

#[inline]
fn from_hex(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Format a single channel as a 2 digit lowercase hex byte. Zero and values
/// that are not numbers render as `00`.
pub fn component_to_hex(c: Component) -> String {
    if c == 0.0 || !c.is_finite() {
        return "00".to_string();
    }

    format!("{:02x}", clamp_channel(c.round()) as u8)
}

/// Format RGB channels as a `#rrggbb` hex string. If any channel is not a
/// number the result is `#000000`.
pub fn rgb_to_hex(red: Component, green: Component, blue: Component) -> String {
    if !Components(red, green, blue).is_finite() {
        return "#000000".to_string();
    }

    format!(
        "#{}{}{}",
        component_to_hex(red),
        component_to_hex(green),
        component_to_hex(blue)
    )
}

/// Parse a hex string straight into the HSL notation.
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(|rgb| rgb.to_hsl())
}

/// Convert from RGB notation to HSL notation.
///
/// The hue is returned as a fraction of a full turn. Every component is
/// rounded to 2 decimal places unless it is integral. If any channel is not a
/// number the result is `hsl(0, 0, 0)`.
pub fn rgb_to_hsl(red: Component, green: Component, blue: Component) -> Hsl {
    if !Components(red, green, blue).is_finite() {
        return Hsl::new(0.0, 0.0, 0.0);
    }

    let r = red / 255.0;
    let g = green / 255.0;
    let b = blue / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let lightness = (max + min) / 2.0;

    let (hue, saturation) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let saturation = if lightness > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let hue = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (hue / 6.0, saturation)
    };

    Hsl::new(hue, saturation, lightness).map(round_to_hundredths)
}

/// Evaluate one channel of an HSL color. `t` is the hue offset for the
/// channel, as a fraction of a turn.
pub fn hue_to_rgb(p: Component, q: Component, t: Component) -> Component {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }

    p
}

/// Convert from HSL notation to RGB notation.
///
/// The hue is taken in degrees, saturation and lightness in `[0, 1]`. The
/// channels are floored and clamped into `[0, 255]`.
pub fn hsl_to_rgb(hue: Component, saturation: Component, lightness: Component) -> Rgb {
    let h = hue / 360.0;
    let s = saturation;
    let l = lightness;

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let channel = |t: Component| clamp_channel((hue_to_rgb(p, q, t) * 255.0).floor());

    Rgb::new(
        channel(h + 1.0 / 3.0),
        channel(h),
        channel(h - 1.0 / 3.0),
    )
}
