//! tincture converts colors between the hex, RGB and HSL notations and
//! adjusts them: lighten, darken, mix, shade classification and picking a
//! readable text color.
//!
//! ```rust
//! use tincture::{functions, Color, Mode};
//!
//! assert_eq!(functions::mix("red", "yellow", 0.5), "#ff8000");
//!
//! let c = Color::new("#000").lighten(20.0);
//! assert_eq!(c.to_css(Mode::Hex), "#333333");
//! ```

#![deny(missing_docs)]

pub mod alpha;
mod color;
pub mod convert;
pub mod diagnostics;
mod format;
pub mod functions;
mod math;
mod mix;
pub mod models;
pub mod names;
pub mod parse;
pub mod shade;


pub use alpha::{alpha_value, AlphaValue};
pub use color::{Color, Component, Components, Flags, DEFAULT_ADJUST_AMOUNT};
pub use convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use diagnostics::{Policy, Warning};
pub use format::Mode;
pub use mix::{mix_rgba_values, DEFAULT_MIX_WEIGHT};
pub use models::{Hsl, Rgb, Rgba};
pub use parse::{resolve_to_rgb, ColorValue};
pub use shade::{color_shade, optimal_text_color, LuminanceWeights, Shade, TextColor};
