//! The notations a color can be expressed in. Conversions between them live
//! in [`crate::convert`].

pub mod hsl;
pub mod rgb;

pub use hsl::Hsl;
pub use rgb::{Rgb, Rgba};
