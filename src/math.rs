//! Math utility functions.

use num_traits::Float;

/// Round to 2 decimal places, leaving integral values untouched.
pub fn round_to_hundredths<T: Float>(value: T) -> T {
    if value.fract().is_zero() {
        return value;
    }

    let hundred = T::from(100.0).unwrap_or_else(T::one);
    (value * hundred).round() / hundred
}

/// Clamp a channel value into the 8-bit range.
pub fn clamp_channel<T: Float>(value: T) -> T {
    let max = T::from(255.0).unwrap_or_else(T::max_value);
    value.max(T::zero()).min(max)
}

/// Weighted sum of two values, `a * wa + b * wb`.
pub fn weighted<T: Float>(a: T, wa: T, b: T, wb: T) -> T {
    wa * a + wb * b
}
