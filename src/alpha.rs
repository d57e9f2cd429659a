//! Coerce user supplied alpha values into `[0, 1]`.

use crate::{
    color::{Component, Flags},
    diagnostics::{Policy, Warning},
};

/// An alpha as it was supplied, before any coercion.
#[derive(Clone, Debug, PartialEq)]
pub enum AlphaValue {
    /// A numeric alpha.
    Number(Component),
    /// An alpha in text form, such as `"0.5"`.
    Text(String),
    /// No alpha was given.
    Missing,
}

impl From<Component> for AlphaValue {
    fn from(value: Component) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AlphaValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AlphaValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<AlphaValue>> From<Option<T>> for AlphaValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Coerce an alpha into `[0, 1]`. Coercions are logged.
///
/// Text is parsed as a number, anything that is not a number becomes `1`,
/// values above `1` become `1` and values below `0` become `0`.
pub fn alpha_value(value: impl Into<AlphaValue>) -> Component {
    let mut flags = Flags::empty();
    alpha_value_with(value, Policy::Log, &mut flags).unwrap_or(1.0)
}

/// Coerce an alpha into `[0, 1]`, reporting each coercion to `policy` and
/// marking it in `flags`.
pub fn alpha_value_with(
    value: impl Into<AlphaValue>,
    policy: Policy,
    flags: &mut Flags,
) -> Result<Component, Warning> {
    let value = value.into();

    let number = match &value {
        AlphaValue::Number(n) => *n,
        AlphaValue::Text(text) => text.trim().parse::<Component>().unwrap_or(Component::NAN),
        AlphaValue::Missing => return Ok(1.0),
    };

    if number.is_nan() {
        *flags |= Flags::ALPHA_COERCED;
        let text = match value {
            AlphaValue::Text(text) => text,
            _ => number.to_string(),
        };
        policy.report(Warning::InvalidAlpha(text))?;
        return Ok(1.0);
    }

    if number > 1.0 {
        *flags |= Flags::ALPHA_COERCED;
        policy.report(Warning::AlphaAboveOne(number))?;
        return Ok(1.0);
    }

    if number < 0.0 {
        *flags |= Flags::ALPHA_COERCED;
        policy.report(Warning::AlphaBelowZero(number))?;
        return Ok(0.0);
    }

    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numerical_values_become_one() {
        assert_eq!(alpha_value("nope"), 1.0);
        assert_eq!(alpha_value(""), 1.0);
        assert_eq!(alpha_value(Component::NAN), 1.0);
        assert_eq!(alpha_value(None::<Component>), 1.0);
    }

    #[test]
    fn zero_is_kept() {
        assert_eq!(alpha_value(0.0), 0.0);
        assert_eq!(alpha_value("0"), 0.0);
    }

    #[test]
    fn fractions_are_kept() {
        assert_eq!(alpha_value(0.1), 0.1);
        assert_eq!(alpha_value(0.153), 0.153);
        assert_eq!(alpha_value("0.21"), 0.21);
        assert_eq!(alpha_value(Some(0.5)), 0.5);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(alpha_value(1.2), 1.0);
        assert_eq!(alpha_value(21.0), 1.0);
        assert_eq!(alpha_value(Component::INFINITY), 1.0);
        assert_eq!(alpha_value(-0.23), 0.0);
        assert_eq!(alpha_value(-10.0), 0.0);
    }

    #[test]
    fn coercions_are_flagged() {
        let mut flags = Flags::empty();
        alpha_value_with(0.4, Policy::Silent, &mut flags).unwrap();
        assert!(flags.is_empty());

        alpha_value_with(-1.0, Policy::Silent, &mut flags).unwrap();
        assert_eq!(flags, Flags::ALPHA_COERCED);
    }

    #[test]
    fn raise_policy_rejects_coercions() {
        let mut flags = Flags::empty();
        assert_eq!(
            alpha_value_with("nope", Policy::Raise, &mut flags),
            Err(Warning::InvalidAlpha("nope".to_string()))
        );
        assert_eq!(
            alpha_value_with(1.5, Policy::Raise, &mut flags),
            Err(Warning::AlphaAboveOne(1.5))
        );
        assert_eq!(alpha_value_with(1.0, Policy::Raise, &mut flags), Ok(1.0));
    }
}
