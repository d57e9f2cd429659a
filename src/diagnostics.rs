//! Advisory warnings and the policy that decides what happens to them.
//!
//! Nothing in this crate panics or fails on bad color input. Instead a
//! [`Warning`] is handed to a [`Policy`] which either drops it, logs it
//! through `tracing` or turns it into an error.

use std::{env, fmt, str::FromStr};

use crate::color::Component;

/// Name of the environment variable read by [`Policy::from_env`].
pub const ENV_VAR: &str = "TINCTURE_ENV";

/// A recoverable problem with a color input. Each one has a documented
/// fallback that is used when the warning is not raised.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Warning {
    /// The name is not in the CSS name table.
    #[error("{0} isn't a valid CSS color name.")]
    UnknownColorName(String),
    /// The input could not be resolved to any color.
    #[error("{0} isn't a valid color.")]
    InvalidColor(String),
    /// The RGB value has missing or non numeric channels.
    #[error("{0} isn't a valid RGB value.")]
    InvalidRgb(String),
    /// The hex string could not be parsed.
    #[error("{0} isn't a valid hex color.")]
    InvalidHex(String),
    /// The alpha is not a number.
    #[error("alpha: {0} isn't a valid number.")]
    InvalidAlpha(String),
    /// The alpha is above 1.
    #[error("alpha: {0} cannot be more than 1.")]
    AlphaAboveOne(Component),
    /// The alpha is below 0.
    #[error("alpha: {0} cannot be less than 0.")]
    AlphaBelowZero(Component),
}

/// What to do with a [`Warning`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Policy {
    /// Drop warnings.
    Silent,
    /// Log warnings with `tracing::warn!`.
    #[default]
    Log,
    /// Return warnings as errors.
    Raise,
}

impl Policy {
    /// Build a policy from the `TINCTURE_ENV` environment variable.
    ///
    /// `development` logs, `strict` raises and anything else, including an
    /// unset variable, is silent.
    pub fn from_env() -> Self {
        Self::from_env_value(env::var(ENV_VAR).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("development") => Self::Log,
            Some(v) if v.eq_ignore_ascii_case("strict") => Self::Raise,
            _ => Self::Silent,
        }
    }

    /// Hand a warning to this policy. Only [`Policy::Raise`] returns an
    /// error.
    pub fn report(self, warning: Warning) -> Result<(), Warning> {
        match self {
            Self::Silent => Ok(()),
            Self::Log => {
                tracing::warn!(target: "tincture", "{warning}");
                Ok(())
            }
            Self::Raise => Err(warning),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Silent => "silent",
            Self::Log => "log",
            Self::Raise => "raise",
        })
    }
}

/// Returned when a string does not name a [`Policy`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown warning policy `{0}`, expected silent, log or raise")]
pub struct UnknownPolicy(pub String);

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "log" => Ok(Self::Log),
            "raise" => Ok(Self::Raise),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
