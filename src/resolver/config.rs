//! Environment configuration for implementation selection.
//!
//! The preference is read from [`IMPLEMENTATION_VARIABLE`] at most once per
//! process. Values are trimmed and matched ASCII case-insensitively; an empty
//! value is treated as unset.

use std::env;
use std::sync::OnceLock;

use super::Preference;
use crate::error::ConfigurationError;

/// Environment variable holding the implementation preference.
pub const IMPLEMENTATION_VARIABLE: &str = "ITERKIT_IMPL";

/// Source label used in errors for programmatic overrides.
pub(crate) const OVERRIDE_SOURCE: &str = "override";

/// Parses a raw preference value from `source`.
///
/// `None` and blank values yield the default preference.
pub(crate) fn parse_preference(
    source: &'static str,
    raw: Option<&str>,
) -> Result<Preference, ConfigurationError> {
    let Some(raw) = raw else {
        return Ok(Preference::default());
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(Preference::default());
    }

    Preference::ALL
        .into_iter()
        .find(|preference| value.eq_ignore_ascii_case(preference.as_str()))
        .ok_or_else(|| ConfigurationError {
            variable: source,
            value: raw.to_string(),
        })
}

fn read_env_preference() -> Result<Preference, ConfigurationError> {
    preference_from_var(env::var(IMPLEMENTATION_VARIABLE))
}

/// Interprets the result of looking up [`IMPLEMENTATION_VARIABLE`].
fn preference_from_var(
    value: Result<String, env::VarError>,
) -> Result<Preference, ConfigurationError> {
    let preference = match value {
        Ok(value) => parse_preference(IMPLEMENTATION_VARIABLE, Some(&value)),
        Err(env::VarError::NotPresent) => Ok(Preference::default()),
        Err(env::VarError::NotUnicode(value)) => Err(ConfigurationError {
            variable: IMPLEMENTATION_VARIABLE,
            value: value.to_string_lossy().into_owned(),
        }),
    };

    if let Ok(preference) = preference {
        tracing::debug!(
            target: "iterkit::resolver",
            variable = IMPLEMENTATION_VARIABLE,
            %preference,
            "implementation preference loaded"
        );
    }
    preference
}

/// The preference from the environment, read once and memoized.
pub(crate) fn env_preference() -> Result<Preference, ConfigurationError> {
    static PREFERENCE: OnceLock<Result<Preference, ConfigurationError>> = OnceLock::new();
    PREFERENCE.get_or_init(read_env_preference).clone()
}
