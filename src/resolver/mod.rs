//! Implementation selection.
//!
//! iterkit ships every operation twice: a portable implementation built on
//! the standard library, and an accelerated one (behind the `accelerated`
//! feature) with a faster key hasher and word-at-a-time byte scanning. This
//! module decides, once per process, which of the two the crate-level
//! functions use.
//!
//! # Policy
//!
//! | Preference         | Accelerated available | Resolution | Warning |
//! |--------------------|-----------------------|------------|---------|
//! | `PREFER_NATIVE`    | yes                   | `NATIVE`   | no      |
//! | `PREFER_NATIVE`    | no                    | `PORTABLE` | yes     |
//! | `REQUIRE_NATIVE`   | yes                   | `NATIVE`   | no      |
//! | `REQUIRE_NATIVE`   | no                    | `NATIVE`   | yes     |
//! | `PREFER_PORTABLE`  | any                   | `PORTABLE` | no      |
//! | `REQUIRE_PORTABLE` | any                   | `PORTABLE` | no      |
//!
//! Resolving `REQUIRE_NATIVE` without the accelerated implementation
//! succeeds; the failure surfaces when a [`Toolkit`](crate::Toolkit) is
//! requested for that resolution.
//!
//! # Examples
//!
//! ```rust
//! use iterkit::resolver::{Preference, Resolution, resolve_implementation};
//!
//! let resolution = resolve_implementation(Some(Preference::RequirePortable)).unwrap();
//! assert_eq!(resolution, Resolution::Portable);
//! ```

mod config;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

pub use config::IMPLEMENTATION_VARIABLE;

use crate::backend;
use crate::error::ConfigurationError;

/// Which implementation the caller would like to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preference {
    /// Use the accelerated implementation when available, else fall back.
    #[default]
    PreferNative,
    /// Use the portable implementation.
    PreferPortable,
    /// Always use the portable implementation.
    RequirePortable,
    /// Always use the accelerated implementation, even if unavailable.
    RequireNative,
}

impl Preference {
    /// Every recognized preference, in the order they are listed to users.
    pub const ALL: [Self; 4] = [
        Self::PreferNative,
        Self::PreferPortable,
        Self::RequirePortable,
        Self::RequireNative,
    ];

    /// The configuration name of this preference.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreferNative => "PREFER_NATIVE",
            Self::PreferPortable => "PREFER_PORTABLE",
            Self::RequirePortable => "REQUIRE_PORTABLE",
            Self::RequireNative => "REQUIRE_NATIVE",
        }
    }

    pub(crate) fn expected_names() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }

    const fn slot(self) -> usize {
        match self {
            Self::PreferNative => 0,
            Self::PreferPortable => 1,
            Self::RequirePortable => 2,
            Self::RequireNative => 3,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Preference {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        get_preference(Some(value))
    }
}

/// The implementation chosen for the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The standard-library implementation.
    Portable,
    /// The accelerated implementation.
    Native,
}

impl Resolution {
    /// Human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portable => "PORTABLE",
            Self::Native => "NATIVE",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A non-fatal diagnostic produced while resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionWarning {
    /// The accelerated implementation was preferred but is unavailable; the
    /// portable one is used instead.
    FallingBackToPortable,
    /// The accelerated implementation is required but unavailable; using it
    /// will fail.
    RequiredNativeUnavailable,
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FallingBackToPortable => formatter.write_str(
                "accelerated implementation not available; falling back to portable implementation",
            ),
            Self::RequiredNativeUnavailable => formatter.write_str(
                "accelerated implementation required but not available; calls will fail",
            ),
        }
    }
}

/// The outcome of applying the selection policy.
///
/// This is a pure function of its inputs; [`resolve`] memoizes it and emits
/// the warning.
///
/// # Examples
///
/// ```rust
/// use iterkit::resolver::{Decision, Preference, Resolution, ResolutionWarning};
///
/// let decision = Decision::new(Preference::PreferNative, false);
/// assert_eq!(decision.resolution, Resolution::Portable);
/// assert_eq!(decision.warning, Some(ResolutionWarning::FallingBackToPortable));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The preference the decision was made for.
    pub preference: Preference,
    /// The chosen implementation.
    pub resolution: Resolution,
    /// The diagnostic to surface, if any.
    pub warning: Option<ResolutionWarning>,
}

impl Decision {
    /// Applies the selection policy.
    #[must_use]
    pub const fn new(preference: Preference, native_available: bool) -> Self {
        let (resolution, warning) = match preference {
            Preference::PreferPortable | Preference::RequirePortable => (Resolution::Portable, None),
            Preference::RequireNative if native_available => (Resolution::Native, None),
            Preference::RequireNative => (
                Resolution::Native,
                Some(ResolutionWarning::RequiredNativeUnavailable),
            ),
            Preference::PreferNative if native_available => (Resolution::Native, None),
            Preference::PreferNative => (
                Resolution::Portable,
                Some(ResolutionWarning::FallingBackToPortable),
            ),
        };
        Self {
            preference,
            resolution,
            warning,
        }
    }

    /// Emits the decision through `tracing`: the warning at `WARN` level if
    /// there is one, the resolution at `DEBUG` level otherwise.
    pub fn report(&self) {
        match self.warning {
            Some(warning) => tracing::warn!(
                target: "iterkit::resolver",
                preference = %self.preference,
                resolution = %self.resolution,
                "{warning}"
            ),
            None => tracing::debug!(
                target: "iterkit::resolver",
                preference = %self.preference,
                resolution = %self.resolution,
                "implementation resolved"
            ),
        }
    }
}

/// Returns the implementation preference.
///
/// With `Some(value)`, `value` is parsed instead of the environment. With
/// `None`, [`IMPLEMENTATION_VARIABLE`] is read on first call and the result is
/// reused for the rest of the process. An unset or blank variable means
/// [`Preference::PreferNative`].
///
/// # Errors
///
/// Returns [`ConfigurationError`] if the value is not one of the names in
/// [`Preference::ALL`] (case-insensitively).
pub fn get_preference(override_value: Option<&str>) -> Result<Preference, ConfigurationError> {
    match override_value {
        Some(value) => config::parse_preference(config::OVERRIDE_SOURCE, Some(value)),
        None => config::env_preference(),
    }
}

/// Returns whether the accelerated implementation is available.
///
/// The probe runs once per process.
#[must_use]
pub fn native_available() -> bool {
    static AVAILABLE: OnceLock<bool> = OnceLock::new();
    *AVAILABLE.get_or_init(backend::probe_accelerated)
}

/// Resolves `preference` to an implementation.
///
/// Each preference is resolved at most once per process; the first
/// resolution reports its [`Decision`] (see [`Decision::report`]) and later
/// calls return the cached value silently.
#[must_use]
pub fn resolve(preference: Preference) -> Resolution {
    static RESOLUTIONS: [OnceLock<Resolution>; 4] = [const { OnceLock::new() }; 4];

    *RESOLUTIONS[preference.slot()].get_or_init(|| {
        let decision = Decision::new(preference, native_available());
        decision.report();
        decision.resolution
    })
}

/// Resolves the active implementation.
///
/// Uses `preference` when given, otherwise the environment preference (see
/// [`get_preference`]).
///
/// # Errors
///
/// Returns [`ConfigurationError`] if no override is given and the
/// environment holds an unrecognized value.
pub fn resolve_implementation(
    preference: Option<Preference>,
) -> Result<Resolution, ConfigurationError> {
    let preference = match preference {
        Some(preference) => preference,
        None => get_preference(None)?,
    };
    Ok(resolve(preference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_slots_are_distinct() {
        let mut slots = Preference::ALL.map(Preference::slot);
        slots.sort_unstable();
        assert_eq!(slots, [0, 1, 2, 3]);
    }

    #[rstest]
    fn test_as_str_round_trips_through_from_str() {
        for preference in Preference::ALL {
            assert_eq!(preference.as_str().parse::<Preference>(), Ok(preference));
        }
    }

    #[rstest]
    fn test_expected_names_is_comma_separated() {
        assert_eq!(
            Preference::expected_names(),
            "PREFER_NATIVE, PREFER_PORTABLE, REQUIRE_PORTABLE, REQUIRE_NATIVE"
        );
    }
}
