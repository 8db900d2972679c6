//! Error types for iterkit.
//!
//! Every fallible operation in the crate reports one of the types in this
//! module. [`Error`] aggregates them for callers that do not care which
//! component failed.
//!
//! Two input problems have no runtime error type because the trait bounds
//! reject them at compile time: elements without hashing support
//! are rejected by the `Hash + Eq` bounds on [`all_unique`](crate::all_unique)
//! and [`unique`](crate::unique), and arguments without indexing support are
//! rejected by the [`Sequence`](crate::sequences::Sequence) bound on
//! [`indexes`](crate::indexes).

use thiserror::Error;

use crate::resolver::{Preference, Resolution};

/// The implementation preference could not be parsed.
///
/// # Examples
///
/// ```rust
/// use iterkit::resolver::get_preference;
///
/// let error = get_preference(Some("REQUIRE_PYTHON")).unwrap_err();
/// assert_eq!(error.value, "REQUIRE_PYTHON");
/// assert!(error.to_string().contains("REQUIRE_PORTABLE"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {variable} value {value:?}; expected one of: {expected}", expected = Preference::expected_names())]
pub struct ConfigurationError {
    /// Where the value came from (the environment variable name, or
    /// `"override"` for a programmatic value).
    pub variable: &'static str,
    /// The rejected value, as given.
    pub value: String,
}

/// An implementation was requested that this build does not include.
///
/// This is how `REQUIRE_NATIVE` fails when the `accelerated` feature is
/// disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "the {resolution} implementation is not available in this build; enable the `accelerated` feature"
)]
pub struct BackendUnavailableError {
    /// The resolution that could not be served.
    pub resolution: Resolution,
}

/// Errors raised when searching a byte sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexesError {
    /// The search value is an integer outside `0..=255`.
    #[error("byte value {value} is outside 0..=255")]
    ByteOutOfRange {
        /// The rejected value.
        value: i128,
    },
    /// The search value is text, which has no single byte value.
    #[error("byte search needle must be an integer or a byte string, found `{found}`")]
    IncompatibleNeedle {
        /// Name of the offending type.
        found: &'static str,
    },
}

impl From<std::convert::Infallible> for IndexesError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Errors raised when normalizing a slice against a sequence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliceError {
    /// A slice step of zero selects nothing meaningful.
    #[error("slice step cannot be zero")]
    ZeroStep,
}

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// See [`ConfigurationError`].
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// See [`BackendUnavailableError`].
    #[error(transparent)]
    BackendUnavailable(#[from] BackendUnavailableError),
    /// See [`IndexesError`].
    #[error(transparent)]
    Indexes(#[from] IndexesError),
    /// See [`SliceError`].
    #[error(transparent)]
    Slice(#[from] SliceError),
}
