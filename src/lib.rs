//! # iterkit
//!
//! Small, lazy utilities over iterables and indexable sequences, with a
//! portable implementation and an accelerated one selected at runtime.
//!
//! ## Overview
//!
//! - **Iterables**: [`length`], [`all_equal`], [`all_unique`], [`unique`]
//!   and their key-projected variants
//! - **Sequences**: [`indexes`] for any [`Sequence`](sequences::Sequence),
//!   [`byte_indexes`] for byte strings
//! - **Resolver**: picks the implementation from the `ITERKIT_IMPL`
//!   environment variable once per process
//! - **Toolkit**: a copyable handle bound to one implementation
//!
//! The crate-level functions use [`Toolkit::global`]. Both implementations
//! return identical results; they differ only in speed.
//!
//! `str` and `String` are searched as UTF-8 bytes, so [`indexes`] over text
//! reports byte offsets. Search a `Vec<char>` for character positions.
//!
//! ## Feature Flags
//!
//! - `iterables`: operations over arbitrary iterables
//! - `sequences`: operations over indexable sequences
//! - `accelerated`: the accelerated implementation (`FxHash` keys and
//!   word-at-a-time byte scanning)
//!
//! All three are enabled by default.
//!
//! ## Configuration
//!
//! `ITERKIT_IMPL` accepts `PREFER_NATIVE` (the default), `PREFER_PORTABLE`,
//! `REQUIRE_PORTABLE` and `REQUIRE_NATIVE`, case-insensitively. See
//! [`resolver`] for the selection policy.
//!
//! ## Example
//!
//! ```rust
//! let letters: String = iterkit::unique("abracadabra".chars()).collect();
//! assert_eq!(letters, "abrcd");
//!
//! let positions: Vec<usize> = iterkit::indexes("abracadabra", b'a', None, None).collect();
//! assert_eq!(positions, vec![0, 3, 5, 7, 10]);
//!
//! assert!(!iterkit::all_unique_by(0..100, |i| i % 10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use iterkit::prelude::*;
///
/// let toolkit = Toolkit::portable();
/// assert_eq!(toolkit.resolution(), Resolution::Portable);
/// ```
pub mod prelude {
    pub use crate::Toolkit;
    pub use crate::error::Error;
    pub use crate::resolver::{Preference, Resolution};

    #[cfg(feature = "sequences")]
    pub use crate::sequences::{ByteNeedle, Sequence, Slice};
}

pub mod backend;
pub mod error;
pub mod resolver;

#[cfg(feature = "iterables")]
pub mod iterables;

#[cfg(feature = "sequences")]
pub mod sequences;

mod toolkit;

#[cfg(feature = "iterables")]
use std::hash::Hash;

pub use resolver::resolve_implementation;
pub use toolkit::Toolkit;

use resolver::Resolution;

/// The implementation the crate-level functions use.
///
/// # Panics
///
/// See [`Toolkit::global`].
#[must_use]
pub fn implementation() -> Resolution {
    Toolkit::global().resolution()
}

/// Whether the crate-level functions use the accelerated implementation.
///
/// # Panics
///
/// See [`Toolkit::global`].
#[must_use]
pub fn is_native() -> bool {
    implementation() == Resolution::Native
}

/// Whether the crate-level functions use the portable implementation.
///
/// # Panics
///
/// See [`Toolkit::global`].
#[must_use]
pub fn is_portable() -> bool {
    implementation() == Resolution::Portable
}

/// Returns the number of elements in `iterable`.
///
/// Iterators that report an exact size are not traversed.
///
/// # Panics
///
/// See [`Toolkit::global`].
#[cfg(feature = "iterables")]
pub fn length<I: IntoIterator>(iterable: I) -> usize {
    Toolkit::global().length(iterable)
}

/// Returns whether all elements of `iterable` are equal; `true` when empty.
///
/// # Panics
///
/// See [`Toolkit::global`].
#[cfg(feature = "iterables")]
pub fn all_equal<I>(iterable: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    Toolkit::global().all_equal(iterable)
}

/// Returns whether all elements of `iterable` are distinct.
///
/// # Panics
///
/// See [`Toolkit::global`].
#[cfg(feature = "iterables")]
pub fn all_unique<I>(iterable: I) -> bool
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
{
    Toolkit::global().all_unique(iterable)
}

/// Returns whether the keys of all elements of `iterable` are distinct.
///
/// # Panics
///
/// See [`Toolkit::global`].
#[cfg(feature = "iterables")]
pub fn all_unique_by<I, K, F>(iterable: I, key: F) -> bool
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    Toolkit::global().all_unique_by(iterable, key)
}

/// Lazily yields the first occurrence of each element of `iterable`.
///
/// # Panics
///
/// See [`Toolkit::global`].
#[cfg(feature = "iterables")]
pub fn unique<I>(
    iterable: I,
) -> iterables::Unique<I::IntoIter, iterables::Identity<I::Item>, I::Item>
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
{
    Toolkit::global().unique(iterable)
}

/// Lazily yields the first element of `iterable` for each distinct key.
///
/// ```rust
/// let letters: String = iterkit::unique_by("aAbBcCD".chars(), |c| c.to_ascii_lowercase()).collect();
/// assert_eq!(letters, "abcD");
/// ```
///
/// # Panics
///
/// See [`Toolkit::global`].
#[cfg(feature = "iterables")]
pub fn unique_by<I, K, F>(iterable: I, key: F) -> iterables::Unique<I::IntoIter, F, K>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    Toolkit::global().unique_by(iterable, key)
}

/// Lazily yields the positions of `value` in `sequence[start:end]`.
///
/// Over `str` and `String` the elements are bytes and the positions are
/// byte offsets:
///
/// ```rust
/// let positions: Vec<usize> = iterkit::indexes("héllo", b'l', None, None).collect();
/// assert_eq!(positions, vec![3, 4]);
/// ```
///
/// # Panics
///
/// See [`Toolkit::global`].
#[cfg(feature = "sequences")]
pub fn indexes<S, V>(
    sequence: &S,
    value: V,
    start: Option<isize>,
    end: Option<isize>,
) -> sequences::Indexes<'_, S, V>
where
    S: sequences::Sequence + ?Sized,
    V: PartialEq<S::Element>,
{
    Toolkit::global().indexes(sequence, value, start, end)
}

/// Lazily yields the positions of `needle` in `haystack[start:end]`.
///
/// # Errors
///
/// See [`Toolkit::byte_indexes`].
///
/// # Panics
///
/// See [`Toolkit::global`].
#[cfg(feature = "sequences")]
pub fn byte_indexes<'h, 'n, N>(
    haystack: &'h [u8],
    needle: N,
    start: Option<isize>,
    end: Option<isize>,
) -> Result<sequences::ByteIndexes<'h, 'n>, error::IndexesError>
where
    N: TryInto<sequences::ByteNeedle<'n>>,
    error::IndexesError: From<N::Error>,
{
    Toolkit::global().byte_indexes(haystack, needle, start, end)
}
