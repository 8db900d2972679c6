//! The dispatch handle.
//!
//! A [`Toolkit`] binds the operations of this crate to one implementation.
//! [`Toolkit::global`] is the handle behind the crate-level functions;
//! explicit handles are useful when a caller wants a particular
//! implementation regardless of configuration.

#[cfg(feature = "iterables")]
use std::hash::Hash;
use std::sync::OnceLock;

use crate::backend::{self, Kernels};
#[cfg(feature = "sequences")]
use crate::error::IndexesError;
use crate::error::{BackendUnavailableError, Error};
#[cfg(feature = "iterables")]
use crate::iterables::{self, Identity, Unique};
use crate::resolver::{self, Preference, Resolution};
#[cfg(feature = "sequences")]
use crate::sequences::{self, ByteIndexes, ByteNeedle, Indexes, Sequence};

/// Operations bound to one implementation.
///
/// `Toolkit` is a copyable reference to a static set of [`Kernels`]; it can
/// be shared freely between threads.
///
/// # Examples
///
/// ```rust
/// use iterkit::Toolkit;
/// use iterkit::resolver::Resolution;
///
/// let toolkit = Toolkit::portable();
/// assert_eq!(toolkit.resolution(), Resolution::Portable);
///
/// let letters: String = toolkit.unique("abracadabra".chars()).collect();
/// assert_eq!(letters, "abrcd");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Toolkit {
    kernels: &'static dyn Kernels,
}

static_assertions::assert_impl_all!(Toolkit: Send, Sync, Copy);

impl Toolkit {
    /// The portable implementation.
    #[must_use]
    pub fn portable() -> Self {
        Self {
            kernels: &backend::PortableKernels,
        }
    }

    /// The accelerated implementation.
    #[cfg(feature = "accelerated")]
    #[must_use]
    pub fn accelerated() -> Self {
        Self {
            kernels: &backend::AcceleratedKernels,
        }
    }

    /// The implementation serving `resolution`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendUnavailableError`] for [`Resolution::Native`] when the
    /// `accelerated` feature is disabled.
    pub fn for_resolution(resolution: Resolution) -> Result<Self, BackendUnavailableError> {
        backend::kernels_for(resolution)
            .map(|kernels| Self { kernels })
            .ok_or(BackendUnavailableError { resolution })
    }

    /// The implementation `preference` resolves to.
    ///
    /// # Errors
    ///
    /// Returns [`BackendUnavailableError`] if the preference requires an
    /// implementation this build lacks.
    pub fn for_preference(preference: Preference) -> Result<Self, BackendUnavailableError> {
        Self::for_resolution(resolver::resolve(preference))
    }

    /// The implementation selected by the environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the environment holds an
    /// unrecognized preference, and [`Error::BackendUnavailable`] if it
    /// requires an implementation this build lacks.
    pub fn current() -> Result<Self, Error> {
        let resolution = resolver::resolve_implementation(None)?;
        Ok(Self::for_resolution(resolution)?)
    }

    /// The process-wide handle used by the crate-level functions.
    ///
    /// Resolved from the environment on first use, then reused.
    ///
    /// # Panics
    ///
    /// Panics if [`Toolkit::current`] fails: the environment variable holds
    /// an unrecognized value, or requires the accelerated implementation in a
    /// build without it. Use [`Toolkit::current`] to handle these cases.
    #[must_use]
    pub fn global() -> Self {
        static GLOBAL: OnceLock<Result<Toolkit, Error>> = OnceLock::new();
        match GLOBAL.get_or_init(Self::current) {
            Ok(toolkit) => *toolkit,
            Err(error) => panic!("iterkit: {error}"),
        }
    }

    /// The implementation this handle uses.
    #[must_use]
    pub fn resolution(self) -> Resolution {
        self.kernels.resolution()
    }

    /// The kernels this handle uses.
    #[must_use]
    pub fn kernels(self) -> &'static dyn Kernels {
        self.kernels
    }

    /// See [`iterables::length`].
    #[cfg(feature = "iterables")]
    pub fn length<I: IntoIterator>(self, iterable: I) -> usize {
        iterables::length(iterable)
    }

    /// See [`iterables::all_equal`].
    #[cfg(feature = "iterables")]
    pub fn all_equal<I>(self, iterable: I) -> bool
    where
        I: IntoIterator,
        I::Item: PartialEq,
    {
        iterables::all_equal(iterable)
    }

    /// Returns whether all elements of `iterable` are distinct.
    ///
    /// Scanning stops at the first repeated element.
    #[cfg(feature = "iterables")]
    pub fn all_unique<I>(self, iterable: I) -> bool
    where
        I: IntoIterator,
        I::Item: Hash + Eq + Clone,
    {
        self.all_unique_by(iterable, iterables::identity)
    }

    /// Returns whether all elements of `iterable` have distinct keys.
    #[cfg(feature = "iterables")]
    pub fn all_unique_by<I, K, F>(self, iterable: I, key: F) -> bool
    where
        I: IntoIterator,
        K: Hash + Eq,
        F: FnMut(&I::Item) -> K,
    {
        iterables::all_unique_with(iterable, key, self.kernels.key_state())
    }

    /// Lazily yields the first occurrence of each element of `iterable`.
    #[cfg(feature = "iterables")]
    pub fn unique<I>(self, iterable: I) -> Unique<I::IntoIter, Identity<I::Item>, I::Item>
    where
        I: IntoIterator,
        I::Item: Hash + Eq + Clone,
    {
        self.unique_by(iterable, iterables::identity as Identity<I::Item>)
    }

    /// Lazily yields the first element of `iterable` for each distinct key.
    #[cfg(feature = "iterables")]
    pub fn unique_by<I, K, F>(self, iterable: I, key: F) -> Unique<I::IntoIter, F, K>
    where
        I: IntoIterator,
        K: Hash + Eq,
        F: FnMut(&I::Item) -> K,
    {
        iterables::unique_with(iterable, key, self.kernels.key_state())
    }

    /// See [`sequences::indexes`].
    #[cfg(feature = "sequences")]
    pub fn indexes<'s, S, V>(
        self,
        sequence: &'s S,
        value: V,
        start: Option<isize>,
        end: Option<isize>,
    ) -> Indexes<'s, S, V>
    where
        S: Sequence + ?Sized,
        V: PartialEq<S::Element>,
    {
        sequences::indexes(sequence, value, start, end)
    }

    /// Lazily yields the positions in `haystack[start:end]` where `needle`
    /// occurs, scanning with this handle's kernels.
    ///
    /// `needle` may be a byte, a byte string, or an integer that is checked
    /// against the byte domain.
    ///
    /// # Errors
    ///
    /// Returns [`IndexesError::ByteOutOfRange`] for an integer outside
    /// `0..=255` and [`IndexesError::IncompatibleNeedle`] for text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterkit::Toolkit;
    /// use iterkit::error::IndexesError;
    ///
    /// let toolkit = Toolkit::portable();
    /// let positions: Vec<usize> = toolkit.byte_indexes(b"abcd", b"cd", None, None)?.collect();
    /// assert_eq!(positions, vec![2]);
    ///
    /// assert_eq!(
    ///     toolkit.byte_indexes(b"abcd", 256, None, None).unwrap_err(),
    ///     IndexesError::ByteOutOfRange { value: 256 }
    /// );
    /// # Ok::<(), IndexesError>(())
    /// ```
    #[cfg(feature = "sequences")]
    pub fn byte_indexes<'h, 'n, N>(
        self,
        haystack: &'h [u8],
        needle: N,
        start: Option<isize>,
        end: Option<isize>,
    ) -> Result<ByteIndexes<'h, 'n>, IndexesError>
    where
        N: TryInto<ByteNeedle<'n>>,
        IndexesError: From<N::Error>,
    {
        let needle = needle.try_into()?;
        Ok(sequences::byte_indexes_with(
            self.kernels,
            haystack,
            needle,
            start,
            end,
        ))
    }
}
