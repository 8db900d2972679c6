//! Searching byte sequences.
//!
//! A byte haystack can be searched for a single byte or for a byte string.
//! Needles given as wider integers must fit in a `u8`; `&str` and `char`
//! needles are rejected because their encoding is not a byte value.

use std::fmt;
use std::iter::FusedIterator;

use super::Slice;
use crate::backend::Kernels;
use crate::error::IndexesError;

/// What to search a byte sequence for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteNeedle<'n> {
    /// A single byte.
    Byte(u8),
    /// A byte string; occurrences may overlap.
    Bytes(&'n [u8]),
}

impl From<u8> for ByteNeedle<'_> {
    fn from(byte: u8) -> Self {
        Self::Byte(byte)
    }
}

impl<'n> From<&'n [u8]> for ByteNeedle<'n> {
    fn from(bytes: &'n [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'n, const N: usize> From<&'n [u8; N]> for ByteNeedle<'n> {
    fn from(bytes: &'n [u8; N]) -> Self {
        Self::Bytes(bytes.as_slice())
    }
}

impl<'n> From<&'n Vec<u8>> for ByteNeedle<'n> {
    fn from(bytes: &'n Vec<u8>) -> Self {
        Self::Bytes(bytes.as_slice())
    }
}

macro_rules! impl_try_from_integer {
    ($($int:ty),* $(,)?) => {
        $(
            impl TryFrom<$int> for ByteNeedle<'_> {
                type Error = IndexesError;

                fn try_from(value: $int) -> Result<Self, IndexesError> {
                    u8::try_from(value)
                        .map(Self::Byte)
                        .map_err(|_| IndexesError::ByteOutOfRange {
                            value: i128::try_from(value).unwrap_or(i128::MAX),
                        })
                }
            }
        )*
    };
}

impl_try_from_integer!(i8, i16, i32, i64, isize, u16, u32, u64, usize);

impl TryFrom<&str> for ByteNeedle<'_> {
    type Error = IndexesError;

    fn try_from(_: &str) -> Result<Self, IndexesError> {
        Err(IndexesError::IncompatibleNeedle { found: "str" })
    }
}

impl TryFrom<char> for ByteNeedle<'_> {
    type Error = IndexesError;

    fn try_from(_: char) -> Result<Self, IndexesError> {
        Err(IndexesError::IncompatibleNeedle { found: "char" })
    }
}

/// Returns a lazy iterator over the positions in `haystack[start:end]` where
/// `needle` occurs, scanning with `kernels`.
///
/// Positions are absolute. A [`ByteNeedle::Bytes`] needle matches only
/// where it fits entirely inside the window, and consecutive matches may
/// overlap. An empty byte string matches at every position of the window,
/// so every reported position is a valid index into `haystack`.
///
/// # Examples
///
/// ```rust
/// use iterkit::backend::PortableKernels;
/// use iterkit::sequences::{ByteNeedle, byte_indexes_with};
///
/// let positions: Vec<usize> =
///     byte_indexes_with(&PortableKernels, b"aaaa", ByteNeedle::Bytes(b"aa"), None, None).collect();
/// assert_eq!(positions, vec![0, 1, 2]);
/// ```
pub fn byte_indexes_with<'h, 'n>(
    kernels: &'static dyn Kernels,
    haystack: &'h [u8],
    needle: ByteNeedle<'n>,
    start: Option<isize>,
    end: Option<isize>,
) -> ByteIndexes<'h, 'n> {
    let indices = Slice::new(start, end).unit_indices(haystack.len());
    let window_start = usize::try_from(indices.start).unwrap_or(0);

    ByteIndexes {
        kernels,
        haystack,
        needle,
        cursor: window_start,
        limit: window_start + indices.len,
        done: indices.len == 0,
    }
}

/// Iterator returned by [`byte_indexes_with`] and
/// [`Toolkit::byte_indexes`](crate::Toolkit::byte_indexes).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ByteIndexes<'h, 'n> {
    kernels: &'static dyn Kernels,
    haystack: &'h [u8],
    needle: ByteNeedle<'n>,
    cursor: usize,
    limit: usize,
    done: bool,
}

impl ByteIndexes<'_, '_> {
    fn finish(&mut self) -> Option<usize> {
        self.done = true;
        None
    }
}

impl Iterator for ByteIndexes<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }

        let found = match self.needle {
            ByteNeedle::Bytes([]) => (self.cursor < self.limit).then_some(0),
            ByteNeedle::Byte(byte) => {
                let window = self.haystack.get(self.cursor..self.limit)?;
                self.kernels.find_byte(window, byte)
            }
            ByteNeedle::Bytes(bytes) => {
                let window = self.haystack.get(self.cursor..self.limit)?;
                self.kernels.find_bytes(window, bytes)
            }
        };

        match found {
            Some(relative) => {
                let position = self.cursor + relative;
                self.cursor = position + 1;
                Some(position)
            }
            None => self.finish(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = self.limit.saturating_sub(self.cursor);
        match self.needle {
            ByteNeedle::Bytes([]) => (remaining, Some(remaining)),
            _ => (0, Some(remaining)),
        }
    }
}

impl FusedIterator for ByteIndexes<'_, '_> {}

impl fmt::Debug for ByteIndexes<'_, '_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ByteIndexes")
            .field("kernels", &self.kernels.name())
            .field("needle", &self.needle)
            .field("cursor", &self.cursor)
            .field("limit", &self.limit)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
