//! Operations over indexable sequences.
//!
//! A [`Sequence`] reports its length in constant time and returns the
//! element at a position. Implementations are provided for slices, arrays,
//! `Vec`, `VecDeque`, `str`/`String` (as bytes) and integer ranges.
//!
//! This module provides:
//!
//! - [`Slice`] / [`SliceView`]: conventional `start:end:step` slicing
//! - [`indexes`] / [`Indexes`]: every position holding a value
//! - [`byte_indexes_with`] / [`ByteIndexes`]: the same search over raw bytes,
//!   with byte and byte-string needles
//!
//! # Examples
//!
//! ```rust
//! use iterkit::sequences::indexes;
//!
//! let positions: Vec<usize> = indexes(b"abracadabra".as_slice(), b'a', None, None).collect();
//! assert_eq!(positions, vec![0, 3, 5, 7, 10]);
//!
//! let positions: Vec<usize> = indexes(&[0, 1, 4, 4], 4, Some(1), Some(3)).collect();
//! assert_eq!(positions, vec![2]);
//! ```

mod bytes;
mod indexes;
mod slice;

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::ops::Range;

pub use bytes::{ByteIndexes, ByteNeedle, byte_indexes_with};
pub use indexes::{Indexes, indexes};
pub use slice::{Slice, SliceIndices, SliceView};

use crate::error::SliceError;

/// A sized collection with positional access.
///
/// `len` must be constant time and `at(i)` must return `Some` exactly for
/// `i < len()`.
pub trait Sequence {
    /// The element type, used for comparisons.
    type Element;

    /// What [`at`](Sequence::at) hands out: a reference for stored elements,
    /// the value itself for computed ones.
    type Ref<'a>: Borrow<Self::Element>
    where
        Self: 'a;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`, or `None` past the end.
    fn at(&self, index: usize) -> Option<Self::Ref<'_>>;

    /// A view of `self[start:end]` with conventional slice semantics.
    fn range_view(&self, start: Option<isize>, end: Option<isize>) -> SliceView<'_, Self> {
        SliceView::new(self, Slice::new(start, end).unit_indices(self.len()))
    }

    /// A view of `self[start:end:step]`.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::ZeroStep`] if the step is zero.
    fn slice(&self, slice: Slice) -> Result<SliceView<'_, Self>, SliceError> {
        Ok(SliceView::new(self, slice.indices(self.len())?))
    }
}

impl<T> Sequence for [T] {
    type Element = T;
    type Ref<'a>
        = &'a T
    where
        Self: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Element = T;
    type Ref<'a>
        = &'a T
    where
        Self: 'a;

    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for Vec<T> {
    type Element = T;
    type Ref<'a>
        = &'a T
    where
        Self: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Element = T;
    type Ref<'a>
        = &'a T
    where
        Self: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn at(&self, index: usize) -> Option<&T> {
        Self::get(self, index)
    }
}

impl Sequence for str {
    type Element = u8;
    type Ref<'a> = &'a u8;

    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    fn at(&self, index: usize) -> Option<&u8> {
        self.as_bytes().get(index)
    }
}

impl Sequence for String {
    type Element = u8;
    type Ref<'a> = &'a u8;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn at(&self, index: usize) -> Option<&u8> {
        self.as_bytes().get(index)
    }
}

macro_rules! impl_sequence_for_range {
    ($($int:ty),* $(,)?) => {
        $(
            impl Sequence for Range<$int> {
                type Element = $int;
                type Ref<'a> = $int;

                fn len(&self) -> usize {
                    if self.start < self.end {
                        usize::try_from(self.end.abs_diff(self.start)).unwrap_or(usize::MAX)
                    } else {
                        0
                    }
                }

                fn at(&self, index: usize) -> Option<$int> {
                    if index >= Sequence::len(self) {
                        return None;
                    }
                    let start = i128::try_from(self.start).ok()?;
                    let offset = i128::try_from(index).ok()?;
                    <$int>::try_from(start + offset).ok()
                }
            }
        )*
    };
}

impl_sequence_for_range!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect<S: Sequence + ?Sized>(sequence: &S) -> Vec<S::Element>
    where
        S::Element: Clone,
    {
        (0..sequence.len())
            .filter_map(|index| sequence.at(index))
            .map(|element| Borrow::<S::Element>::borrow(&element).clone())
            .collect()
    }

    #[rstest]
    fn test_slice_like_sequences_agree() {
        let vec = vec![1, 2, 3];
        let array = [1, 2, 3];
        let deque: VecDeque<i32> = vec.iter().copied().collect();

        assert_eq!(collect(vec.as_slice()), vec);
        assert_eq!(collect(&array), vec);
        assert_eq!(collect(&vec), vec);
        assert_eq!(collect(&deque), vec);
    }

    #[rstest]
    fn test_str_is_a_byte_sequence() {
        assert_eq!(collect("abc"), b"abc".to_vec());
        assert_eq!(collect(&"abc".to_string()), b"abc".to_vec());
    }

    #[rstest]
    #[case(0..0, 0)]
    #[case(5..2, 0)]
    #[case(-3..3, 6)]
    #[case(i64::MIN..i64::MAX, usize::MAX)]
    fn test_range_len(#[case] range: Range<i64>, #[case] expected: usize) {
        assert_eq!(Sequence::len(&range), expected);
    }

    #[rstest]
    fn test_range_at() {
        let range = -2_i8..126;
        assert_eq!(Sequence::len(&range), 128);
        assert_eq!(range.at(0), Some(-2));
        assert_eq!(range.at(127), Some(125));
        assert_eq!(range.at(128), None);
    }

    #[rstest]
    fn test_u8_range_covers_full_domain() {
        let range = 0_u8..255;
        assert_eq!(Sequence::len(&range), 255);
        assert_eq!(range.at(254), Some(254));
    }

    #[rstest]
    fn test_at_past_end_is_none() {
        assert_eq!(Sequence::at(&[1, 2][..], 2), None);
        assert_eq!(Sequence::at(&VecDeque::<u8>::new(), 0), None);
    }
}
