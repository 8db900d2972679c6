//! Conventional slice normalization.
//!
//! A [`Slice`] is the triple `start:end:step`, each part optional. Against a
//! sequence of length `n` it normalizes the way slice notation does:
//!
//! - omitted bounds cover the whole sequence in the direction of `step`
//! - negative bounds count from the end (`-1` is the last element)
//! - out-of-range bounds are clamped, never an error
//! - a zero step is an error
//!
//! ```text
//!   sequence:  a  b  c  d  e
//!   index:     0  1  2  3  4
//!   negative: -5 -4 -3 -2 -1
//!
//!   [1:-1]   -> b c d
//!   [-10:2]  -> a b
//!   [::-2]   -> e c a
//! ```

use std::fmt;

use super::Sequence;
use crate::error::SliceError;

/// Optional `start:end:step` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slice {
    /// First position, inclusive.
    pub start: Option<isize>,
    /// Last position, exclusive.
    pub end: Option<isize>,
    /// Stride; defaults to 1.
    pub step: Option<isize>,
}

impl Slice {
    /// `start:end` with unit step.
    #[must_use]
    pub const fn new(start: Option<isize>, end: Option<isize>) -> Self {
        Self {
            start,
            end,
            step: None,
        }
    }

    /// Returns `self` with the given step.
    #[must_use]
    pub const fn with_step(self, step: isize) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// Normalizes the slice against a sequence of length `len`.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::ZeroStep`] if the step is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterkit::sequences::Slice;
    ///
    /// let indices = Slice::new(Some(-10), Some(2)).indices(5).unwrap();
    /// assert_eq!(indices.iter().collect::<Vec<_>>(), vec![0, 1]);
    ///
    /// let reversed = Slice::default().with_step(-2).indices(5).unwrap();
    /// assert_eq!(reversed.iter().collect::<Vec<_>>(), vec![4, 2, 0]);
    /// ```
    pub fn indices(self, len: usize) -> Result<SliceIndices, SliceError> {
        match self.step.unwrap_or(1) {
            0 => Err(SliceError::ZeroStep),
            step => Ok(self.normalize(step, len)),
        }
    }

    /// Normalizes `start:end` ignoring the step, which cannot fail.
    pub(crate) fn unit_indices(self, len: usize) -> SliceIndices {
        self.normalize(1, len)
    }

    fn normalize(self, step: isize, len: usize) -> SliceIndices {
        debug_assert_ne!(step, 0);

        let length = widen_len(len);
        let stride = step as i128;
        let (lower, upper) = if step < 0 {
            (-1, length - 1)
        } else {
            (0, length)
        };
        let (start_default, stop_default) = if step < 0 {
            (upper, lower)
        } else {
            (lower, upper)
        };

        let start = adjust_bound(self.start, start_default, length, lower, upper);
        let stop = adjust_bound(self.end, stop_default, length, lower, upper);

        let count = if step > 0 && start < stop {
            (stop - start - 1) / stride + 1
        } else if step < 0 && stop < start {
            (start - stop - 1) / -stride + 1
        } else {
            0
        };

        SliceIndices {
            start,
            stop,
            step,
            len: usize::try_from(count).unwrap_or(usize::MAX),
        }
    }
}

/// `len` as an `i128`; every `usize` fits, so bounds of sequences longer
/// than `isize::MAX` still normalize exactly.
pub(crate) fn widen_len(len: usize) -> i128 {
    i128::try_from(len).unwrap_or(i128::MAX)
}

const fn adjust_bound(
    bound: Option<isize>,
    default: i128,
    length: i128,
    lower: i128,
    upper: i128,
) -> i128 {
    match bound {
        None => default,
        Some(bound) if bound < 0 => {
            let shifted = bound as i128 + length;
            if shifted < lower { lower } else { shifted }
        }
        Some(bound) => {
            let bound = bound as i128;
            if bound > upper { upper } else { bound }
        }
    }
}

/// A slice normalized against a concrete length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceIndices {
    /// First selected position (may be `-1` for an empty reversed slice).
    pub start: i128,
    /// Position one step past the last selected one.
    pub stop: i128,
    /// Stride, never zero.
    pub step: isize,
    /// Number of selected positions.
    pub len: usize,
}

impl SliceIndices {
    /// The position in the underlying sequence of the `index`-th selected
    /// element.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        let index = i128::try_from(index).ok()?;
        usize::try_from(self.start + index * self.step as i128).ok()
    }

    /// All selected positions, in slice order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter_map(|index| self.position(index))
    }
}

/// A slice of a [`Sequence`], itself a [`Sequence`].
pub struct SliceView<'s, S: ?Sized> {
    base: &'s S,
    indices: SliceIndices,
}

impl<'s, S: ?Sized> SliceView<'s, S> {
    pub(crate) const fn new(base: &'s S, indices: SliceIndices) -> Self {
        Self { base, indices }
    }

    /// The normalized bounds of this view.
    #[must_use]
    pub const fn indices(&self) -> SliceIndices {
        self.indices
    }
}

impl<S: ?Sized> Clone for SliceView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for SliceView<'_, S> {}

impl<S: ?Sized> fmt::Debug for SliceView<'_, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SliceView")
            .field("indices", &self.indices)
            .finish_non_exhaustive()
    }
}

impl<'s, S: Sequence + ?Sized> Sequence for SliceView<'s, S> {
    type Element = S::Element;
    type Ref<'a>
        = S::Ref<'s>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.indices.len
    }

    fn at(&self, index: usize) -> Option<S::Ref<'s>> {
        let base: &'s S = self.base;
        base.at(self.indices.position(index)?)
    }
}
