//! Positions of a value within a sequence.

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;

use super::slice::widen_len;
use super::{Sequence, SliceView};

/// Returns a lazy iterator over the positions of `value` in
/// `sequence[start:end]`, in ascending order.
///
/// `start` and `end` are interpreted as in slice notation: omitted bounds
/// cover the whole sequence, negative bounds count from the end, and
/// out-of-range bounds are clamped. Positions are absolute, that is,
/// relative to the start of `sequence` rather than of the window.
///
/// Any `value` comparable with the element type can be searched for, e.g.
/// `&str` in a sequence of `String`s.
///
/// A `str` or `String` is a sequence of UTF-8 bytes: its elements are `u8`
/// and the positions are byte offsets, not character counts. Collect the
/// `chars()` into a `Vec<char>` to search by character.
///
/// # Examples
///
/// ```rust
/// use iterkit::sequences::indexes;
///
/// let words = vec!["to".to_string(), "be".to_string(), "or".to_string(), "not".to_string(), "to".to_string(), "be".to_string()];
/// let positions: Vec<usize> = indexes(&words, "be", None, None).collect();
/// assert_eq!(positions, vec![1, 5]);
///
/// let positions: Vec<usize> = indexes(&words, "be", Some(-3), None).collect();
/// assert_eq!(positions, vec![5]);
///
/// assert_eq!(indexes(&Vec::<i32>::new(), 0, None, None).count(), 0);
///
/// // Byte offsets: 'é' occupies two bytes.
/// assert_eq!(indexes("héllo", b'l', None, None).collect::<Vec<_>>(), vec![3, 4]);
/// let chars: Vec<char> = "héllo".chars().collect();
/// assert_eq!(indexes(&chars, 'l', None, None).collect::<Vec<_>>(), vec![2, 3]);
/// ```
pub fn indexes<'s, S, V>(
    sequence: &'s S,
    value: V,
    start: Option<isize>,
    end: Option<isize>,
) -> Indexes<'s, S, V>
where
    S: Sequence + ?Sized,
    V: PartialEq<S::Element>,
{
    let view = sequence.range_view(start, end);
    let offset = enumeration_start(start, sequence.len());
    debug_assert!(view.is_empty() || i128::try_from(offset).ok() == Some(view.indices().start));

    Indexes {
        view,
        value,
        cursor: 0,
        offset,
    }
}

/// The absolute position of the first element of `sequence[start:]`.
///
/// `start` is clamped into `[-n, n - 1]` and reduced modulo `n`, so the
/// result lies in `[0, n)`; an empty sequence yields 0.
pub(crate) fn enumeration_start(start: Option<isize>, n: usize) -> usize {
    let length = widen_len(n);
    if length == 0 {
        return 0;
    }
    let clamped = start.map_or(0, |start| start as i128).clamp(-length, length - 1);
    usize::try_from(clamped.rem_euclid(length)).unwrap_or(0)
}

/// Iterator returned by [`indexes`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Indexes<'s, S: ?Sized, V> {
    view: SliceView<'s, S>,
    value: V,
    cursor: usize,
    offset: usize,
}

impl<S, V> Iterator for Indexes<'_, S, V>
where
    S: Sequence + ?Sized,
    V: PartialEq<S::Element>,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.cursor < self.view.len() {
            let position = self.cursor;
            self.cursor += 1;

            let matched = self
                .view
                .at(position)
                .is_some_and(|element| self.value == *Borrow::<S::Element>::borrow(&element));
            if matched {
                return Some(self.offset + position);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.view.len().saturating_sub(self.cursor)))
    }
}

impl<S, V> FusedIterator for Indexes<'_, S, V>
where
    S: Sequence + ?Sized,
    V: PartialEq<S::Element>,
{
}

impl<S: ?Sized, V: fmt::Debug> fmt::Debug for Indexes<'_, S, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Indexes")
            .field("view", &self.view)
            .field("value", &self.value)
            .field("cursor", &self.cursor)
            .field("offset", &self.offset)
            .finish()
    }
}
