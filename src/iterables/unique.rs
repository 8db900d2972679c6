//! Hash-based uniqueness.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::backend::KeyState;

/// Key function that clones the element itself.
pub type Identity<T> = fn(&T) -> T;

/// Returns a clone of `element`; the default key function.
pub fn identity<T: Clone>(element: &T) -> T {
    element.clone()
}

/// Returns whether no two elements of `iterable` have equal keys.
///
/// Observed keys are stored in a set hashed with `state`. Scanning stops at
/// the first duplicate.
///
/// # Examples
///
/// ```rust
/// use iterkit::backend::KeyState;
/// use iterkit::iterables::all_unique_with;
///
/// assert!(all_unique_with(0..100, |i| *i, KeyState::sip()));
/// assert!(!all_unique_with(0..100, |i| i % 10, KeyState::sip()));
/// ```
pub fn all_unique_with<I, K, F>(iterable: I, mut key: F, state: KeyState) -> bool
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    let mut observed = HashSet::with_hasher(state);
    iterable
        .into_iter()
        .all(|element| observed.insert(key(&element)))
}

/// Returns a lazy iterator over the first occurrence of each key in
/// `iterable`, in order.
///
/// # Examples
///
/// ```rust
/// use iterkit::backend::KeyState;
/// use iterkit::iterables::unique_with;
///
/// let letters: String = unique_with("aAbBcCD".chars(), |c| c.to_ascii_lowercase(), KeyState::sip())
///     .collect();
/// assert_eq!(letters, "abcD");
/// ```
pub fn unique_with<I, K, F>(iterable: I, key: F, state: KeyState) -> Unique<I::IntoIter, F, K>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    Unique {
        iterator: iterable.into_iter(),
        key,
        observed: HashSet::with_hasher(state),
    }
}

/// Iterator returned by [`unique_with`] and
/// [`Toolkit::unique`](crate::Toolkit::unique).
///
/// Each input element is pulled only when the consumer asks for the next
/// output, so infinite inputs are fine as long as enough distinct keys
/// follow. The iterator is single-pass and cannot be restarted; the set of
/// observed keys grows with the number of distinct keys seen.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Unique<I, F, K> {
    iterator: I,
    key: F,
    observed: HashSet<K, KeyState>,
}

impl<I, F, K> Unique<I, F, K> {
    /// Number of distinct keys observed so far.
    pub fn observed_len(&self) -> usize {
        self.observed.len()
    }
}

impl<I, F, K> Iterator for Unique<I, F, K>
where
    I: Iterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            iterator,
            key,
            observed,
        } = self;
        iterator.find(|element| observed.insert(key(element)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iterator.size_hint();
        (usize::from(lower > 0 && self.observed.is_empty()), upper)
    }
}

impl<I, F, K> FusedIterator for Unique<I, F, K>
where
    I: FusedIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
}

impl<I: fmt::Debug, F, K> fmt::Debug for Unique<I, F, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Unique")
            .field("iterator", &self.iterator)
            .field("observed", &self.observed.len())
            .field("hasher", self.observed.hasher())
            .finish_non_exhaustive()
    }
}
