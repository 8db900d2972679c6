//! Operations over arbitrary iterables.
//!
//! This module provides:
//!
//! - [`length`]: the number of elements, without traversal when the size is known
//! - [`all_equal`]: whether every element equals the first
//! - [`all_unique_with`]: whether no two keys are equal
//! - [`unique_with`] / [`Unique`]: lazy, order-preserving de-duplication
//!
//! The `*_with` functions take the [`KeyState`](crate::backend::KeyState)
//! used to hash observed keys; [`Toolkit`](crate::Toolkit) supplies the one
//! belonging to the active implementation.
//!
//! # Examples
//!
//! ```rust
//! use iterkit::iterables::{all_equal, length};
//!
//! assert_eq!(length((0..10).filter(|i| i % 2 == 0)), 5);
//! assert!(all_equal("aaa".chars()));
//! assert!(!all_equal("aaab".chars()));
//! ```

mod unique;

pub use unique::{Identity, Unique, all_unique_with, identity, unique_with};

/// Returns the number of elements in `iterable`.
///
/// When the iterator reports an exact size (its [`Iterator::size_hint`]
/// bounds agree), that size is returned without traversal. Otherwise the
/// iterator is consumed, counting elements.
///
/// # Examples
///
/// ```rust
/// use iterkit::iterables::length;
///
/// // Known size: no traversal.
/// assert_eq!(length(0..1_000_000_000_u64), 1_000_000_000);
/// assert_eq!(length(&vec![1, 2, 3]), 3);
///
/// // Unknown size: counted.
/// assert_eq!(length((0..100).filter(|i| i % 2 == 0)), 50);
/// ```
pub fn length<I>(iterable: I) -> usize
where
    I: IntoIterator,
{
    let iterator = iterable.into_iter();
    match iterator.size_hint() {
        (lower, Some(upper)) if lower == upper => lower,
        _ => iterator.count(),
    }
}

/// Returns whether all elements of `iterable` are equal to the first one.
///
/// An empty iterable yields `true`. Scanning stops at the first element
/// that differs.
///
/// # Examples
///
/// ```rust
/// use iterkit::iterables::all_equal;
///
/// assert!(all_equal(Vec::<i32>::new()));
/// assert!(all_equal([7]));
/// assert!(!all_equal([1, 1, 2]));
/// ```
pub fn all_equal<I>(iterable: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut iterator = iterable.into_iter();
    iterator
        .next()
        .is_none_or(|first| iterator.all(|element| element == first))
}
