//! Property-based tests for `indexes` and `byte_indexes`.
//!
//! - every reported position holds the value
//! - every other position inside the bounds does not
//! - positions are strictly ascending
//! - byte search agrees with the generic search

use iterkit::sequences::{Sequence, Slice};
use proptest::prelude::*;

fn bounds() -> impl Strategy<Value = (Option<isize>, Option<isize>)> {
    (
        prop::option::of(-40_isize..40),
        prop::option::of(-40_isize..40),
    )
}

proptest! {
    #[test]
    fn prop_positions_hold_value_and_nothing_else(
        values in prop::collection::vec(0_u8..4, 0..32),
        value in 0_u8..4,
        (start, end) in bounds(),
    ) {
        let positions: Vec<usize> = iterkit::indexes(&values, value, start, end).collect();
        let window: Vec<usize> = Slice::new(start, end).indices(values.len()).unwrap().iter().collect();

        for position in &window {
            prop_assert_eq!(positions.contains(position), values[*position] == value);
        }
        prop_assert!(positions.iter().all(|position| window.contains(position)));
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn prop_unbounded_search_matches_enumerate(values in prop::collection::vec(0_u8..4, 0..32), value in 0_u8..4) {
        let expected: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|(_, element)| **element == value)
            .map(|(position, _)| position)
            .collect();
        prop_assert_eq!(iterkit::indexes(&values, value, None, None).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_byte_search_matches_generic(
        haystack in prop::collection::vec(0_u8..4, 0..48),
        needle in 0_u8..4,
        (start, end) in bounds(),
    ) {
        let generic: Vec<usize> = iterkit::indexes(haystack.as_slice(), needle, start, end).collect();
        let bytes: Vec<usize> = iterkit::byte_indexes(&haystack, needle, start, end).unwrap().collect();
        prop_assert_eq!(bytes, generic);
    }

    #[test]
    fn prop_subsequence_matches_windows(
        haystack in prop::collection::vec(0_u8..3, 0..48),
        needle in prop::collection::vec(0_u8..3, 1..4),
    ) {
        let expected: Vec<usize> = haystack
            .windows(needle.len())
            .enumerate()
            .filter(|(_, window)| *window == needle.as_slice())
            .map(|(position, _)| position)
            .collect();
        let found: Vec<usize> = iterkit::byte_indexes(&haystack, needle.as_slice(), None, None)
            .unwrap()
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn prop_range_sequence_matches_vec(low in -20_i32..20, length in 0_i32..30, value in -25_i32..55) {
        let range = low..low + length;
        let materialized: Vec<i32> = range.clone().collect();
        prop_assert_eq!(Sequence::len(&range), materialized.len());
        prop_assert_eq!(
            iterkit::indexes(&range, value, None, None).collect::<Vec<_>>(),
            iterkit::indexes(&materialized, value, None, None).collect::<Vec<_>>()
        );
    }
}
