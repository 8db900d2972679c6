//! Tests for `all_unique` and `all_unique_by`.

use iterkit::Toolkit;
use rstest::rstest;
use std::cell::Cell;

#[rstest]
#[case(vec![], true)]
#[case(vec![1], true)]
#[case(vec![1, 2, 3], true)]
#[case(vec![1, 2, 1], false)]
#[case(vec![5, 5], false)]
fn test_all_unique(#[case] values: Vec<i32>, #[case] expected: bool) {
    assert_eq!(iterkit::all_unique(values), expected);
}

#[rstest]
fn test_all_unique_over_range() {
    assert!(iterkit::all_unique(0..100));
}

#[rstest]
fn test_all_unique_by_projection() {
    assert!(!iterkit::all_unique_by(0..100, |i| i % 10));
    assert!(iterkit::all_unique_by(0..10, |i| i % 10));
}

#[rstest]
fn test_all_unique_by_case_insensitive() {
    assert!(!iterkit::all_unique_by("aA".chars(), |c| c.to_ascii_lowercase()));
    assert!(iterkit::all_unique("aA".chars()));
}

#[rstest]
fn test_all_unique_on_strings() {
    let words = ["alpha", "beta", "gamma"].map(String::from);
    assert!(iterkit::all_unique(words.iter()));
    assert!(!iterkit::all_unique_by(words.iter(), |word| word.len()));
}

#[rstest]
fn test_all_unique_stops_at_first_repeat() {
    let pulled = Cell::new(0);
    let iterator = (0..).map(|i| i % 4).inspect(|_| pulled.set(pulled.get() + 1));

    assert!(!iterkit::all_unique(iterator));
    assert_eq!(pulled.get(), 5);
}

#[rstest]
fn test_key_function_called_once_per_element() {
    let calls = Cell::new(0);
    let result = iterkit::all_unique_by([1, 2, 3, 4], |value| {
        calls.set(calls.get() + 1);
        *value
    });

    assert!(result);
    assert_eq!(calls.get(), 4);
}

#[rstest]
fn test_implementations_agree() {
    let inputs: Vec<Vec<u16>> = vec![vec![], vec![1, 2, 3], vec![7, 8, 7], (0..1000).collect()];
    for input in inputs {
        let expected = Toolkit::portable().all_unique(input.iter());
        assert_eq!(Toolkit::global().all_unique(input.iter()), expected);
        #[cfg(feature = "accelerated")]
        assert_eq!(Toolkit::accelerated().all_unique(input.iter()), expected);
    }
}
