#![cfg(test)]
use selsort_core::selection_sort;

/// Sorts a working copy and checks the result, the drained input and that no
/// buffer is shared between the two.
fn assert_sorts_to(original: &[i64], expected: &[i64]) {
    let mut working: Vec<i64> = original.to_vec();

    let result: Vec<i64> = selection_sort(&mut working);

    assert_eq!(result, expected, "unexpected order for {original:?}");
    assert!(working.is_empty(), "input was not drained: {working:?}");
    if !result.is_empty() {
        assert_ne!(
            result.as_ptr(),
            working.as_ptr(),
            "result aliases the input buffer"
        );
    }
}

#[test]
fn sorts_empty_sequence() {
    assert_sorts_to(&[], &[]);
}

#[test]
fn sorts_single_value() {
    assert_sorts_to(&[1], &[1]);
}

#[test]
fn sorts_distinct_values() {
    assert_sorts_to(&[5, 3, 6, 2, 10], &[2, 3, 5, 6, 10]);
}

#[test]
fn keeps_duplicates() {
    assert_sorts_to(&[3, 1, 2, 3, 1], &[1, 1, 2, 3, 3]);
}

#[test]
fn handles_negative_values() {
    assert_sorts_to(&[-2, -5, 0, 3], &[-5, -2, 0, 3]);
}

#[test]
fn handles_extreme_values() {
    assert_sorts_to(
        &[i64::MAX, 0, i64::MIN, -1, i64::MAX],
        &[i64::MIN, -1, 0, i64::MAX, i64::MAX],
    );
}

#[test]
fn sorts_reference_fixtures() {
    let cases: [(&[i64], &[i64]); 5] = [
        (&[5, 2, 9, 1, 5], &[1, 2, 5, 5, 9]),
        (&[4, 1, 3, 9, 7], &[1, 3, 4, 7, 9]),
        (&[3, -1, 3, 2, -1], &[-1, -1, 2, 3, 3]),
        (&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]),
        (&[42], &[42]),
    ];

    for (original, expected) in cases {
        assert_sorts_to(original, expected);
    }
}

#[test]
fn input_keeps_its_allocation() {
    let mut working: Vec<i64> = Vec::with_capacity(64);
    working.extend([9, 4, 7]);

    let result = selection_sort(&mut working);

    assert_eq!(result, [4, 7, 9]);
    assert!(working.is_empty());
    assert!(working.capacity() >= 64);
}
