#![cfg(test)]
use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use selsort_core::{Selection, find_smallest, is_sorted, selection_sort, selection_sort_with};

const SEED: u64 = 0x5e1e_c7;
const ROUNDS: usize = 200;

/// Random sequences of varying length, value spread and duplicate density.
fn random_sequences() -> Vec<Vec<i64>> {
    let mut rng: StdRng = StdRng::seed_from_u64(SEED);

    (0..ROUNDS)
        .map(|_| {
            let len: usize = rng.random_range(0..=64);
            let spread: i64 = rng.random_range(1..=1_000);
            (0..len).map(|_| rng.random_range(-spread..=spread)).collect()
        })
        .collect()
}

fn multiset(values: &[i64]) -> BTreeMap<i64, usize> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(*value).or_default() += 1;
    }
    counts
}

#[test]
fn result_is_non_decreasing() {
    for original in random_sequences() {
        let mut working = original.clone();
        let result = selection_sort(&mut working);
        assert!(is_sorted(&result), "not sorted: {original:?} -> {result:?}");
    }
}

#[test]
fn result_is_a_permutation() {
    for original in random_sequences() {
        let mut working = original.clone();
        let result = selection_sort(&mut working);
        assert_eq!(multiset(&result), multiset(&original));
    }
}

#[test]
fn input_is_drained() {
    for original in random_sequences() {
        let mut working = original.clone();
        let result = selection_sort(&mut working);
        assert!(working.is_empty());
        assert_eq!(result.len(), original.len());
    }
}

#[test]
fn matches_standard_sort() {
    for original in random_sequences() {
        let mut expected = original.clone();
        expected.sort();

        let mut working = original.clone();
        assert_eq!(selection_sort(&mut working), expected);
    }
}

#[test]
fn resorting_is_idempotent() {
    for original in random_sequences() {
        let mut working = original.clone();
        let sorted = selection_sort(&mut working);

        let mut again = sorted.clone();
        assert_eq!(selection_sort(&mut again), sorted);
    }
}

#[test]
fn every_pass_keeps_partitions_ordered() {
    for original in random_sequences() {
        let mut working = original.clone();
        let original_len = original.len();
        let mut passes: usize = 0;

        selection_sort_with(&mut working, &mut |selection: &Selection<'_>| {
            passes += 1;
            assert_eq!(selection.sorted.len() + selection.remaining.len(), original_len);

            let smallest_left = selection.remaining.iter().min();
            if let Some(smallest) = smallest_left {
                assert!(selection.sorted.iter().all(|value| value <= smallest));
            }
        });

        assert_eq!(passes, original_len);
    }
}

#[test]
fn equal_minimums_are_taken_front_first() {
    for original in random_sequences() {
        let mut working = original.clone();

        selection_sort_with(&mut working, &mut |selection: &Selection<'_>| {
            // Removal keeps the values in front of `index` where they were.
            let preceding: &[i64] = &selection.remaining[..selection.index];
            assert!(
                preceding
                    .iter()
                    .all(|value| *value > selection.value),
                "an earlier equal minimum was skipped"
            );
        });
    }
}

#[test]
fn find_smallest_points_at_first_minimum() {
    for original in random_sequences() {
        match find_smallest(&original) {
            None => assert!(original.is_empty()),
            Some(index) => {
                let minimum = *original.iter().min().unwrap();
                assert_eq!(original[index], minimum);
                assert!(original[..index].iter().all(|value| *value > minimum));
            }
        }
    }
}
