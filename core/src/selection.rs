//! # Selection Sort
//!
//! Builds a sorted copy of a sequence by moving the minimum of the unsorted
//! remainder into the output, one pass at a time.
//!
//! The input is consumed destructively: after [`selection_sort`] returns, the
//! caller's buffer is empty and every value lives in the returned vector.
//!
//! ```
//! let mut values = vec![5, 3, 6, 2, 10];
//! let sorted = selsort_core::selection_sort(&mut values);
//!
//! assert_eq!(sorted, [2, 3, 5, 6, 10]);
//! assert!(values.is_empty());
//! ```

use tracing::{debug, trace};

/// A view on the sorter right after one pass.
///
/// `sorted` already contains `value` as its last element, `remaining` is what
/// is left of the caller's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Zero-based pass number, equal to `sorted.len() - 1`.
    pub pass: usize,
    /// Position the value was taken from, relative to the remainder before the pass.
    pub index: usize,
    pub value: i64,
    pub sorted: &'a [i64],
    pub remaining: &'a [i64],
}

/// Receives every [`Selection`] made by [`selection_sort_with`].
pub trait Observer {
    fn on_select(&mut self, selection: &Selection<'_>);
}

impl<F> Observer for F
where
    F: FnMut(&Selection<'_>),
{
    fn on_select(&mut self, selection: &Selection<'_>) {
        self(selection)
    }
}

/// Returns the position of the first occurrence of the smallest value.
///
/// Ties go to the earliest element. An empty slice has no minimum and yields `None`.
pub fn find_smallest(sequence: &[i64]) -> Option<usize> {
    let (first, rest) = sequence.split_first()?;

    let mut smallest: i64 = *first;
    let mut smallest_index: usize = 0;

    for (offset, value) in rest.iter().enumerate() {
        if *value < smallest {
            smallest = *value;
            smallest_index = offset + 1;
        }
    }

    Some(smallest_index)
}

/// Sorts `sequence` into a new vector in non-decreasing order.
///
/// The buffer is drained: each pass removes the current minimum from it.
pub fn selection_sort(sequence: &mut Vec<i64>) -> Vec<i64> {
    selection_sort_with(sequence, &mut |_: &Selection<'_>| {})
}

/// Same as [`selection_sort`], reporting each pass to `observer`.
pub fn selection_sort_with<O>(sequence: &mut Vec<i64>, observer: &mut O) -> Vec<i64>
where
    O: Observer + ?Sized,
{
    let original_len: usize = sequence.len();
    let mut sorted: Vec<i64> = Vec::with_capacity(original_len);

    debug!("Selection sort over {original_len} values");

    for pass in 0..original_len {
        // The buffer shrinks by one per pass, so it still holds `original_len - pass` values.
        let Some(index) = find_smallest(sequence) else {
            break;
        };

        let value: i64 = sequence.remove(index);
        sorted.push(value);

        trace!(pass, index, value, remaining = sequence.len(), "selected minimum");

        observer.on_select(&Selection {
            pass,
            index,
            value,
            sorted: sorted.as_slice(),
            remaining: sequence.as_slice(),
        });
    }

    sorted
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
