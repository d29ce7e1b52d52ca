//! # Selsort Core
//!
//! The sorting engine of `selsort`: a textbook **selection sort** over `i64`
//! sequences.
//!
//! The sorter repeatedly picks the smallest remaining element of the input and
//! appends it to a freshly allocated output. The input buffer is borrowed
//! mutably and drained while sorting, so the caller decides what happens with
//! the (now empty) allocation.
//!
//! * **[`selection`]**: [`find_smallest`], [`selection_sort`] and the observed
//!   variant [`selection_sort_with`].
//! * **[`order`]**: ordering checks used to verify results.

pub mod order;
pub mod selection;

pub use order::is_sorted;
pub use selection::{Observer, Selection, find_smallest, selection_sort, selection_sort_with};
