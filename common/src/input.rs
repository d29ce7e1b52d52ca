//! # Sorter Input
//!
//! Everything that produces the integers handed to the sorter:
//! * [`sequence`]: integers written as text (arguments, standard input).
//! * [`random`]: uniformly drawn integers, optionally seeded.

pub mod random;
pub mod sequence;

pub use random::RandomSpec;
pub use sequence::{Sequence, read_sequence};
