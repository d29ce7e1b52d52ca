use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while reading or generating an integer sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid integer '{token}': {source}")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: i64, max: i64 },
}
