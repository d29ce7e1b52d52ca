//! Shared building blocks of the `selsort` workspace: runtime configuration,
//! input parsing and generation, error types and the logging macros every
//! crate reports through.

pub mod config;
pub mod error;
pub mod input;
pub mod log;

#[doc(hidden)]
pub use tracing as __tracing;
