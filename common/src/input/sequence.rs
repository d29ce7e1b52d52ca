//! # Integer Sequence Model
//!
//! Parses integer lists written by humans.
//!
//! Values may be separated by commas, whitespace or both, so all of these are
//! the same sequence:
//! * `5,3,6`
//! * `5 3 6`
//! * `5, 3,\n6`

use std::io::Read;
use std::str::FromStr;

use anyhow::Context;

use crate::error::InputError;

/// An ordered list of integers read from text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<i64>,
}

impl Sequence {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// Joins several sequences, keeping argument order.
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Sequence>,
    {
        let values: Vec<i64> = parts.into_iter().flat_map(|part| part.values).collect();
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<i64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromStr for Sequence {
    type Err = InputError;

    /// Parses a string into a `Sequence`.
    ///
    /// Empty tokens (doubled commas, trailing separators) are skipped, so a
    /// blank string is an empty sequence.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values: Vec<i64> = s
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .map(parse_integer)
            .collect::<Result<Vec<i64>, InputError>>()?;

        Ok(Self { values })
    }
}

/// Reads the whole of `reader` and parses it as one sequence.
pub fn read_sequence<R: Read>(mut reader: R) -> anyhow::Result<Sequence> {
    let mut text: String = String::new();
    reader
        .read_to_string(&mut text)
        .context("failed to read integers from input")?;

    Ok(text.parse::<Sequence>()?)
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

fn parse_integer(token: &str) -> Result<i64, InputError> {
    token
        .parse::<i64>()
        .map_err(|source| InputError::InvalidInteger {
            token: token.to_string(),
            source,
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
