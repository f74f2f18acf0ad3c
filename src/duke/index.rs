//! User-facing task positions.
//!
//! Tasks are addressed by their 1-based place in the current list. Positions
//! are not identifiers: deleting task 2 turns task 3 into task 2. Parsing a
//! position only checks that it is an integer; whether it points at a task is
//! decided by [`Position::to_offset`] against the list length at that moment.

use crate::error::{DukeError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(i64);

impl Position {
    pub fn new(position: i64) -> Self {
        Self(position)
    }

    /// Converts to a 0-based offset into a list of `len` tasks.
    pub fn to_offset(self, len: usize) -> Result<usize> {
        usize::try_from(self.0)
            .ok()
            .filter(|p| (1..=len).contains(p))
            .map(|p| p - 1)
            .ok_or(DukeError::IndexOutOfRange {
                position: self.0,
                len,
            })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Position {
    type Err = DukeError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(Position)
            .map_err(|_| DukeError::NotAnInteger(s.to_string()))
    }
}
