//! # Storage Layer
//!
//! The task list is persisted as a single text blob, one task per line (see
//! [`crate::model`] for the line format). The [`Storage`] trait is the only
//! thing the core needs from persistence: read every line at session start,
//! write the whole block back on `bye`.
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: production storage, a plain text file
//! - [`memory::InMemoryStorage`]: keeps the text in memory, for tests
//!
//! Writes replace the previous contents entirely. There is no incremental or
//! transactional update.

use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait Storage {
    /// All stored lines, in order. A store that was never written reads as empty.
    fn read(&self) -> Result<Vec<String>>;

    /// Replaces the stored contents with `text`.
    fn write(&mut self, text: &str) -> Result<()>;
}
