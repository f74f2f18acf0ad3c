use super::Storage;
use crate::error::Result;

/// In-memory storage for testing. Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStorage {
    text: String,
    writes: usize,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            writes: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of times `write` was called.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for InMemoryStorage {
    fn read(&self) -> Result<Vec<String>> {
        Ok(self.text.lines().map(str::to_string).collect())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.text = text.to_string();
        self.writes += 1;
        Ok(())
    }
}
