//! Session transcript.
//!
//! An append-only copy of everything read from and written to the user,
//! byte for byte, so it can be saved with the `log` action.

use std::path::Path;

use anyhow::{Context, Result};

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    bytes: Vec<u8>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw input line exactly as read, terminator included.
    pub fn record_input(&mut self, raw: &str) {
        self.bytes.extend_from_slice(raw.as_bytes());
    }

    /// Record output exactly as it was written.
    pub fn record_output(&mut self, text: &str) {
        self.bytes.extend_from_slice(text.as_bytes());
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Write the transcript so far to `path`, replacing the file.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.bytes)
            .with_context(|| format!("failed to write log to {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "log saved");
        Ok(())
    }
}
