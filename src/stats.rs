use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Summary of one CLI run, written as JSON with `--stats-out`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunStats {
    /// `modernize` or `tokenize`
    pub command: String,
    pub input: String,
    pub output: String,
    pub verses_read: u64,
    /// Modernized rows or token rows written
    pub rows_written: u64,
    pub duration_ms: u64,
    pub verses_per_sec: f64,
}

impl RunStats {
    pub fn new(command: &str, input: &Path, output: &Path, verses_read: u64, rows_written: u64, duration_ms: u64) -> Self {
        let verses_per_sec = if duration_ms > 0 {
            verses_read as f64 / (duration_ms as f64 / 1000.0)
        } else {
            0.0
        };
        Self {
            command: command.to_string(),
            input: input.display().to_string(),
            output: output.display().to_string(),
            verses_read,
            rows_written,
            duration_ms,
            verses_per_sec,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::serialize("run statistics", e))
    }

    pub async fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        tokio::fs::write(path, json).await.map_err(|e| Error::io(path, e))
    }
}
