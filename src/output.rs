//! Pipeline output channel
//!
//! The computed result is reported to the orchestrating pipeline as
//! `key=value` lines appended to an externally supplied file (the path in
//! `GITHUB_OUTPUT` on GitHub Actions). The sink trait keeps the core logic
//! testable without a filesystem.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Append-only destination for the computed `key=value` result lines
pub trait OutputSink {
    fn append(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Appends lines to the pipeline output file
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Open the output file for appending, creating it if absent
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(FileSink { file })
    }
}

impl OutputSink for FileSink {
    fn append(&mut self, key: &str, value: &str) -> Result<()> {
        writeln!(self.file, "{}={}", key, value)?;
        Ok(())
    }
}

/// Prints the result lines instead of persisting them, for dry-run mode
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn append(&mut self, key: &str, value: &str) -> Result<()> {
        println!("{}={}", key, value);
        Ok(())
    }
}

/// In-memory sink for testing without a filesystem
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<(String, String)>,
}

impl MemorySink {
    /// Create a new empty memory sink
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// The appended (key, value) pairs, in order
    pub fn lines(&self) -> &[(String, String)] {
        &self.lines
    }
}

impl OutputSink for MemorySink {
    fn append(&mut self, key: &str, value: &str) -> Result<()> {
        self.lines.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
