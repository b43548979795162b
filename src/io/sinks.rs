//! Output sinks for classified lines.
//!
//! A [`ResultSink`] receives one category's lines and writes them, one per
//! line terminator, in the order given. [`FileSink`] is what a normal run
//! uses; [`MemorySink`] captures lines for tests.
//!
//! # Example
//!
//! ```rust
//! use linesift::config::OutputMode;
//! use linesift::io::sinks::{MemorySink, ResultSink};
//!
//! let mut sink = MemorySink::new(OutputMode::Append);
//! sink.write_lines(&["45".to_string(), "100500".to_string()]).unwrap();
//! assert_eq!(sink.lines(), vec!["45", "100500"]);
//! ```

use crate::config::OutputMode;
use crate::core::Category;
use crate::errors::{FilterError, Result};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Line terminator written after every line.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator written after every line.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Destination for the lines of one category.
pub trait ResultSink {
    /// Write all `lines` in order, each followed by [`LINE_ENDING`].
    fn write_lines(&mut self, lines: &[String]) -> Result<()>;

    /// Get a description of the sink for log and error messages.
    fn description(&self) -> String;
}

/// Output file path for `category`: `{output_path}/{prefix}{base_name}`.
pub fn sink_path(output_path: &Path, prefix: &str, category: Category) -> PathBuf {
    output_path.join(format!("{}{}", prefix, category.base_name()))
}

/// File system sink.
///
/// The file and any missing parent directories are created on the first
/// write. Existing content is truncated or kept according to the mode.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    mode: OutputMode,
}

impl FileSink {
    pub fn new(path: PathBuf, mode: OutputMode) -> Self {
        Self { path, mode }
    }

    pub fn for_category(output_path: &Path, prefix: &str, category: Category, mode: OutputMode) -> Self {
        Self::new(sink_path(output_path, prefix, category), mode)
    }

    /// Get the path this sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
                log::debug!("Creating output directory {}", dir.display());
                std::fs::create_dir_all(dir).map_err(|e| FilterError::sink_write(dir, e))
            }
            _ => Ok(()),
        }
    }
}

impl ResultSink for FileSink {
    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        self.ensure_parent()?;

        let append = self.mode == OutputMode::Append;
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(&self.path)
            .map_err(|e| FilterError::sink_write(&self.path, e))?;

        let mut writer = BufWriter::new(file);
        for line in lines {
            writer
                .write_all(line.as_bytes())
                .and_then(|_| writer.write_all(LINE_ENDING.as_bytes()))
                .map_err(|e| FilterError::sink_write(&self.path, e))?;
        }
        writer
            .flush()
            .map_err(|e| FilterError::sink_write(&self.path, e))
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory sink for testing.
///
/// Clones share one buffer, so a test can keep a handle while the processor
/// writes through another.
#[derive(Debug, Clone)]
pub struct MemorySink {
    buffer: Arc<RwLock<Vec<String>>>,
    mode: OutputMode,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new(OutputMode::Overwrite)
    }
}

impl MemorySink {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            buffer: Arc::new(RwLock::new(Vec::new())),
            mode,
        }
    }

    /// Get the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.buffer.read().expect("RwLock poisoned").clone()
    }

    /// Whole buffer as it would appear in a file.
    pub fn contents(&self) -> String {
        self.lines()
            .iter()
            .map(|line| format!("{}{}", line, LINE_ENDING))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.read().expect("RwLock poisoned").is_empty()
    }
}

impl ResultSink for MemorySink {
    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        let mut buffer = self.buffer.write().expect("RwLock poisoned");
        if self.mode == OutputMode::Overwrite {
            buffer.clear();
        }
        buffer.extend(lines.iter().cloned());
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}
