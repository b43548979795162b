pub mod sinks;

// Re-export sinks for convenient access
pub use sinks::{sink_path, FileSink, MemorySink, ResultSink, LINE_ENDING};

use crate::errors::{FilterError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Read a whole input file as UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| FilterError::source_read(path, e))
}

/// Split file contents into lines.
///
/// Lines end at `\r\n`, `\n` or a lone `\r`. A trailing terminator does not
/// produce an extra empty line.
pub fn split_lines(contents: &str) -> impl Iterator<Item = &str> {
    let body = ["\r\n", "\n", "\r"]
        .iter()
        .find_map(|terminator| contents.strip_suffix(terminator))
        .unwrap_or(contents);
    let pieces = if contents.is_empty() { 0 } else { usize::MAX };
    LINE_BREAK.split(body).take(pieces)
}
