//! Error types for linesift operations.
//!
//! A run can fail in a handful of well-defined ways:
//!
//! - `SourceNotFound`: an input file is missing. The processor absorbs this
//!   one, logs it and moves on to the next source.
//! - `NoSources`: the input list is empty. Fatal, the driver prints usage.
//! - `SourceRead`: an input exists but cannot be read or is not UTF-8.
//! - `SinkWrite`: creating the output directory or writing an output file
//!   failed. Fatal, remaining writes are skipped and nothing is rolled back.
//! - `InvalidNumber`: a numeric-looking line whose exponent is out of range.
//!   Fatal, the line is never demoted to a string.
//! - `Config` / `MalformedArgument`: bad configuration at the boundary.
//!
//! # Example
//!
//! ```rust
//! use linesift::errors::FilterError;
//!
//! let err = FilterError::NoSources;
//! assert_eq!(err.exit_code(), 2);
//! assert!(err.is_usage_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for linesift operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Requested input file does not exist
    #[error("Input file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// No input files were given
    #[error("No input files given, specify at least one file")]
    NoSources,

    /// Input file exists but could not be read or decoded
    #[error("Failed to read {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory or file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Line matched a numeric pattern but cannot be represented
    #[error("Cannot represent number '{line}': {reason}")]
    InvalidNumber { line: String, reason: String },

    /// Configuration file could not be parsed
    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Invalid option value at the command line boundary
    #[error("Invalid argument: {0}")]
    MalformedArgument(String),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl FilterError {
    /// Create a source read error for `path`
    pub fn source_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceRead {
            path: path.into(),
            source,
        }
    }

    /// Create a sink write error for `path`
    pub fn sink_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SinkWrite {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid number error for `line`
    pub fn invalid_number(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNumber {
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error for the file at `path`
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Errors the user fixes by changing the invocation.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::NoSources | Self::MalformedArgument(_))
    }

    /// Process exit code for this error.
    ///
    /// Usage-class errors share clap's exit code 2, everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        if self.is_usage_error() {
            2
        } else {
            1
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, FilterError>;
