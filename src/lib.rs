// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod processor;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{classify, Category, Classification};

pub use crate::config::{FilterOptions, OutputMode, StatsFormat};

pub use crate::errors::{FilterError, Result};

pub use crate::io::sinks::{FileSink, MemorySink, ResultSink};

pub use crate::processor::{FileProcessor, ResultSets, SourceOutcome};

pub use crate::stats::{
    report::render_statistics, round_half_up_div, FloatStats, IntegerStats, Statistics,
    StatsReport, StringStats,
};
