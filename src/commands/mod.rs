//! CLI command implementations for linesift.
//!
//! - **filter**: classify input files, write the category files and print
//!   the requested statistics

pub mod filter;

pub use filter::{handle_filter, FilterConfig, FilterOutcome};
