use crate::config::FilterOptions;
use crate::errors::Result;
use crate::processor::{FileProcessor, SourceOutcome};
use std::io::Write;
use std::path::PathBuf;

/// Inputs and options for one run of the filter command.
pub struct FilterConfig {
    pub files: Vec<PathBuf>,
    pub options: FilterOptions,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub sources: Vec<SourceOutcome>,
    pub written: Vec<PathBuf>,
}

impl FilterOutcome {
    pub fn missing_sources(&self) -> usize {
        self.sources
            .iter()
            .filter(|outcome| **outcome == SourceOutcome::Missing)
            .count()
    }
}

/// Process all inputs, write the category files and print the requested
/// statistics to `out`.
pub fn handle_filter<W: Write>(config: FilterConfig, out: &mut W) -> Result<FilterOutcome> {
    let mut processor = FileProcessor::new(config.options);

    let sources = processor.process_files(&config.files)?;
    let written = processor.write_results()?;

    if let Some(report) = processor.render_statistics()? {
        if let Err(e) = out.write_all(report.as_bytes()) {
            log::warn!("Failed to print statistics: {}", e);
        }
    }

    let outcome = FilterOutcome { sources, written };
    if outcome.missing_sources() > 0 {
        log::info!(
            "Skipped {} of {} input files",
            outcome.missing_sources(),
            outcome.sources.len()
        );
    }
    Ok(outcome)
}
