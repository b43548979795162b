//! Line routing and result collection.
//!
//! [`FileProcessor`] owns the state of one run: three insertion-ordered
//! result sets and one [`Statistics`] instance. Every classified line is
//! appended to its category's set and fed to the matching accumulator, so
//! the per-category count always equals the length of its set. Sources are
//! concatenated; nothing is reset between files.
//!
//! # Example
//!
//! ```rust,no_run
//! use linesift::config::FilterOptions;
//! use linesift::processor::FileProcessor;
//! use std::path::PathBuf;
//!
//! let mut processor = FileProcessor::new(FilterOptions::default());
//! processor.process_files(&[PathBuf::from("in1.txt"), PathBuf::from("in2.txt")])?;
//! let written = processor.write_results()?;
//! println!("wrote {} files", written.len());
//! # Ok::<(), linesift::errors::FilterError>(())
//! ```

use crate::config::FilterOptions;
use crate::core::{classify, Category};
use crate::errors::{FilterError, Result};
use crate::io::{self, FileSink, ResultSink};
use crate::stats::report::render_statistics;
use crate::stats::Statistics;
use std::path::{Path, PathBuf};

/// What happened to one input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOutcome {
    /// Source was read; `lines` lines were classified
    Processed { lines: usize },
    /// Source did not exist and was skipped
    Missing,
}

/// Append-only lines of each category, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSets {
    pub integers: Vec<String>,
    pub floats: Vec<String>,
    pub strings: Vec<String>,
}

impl ResultSets {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Integer => &self.integers,
            Category::Float => &self.floats,
            Category::String => &self.strings,
        }
    }

    fn push(&mut self, category: Category, line: String) {
        match category {
            Category::Integer => self.integers.push(line),
            Category::Float => self.floats.push(line),
            Category::String => self.strings.push(line),
        }
    }
}

/// Classifies input files and collects the results of one run.
#[derive(Debug, Clone)]
pub struct FileProcessor {
    options: FilterOptions,
    results: ResultSets,
    statistics: Statistics,
}

impl FileProcessor {
    pub fn new(options: FilterOptions) -> Self {
        Self {
            options,
            results: ResultSets::default(),
            statistics: Statistics::new(),
        }
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn results(&self, category: Category) -> &[String] {
        self.results.get(category)
    }

    pub fn result_sets(&self) -> &ResultSets {
        &self.results
    }

    /// Classify one line and record it.
    ///
    /// A line that cannot be classified leaves all state untouched.
    pub fn process_line(&mut self, line: &str) -> Result<Category> {
        let classification = classify(line)?;
        let category = classification.category();
        self.statistics.record(&classification, line);
        self.results.push(category, line.to_string());
        Ok(category)
    }

    /// Classify every line of `path` in file order.
    ///
    /// A missing file is reported and skipped without touching any state.
    pub fn process_file(&mut self, path: &Path) -> Result<SourceOutcome> {
        if !path.exists() {
            log::warn!(
                "{}",
                FilterError::SourceNotFound {
                    path: path.to_path_buf()
                }
            );
            return Ok(SourceOutcome::Missing);
        }

        let contents = io::read_source(path)?;
        let mut count = 0;
        for line in io::split_lines(&contents) {
            self.process_line(line)?;
            count += 1;
        }

        log::debug!("Classified {} lines from {}", count, path.display());
        Ok(SourceOutcome::Processed { lines: count })
    }

    /// Process `paths` in order into the same result sets and statistics.
    pub fn process_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<Vec<SourceOutcome>> {
        if paths.is_empty() {
            return Err(FilterError::NoSources);
        }
        paths
            .iter()
            .map(|path| self.process_file(path.as_ref()))
            .collect()
    }

    /// Write every non-empty result set to its file under the configured
    /// output directory. Returns the paths written, in category order.
    pub fn write_results(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        let options = &self.options;
        self.write_results_with(|category| {
            let sink = FileSink::for_category(
                &options.output_path,
                &options.prefix,
                category,
                options.output_mode,
            );
            written.push(sink.path().to_path_buf());
            sink
        })?;
        Ok(written)
    }

    /// Write every non-empty result set to the sink `open` returns for its
    /// category. Empty sets never open a sink. Stops at the first failure.
    pub fn write_results_with<S, F>(&self, mut open: F) -> Result<()>
    where
        S: ResultSink,
        F: FnMut(Category) -> S,
    {
        for category in Category::ALL {
            let lines = self.results.get(category);
            if lines.is_empty() {
                continue;
            }
            let mut sink = open(category);
            sink.write_lines(lines)?;
            log::info!("Wrote {} lines to {}", lines.len(), sink.description());
        }
        Ok(())
    }

    /// Render the requested statistics in the configured format.
    pub fn render_statistics(&self) -> Result<Option<String>> {
        render_statistics(
            &self.statistics,
            self.options.short_stats,
            self.options.full_stats,
            self.options.stats_format,
        )
    }
}
