use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How existing output files are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Truncate existing files
    #[default]
    Overwrite,
    /// Add lines after existing content
    Append,
}

impl OutputMode {
    pub fn from_append_flag(append: bool) -> Self {
        if append {
            Self::Append
        } else {
            Self::Overwrite
        }
    }
}

/// Statistics report rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatsFormat {
    /// Plain text lines
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Options consumed by the processor for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Directory the category files are written to
    pub output_path: PathBuf,
    /// Prepended to every output file name
    pub prefix: String,
    pub output_mode: OutputMode,
    pub short_stats: bool,
    pub full_stats: bool,
    pub stats_format: StatsFormat,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("."),
            prefix: String::new(),
            output_mode: OutputMode::Overwrite,
            short_stats: false,
            full_stats: false,
            stats_format: StatsFormat::Text,
        }
    }
}

impl FilterOptions {
    /// Overlay values present in a configuration file.
    pub fn with_file_config(mut self, config: &FileConfig) -> Self {
        if let Some(output) = &config.output {
            if let Some(path) = &output.path {
                self.output_path = path.clone();
            }
            if let Some(prefix) = &output.prefix {
                self.prefix = prefix.clone();
            }
            if let Some(append) = output.append {
                self.output_mode = OutputMode::from_append_flag(append);
            }
        }
        if let Some(stats) = &config.stats {
            if let Some(short) = stats.short {
                self.short_stats = short;
            }
            if let Some(full) = stats.full {
                self.full_stats = full;
            }
            if let Some(format) = stats.format {
                self.stats_format = format;
            }
        }
        self
    }

    pub fn wants_statistics(&self) -> bool {
        self.short_stats || self.full_stats
    }
}

/// Root structure of `.linesift.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Output file placement
    #[serde(default)]
    pub output: Option<OutputSection>,

    /// Statistics reporting
    #[serde(default)]
    pub stats: Option<StatsSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub append: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsSection {
    #[serde(default)]
    pub short: Option<bool>,
    #[serde(default)]
    pub full: Option<bool>,
    #[serde(default)]
    pub format: Option<StatsFormat>,
}
