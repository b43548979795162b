use crate::config::{FilterOptions, OutputMode, StatsFormat};
use crate::errors::{FilterError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linesift")]
#[command(
    about = "Sort the lines of text files into integers, floats and strings",
    long_about = "Reads every input file line by line and writes integers, floats and \
                  strings to separate files ({prefix}integers.txt, {prefix}floats.txt, \
                  {prefix}strings.txt). Numeric statistics use exact arithmetic."
)]
#[command(version)]
pub struct Cli {
    /// Input files, processed in the order given
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Directory for the output files (defaults to the current directory)
    #[arg(short, long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Prefix for output file names
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Append to existing output files instead of overwriting them
    #[arg(short, long)]
    pub append: bool,

    /// Print short statistics (counts only)
    #[arg(short, long = "short-stats")]
    pub short_stats: bool,

    /// Print full statistics (min, max, sum, average, string lengths)
    #[arg(short, long = "full-stats")]
    pub full_stats: bool,

    /// Statistics output format
    #[arg(long = "stats-format", value_enum)]
    pub stats_format: Option<StatsFormat>,

    /// Configuration file (defaults to the nearest .linesift.toml)
    #[arg(long, env = "LINESIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show written files
    /// -vv: Show per-file progress
    /// -vvv: Show everything
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Apply command-line flags on top of `base`.
    ///
    /// Flags only ever switch behavior on, so an absent flag keeps whatever
    /// the configuration file chose.
    pub fn apply_to(&self, mut base: FilterOptions) -> FilterOptions {
        if let Some(output) = &self.output {
            base.output_path = output.clone();
        }
        if let Some(prefix) = &self.prefix {
            base.prefix = prefix.clone();
        }
        if self.append {
            base.output_mode = OutputMode::Append;
        }
        base.short_stats |= self.short_stats;
        base.full_stats |= self.full_stats;
        if let Some(format) = self.stats_format {
            base.stats_format = format;
        }
        base
    }

    /// Check option values clap cannot validate on its own.
    pub fn validate(&self) -> Result<()> {
        if let Some(prefix) = &self.prefix {
            if prefix.contains(['/', '\\']) {
                return Err(FilterError::MalformedArgument(format!(
                    "prefix '{}' must not contain a path separator, use --output for directories",
                    prefix
                )));
            }
        }
        Ok(())
    }

    /// Log level filter implied by `-v` occurrences.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_flags_parse() {
        let cli = Cli::try_parse_from([
            "linesift", "-s", "-f", "-a", "-o", "out", "-p", "tests-", "in1.txt", "in2.txt",
        ])
        .unwrap();

        assert_eq!(cli.files, vec![PathBuf::from("in1.txt"), PathBuf::from("in2.txt")]);
        let options = cli.apply_to(FilterOptions::default());
        assert_eq!(options.output_path, PathBuf::from("out"));
        assert_eq!(options.prefix, "tests-");
        assert_eq!(options.output_mode, OutputMode::Append);
        assert!(options.short_stats && options.full_stats);
    }

    #[test]
    fn test_absent_flags_keep_base() {
        let cli = Cli::try_parse_from(["linesift", "in.txt"]).unwrap();
        let base = FilterOptions {
            prefix: "cfg-".into(),
            output_mode: OutputMode::Append,
            ..Default::default()
        };
        assert_eq!(cli.apply_to(base.clone()), base);
    }

    #[test]
    fn test_files_are_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["linesift", "-s"]).unwrap();
        assert!(cli.files.is_empty());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["linesift", "--bogus", "in.txt"]).is_err());
        assert!(Cli::try_parse_from(["linesift", "--stats-format", "xml", "in.txt"]).is_err());
    }

    #[test]
    fn test_prefix_with_separator_is_malformed() {
        let cli = Cli::try_parse_from(["linesift", "-p", "out/run-", "in.txt"]).unwrap();
        let err = cli.validate().unwrap_err();
        assert!(matches!(err, FilterError::MalformedArgument(_)));
        assert!(err.is_usage_error());

        let cli = Cli::try_parse_from(["linesift", "-p", "run-", "in.txt"]).unwrap();
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_verbosity_maps_to_level() {
        let cli = Cli::try_parse_from(["linesift", "-vv", "in.txt"]).unwrap();
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }
}
