use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use linesift::cli::Cli;
use linesift::commands::filter::{handle_filter, FilterConfig};
use linesift::config::{load_config, FilterOptions};
use linesift::errors::FilterError;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match run(&cli) {
        Ok(()) => Ok(()),
        Err(err) if err.is_usage_error() => exit_with_usage(&err),
        Err(err) => Err(err).context("Failed to process input files"),
    }
}

// Side effect function for logger setup (I/O at edges)
fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: &Cli) -> linesift::errors::Result<()> {
    let config = FilterConfig {
        files: cli.files.clone(),
        options: build_options(cli)?,
    };
    let stdout = std::io::stdout();
    handle_filter(config, &mut stdout.lock())?;
    Ok(())
}

// Pure data transformation: defaults < config file < flags
fn build_options(cli: &Cli) -> linesift::errors::Result<FilterOptions> {
    cli.validate()?;
    let base = match load_config(cli.config.as_deref())? {
        Some(file_config) => FilterOptions::default().with_file_config(&file_config),
        None => FilterOptions::default(),
    };
    Ok(cli.apply_to(base))
}

fn exit_with_usage(err: &FilterError) -> ! {
    eprintln!("Error: {}", err);
    eprintln!();
    let _ = Cli::command().write_help(&mut std::io::stderr());
    std::process::exit(err.exit_code());
}
