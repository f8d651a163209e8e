//! analyze-series - descriptive statistics for time-series data.
//!
//! Reads a series of points from a file or standard input, prints a
//! control-chart report, and optionally asserts that the most recent
//! observation is in control.

use clap::Parser;
use sa_common::OutputFormat;
use sa_core::command::{execute, AnalyzeConfig};
use sa_core::input::InputSource;
use sa_core::logging::{init_logging, LogLevel};
use std::path::PathBuf;

/// Analyze a series of points and print descriptive statistics
#[derive(Parser)]
#[command(name = "analyze-series")]
#[command(author, version)]
#[command(after_help = "\
analyze-series supports:
  * integer and floating-point numbers
  * positive and negative numbers
  * whitespace around the number
  * statistics useful for analysis of time-series data:
    * median
    * mean, sample standard deviation
    * upper and lower control limits
    * points and associated values falling outside of control limits")]
struct Cli {
    /// Input file to process; defaults to standard input
    input_file: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long)]
    quiet: bool,

    /// Assert the last point in the series is in control and exit with
    /// status 1 when it is not
    #[arg(long)]
    assert_last_point_in_control: bool,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        LogLevel::Error
    } else {
        match cli.verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    };
    init_logging(log_level);

    let config = AnalyzeConfig {
        input: InputSource::from_arg(cli.input_file),
        assert_last_point_in_control: cli.assert_last_point_in_control,
        format: cli.format,
    };

    let result = execute(&config);
    if !result.message.is_empty() {
        eprintln!("{}", result.message);
    }
    std::process::exit(result.status.as_i32());
}
