//! CLI argument definitions for rowcheck.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rowcheck",
    version,
    about = "rowcheck - declarative data-quality checks for CSV tables",
    long_about = "Run declarative data-quality rules against a CSV table.\n\n\
                  Rules are assembled from repeatable flags and evaluated in a\n\
                  fixed group order: --not-null, --unique, --between, --pattern,\n\
                  keeping command-line order within each group. Each failed rule\n\
                  reports its violation count and the first offending rows."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a CSV table against the rules given as flags.
    Check(CheckArgs),

    /// List the built-in rule kinds and their flag syntax.
    Rules,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the CSV file to check.
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Require a value in every row of COLUMN (repeatable).
    #[arg(long = "not-null", value_name = "COLUMN")]
    pub not_null: Vec<String>,

    /// Require each value in COLUMN to occur exactly once (repeatable).
    #[arg(long = "unique", value_name = "COLUMN")]
    pub unique: Vec<String>,

    /// Require numeric COLUMN within an inclusive range (repeatable).
    #[arg(long = "between", value_name = "COLUMN=MIN..MAX")]
    pub between: Vec<String>,

    /// Require string COLUMN to match REGEX from the start (repeatable).
    #[arg(long = "pattern", value_name = "COLUMN=REGEX")]
    pub pattern: Vec<String>,

    /// Output format for the findings.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
