//! CLI argument definitions for the mapping checker.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use curriculum_model::{Grade, ModelError};

#[derive(Parser)]
#[command(
    name = "check-mappings",
    version,
    about = "Cross-check curriculum standards against per-grade concept catalogs",
    long_about = "Cross-check curriculum standards against per-grade concept catalogs.\n\n\
                  Reports concepts that a standard points at but that do not list the\n\
                  standard back, and concepts with no standards mapped, for grades 6-9.\n\
                  Input locations default to data/ (override with CURRICULUM_DATA_DIR)."
)]
pub struct Cli {
    #[command(flatten)]
    pub check: CheckArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// TOML config file with data_dir, standards_path, grade_files, max_print_per_grade.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding national-standards.ts and grade<N>.ts.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Standards catalog file (overrides the data directory convention).
    #[arg(long = "standards", value_name = "PATH")]
    pub standards: Option<PathBuf>,

    /// Concept catalog for one grade, as GRADE=PATH (repeatable).
    #[arg(long = "grade-file", value_name = "GRADE=PATH", value_parser = parse_grade_file)]
    pub grade_files: Vec<(Grade, PathBuf)>,

    /// Discrepancies printed per grade before the rest are summarized.
    #[arg(long = "max-per-grade", value_name = "N")]
    pub max_per_grade: Option<usize>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Print a per-grade count table after the report.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Exit with status 1 when any discrepancy is found.
    ///
    /// By default the checker is diagnostic only and exits 0 whenever the
    /// standards catalog could be read.
    #[arg(long = "fail-on-discrepancies")]
    pub fail_on_discrepancies: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
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

fn parse_grade_file(raw: &str) -> Result<(Grade, PathBuf), String> {
    let (grade, path) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected GRADE=PATH, got '{raw}'"))?;
    let grade: Grade = grade.parse().map_err(|err: ModelError| err.to_string())?;
    if path.trim().is_empty() {
        return Err(format!("missing path for grade {grade}"));
    }
    Ok((grade, PathBuf::from(path)))
}
