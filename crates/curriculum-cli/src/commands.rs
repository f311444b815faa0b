use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use curriculum_catalog::CheckerConfig;
use curriculum_model::CheckRun;
use curriculum_report::{ReportOptions, render_json, write_report};
use curriculum_validate::check_curriculum;

use crate::cli::{CheckArgs, ReportFormatArg};
use crate::summary::print_summary;

/// Layer defaults, `CURRICULUM_DATA_DIR`, the config file and CLI flags.
pub fn build_config(args: &CheckArgs) -> Result<CheckerConfig> {
    let mut config = CheckerConfig::default();
    if let Some(path) = &args.config {
        config = config
            .load_file(path)
            .with_context(|| format!("load config {}", path.display()))?;
    }
    if let Some(dir) = &args.data_dir {
        config = config.with_data_dir(dir);
    }
    if let Some(path) = &args.standards {
        config = config.with_standards_file(path);
    }
    for (grade, path) in &args.grade_files {
        config = config.with_grade_file(*grade, path);
    }
    if let Some(max) = args.max_per_grade {
        config = config.with_max_print_per_grade(max);
    }
    debug!(?config, "configuration resolved");
    Ok(config)
}

/// Run the check and print the report. Returns the process exit code.
pub fn run_check(args: &CheckArgs) -> Result<i32> {
    let config = build_config(args)?;
    let run = check_curriculum(&config).context("check curriculum mappings")?;
    info!(
        standard_count = run.standard_count,
        discrepancy_count = run.discrepancy_count(),
        notice_count = run.notices.len(),
        "check complete"
    );

    print_run(&run, &config, args).context("write report")?;

    if args.fail_on_discrepancies && run.has_discrepancies() {
        return Ok(1);
    }
    Ok(0)
}

fn print_run(run: &CheckRun, config: &CheckerConfig, args: &CheckArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        ReportFormatArg::Text => {
            let options = ReportOptions {
                max_per_grade: config.max_print_per_grade,
            };
            write_report(&mut out, run, &options)?;
        }
        ReportFormatArg::Json => {
            let payload = render_json(run).context("serialize report")?;
            writeln!(out, "{payload}")?;
        }
    }
    drop(out);
    if args.summary {
        print_summary(run);
    }
    Ok(())
}
