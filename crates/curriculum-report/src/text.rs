//! Plain-text console report.
//!
//! One section per grade in report order:
//!
//! ```text
//! --- Grade 7 ---
//! Concept C1 missing standard M-7-ALG-1
//! Concept C1 has NO standards mapped.
//! ```
//!
//! Grades with more discrepancies than the per-grade limit end with a
//! `... and N more.` line.

use std::fmt::Write as _;
use std::io;

use curriculum_catalog::DEFAULT_MAX_PRINT_PER_GRADE;
use curriculum_model::{CheckRun, Discrepancy, GradeOutcome, GradeReport};

const NO_MISSING_MAPPINGS: &str = "No missing mappings found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Discrepancies printed verbatim per grade.
    pub max_per_grade: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            max_per_grade: DEFAULT_MAX_PRINT_PER_GRADE,
        }
    }
}

/// Lines printed under a grade header for a list of discrepancies.
pub fn grade_lines(discrepancies: &[Discrepancy], max_per_grade: usize) -> Vec<String> {
    if discrepancies.is_empty() {
        return vec![NO_MISSING_MAPPINGS.to_string()];
    }
    let mut lines: Vec<String> = discrepancies
        .iter()
        .take(max_per_grade)
        .map(ToString::to_string)
        .collect();
    if discrepancies.len() > max_per_grade {
        lines.push(format!(
            "... and {} more.",
            discrepancies.len() - max_per_grade
        ));
    }
    lines
}

pub fn render_text(run: &CheckRun, options: &ReportOptions) -> String {
    let mut out = String::new();
    for (index, grade) in run.grades.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        push_grade_section(&mut out, grade, options);
    }
    if !run.notices.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("--- Notices ---\n");
        for notice in &run.notices {
            let _ = writeln!(out, "{notice}");
        }
    }
    out
}

pub fn write_report<W: io::Write>(
    writer: &mut W,
    run: &CheckRun,
    options: &ReportOptions,
) -> io::Result<()> {
    writer.write_all(render_text(run, options).as_bytes())?;
    writer.flush()
}

fn push_grade_section(out: &mut String, report: &GradeReport, options: &ReportOptions) {
    let _ = writeln!(out, "--- Grade {} ---", report.grade);
    match &report.outcome {
        GradeOutcome::Checked { discrepancies, .. } => {
            for line in grade_lines(discrepancies, options.max_per_grade) {
                out.push_str(&line);
                out.push('\n');
            }
        }
        GradeOutcome::FileMissing => {
            let _ = writeln!(out, "File not found: {}", report.source.display());
        }
        GradeOutcome::ReadFailed { message } => {
            let _ = writeln!(
                out,
                "Could not read {}: {message}",
                report.source.display()
            );
        }
    }
}
