use std::path::Path;

use tracing::{info, info_span, warn};

use curriculum_catalog::{
    CatalogError, CheckerConfig, extract_concepts_with_notices, extract_standards_with_notices,
};
use curriculum_model::{CheckRun, Grade, GradeOutcome, GradeReport, Notice, Standard};

use crate::grade::check_grade;

/// Run the whole check: load the standards once, then every grade in order.
///
/// A missing or unreadable grade file is recorded on that grade and the run
/// moves on. Only a standards file that cannot be read fails the run.
pub fn check_curriculum(config: &CheckerConfig) -> Result<CheckRun, CatalogError> {
    let standards_source = config.standards_path();
    let extraction = extract_standards_with_notices(&standards_source)?;
    info!(
        source = %standards_source.display(),
        standard_count = extraction.standards.len(),
        "standards loaded"
    );

    let mut notices = extraction.notices;
    let mut grades = Vec::with_capacity(Grade::ALL.len());
    for grade in Grade::ALL {
        let path = config.grade_path(grade);
        let report = check_grade_file(grade, &path, &extraction.standards, &mut notices);
        grades.push(report);
    }

    Ok(CheckRun {
        standards_source,
        standard_count: extraction.standards.len(),
        grades,
        notices,
    })
}

/// Check a single grade file, recording partial failures in `notices`.
pub fn check_grade_file(
    grade: Grade,
    path: &Path,
    standards: &[Standard],
    notices: &mut Vec<Notice>,
) -> GradeReport {
    let span = info_span!("grade", grade = grade.number(), source = %path.display());
    let _guard = span.enter();

    let outcome = match path.try_exists() {
        Ok(false) => {
            warn!("grade file not found");
            notices.push(Notice::warning(path, "grade file not found"));
            GradeOutcome::FileMissing
        }
        Ok(true) => match extract_concepts_with_notices(path) {
            Ok(extraction) => {
                notices.extend(extraction.notices);
                let discrepancies = check_grade(grade, standards, &extraction.concepts);
                info!(
                    concept_count = extraction.concepts.len(),
                    discrepancy_count = discrepancies.len(),
                    "grade checked"
                );
                GradeOutcome::Checked {
                    concept_count: extraction.concepts.len(),
                    discrepancies,
                }
            }
            Err(error) => read_failed(path, &error, notices),
        },
        Err(source) => {
            let error = CatalogError::Io {
                path: path.to_path_buf(),
                source,
            };
            read_failed(path, &error, notices)
        }
    };

    GradeReport {
        grade,
        source: path.to_path_buf(),
        outcome,
    }
}

fn read_failed(path: &Path, error: &CatalogError, notices: &mut Vec<Notice>) -> GradeOutcome {
    let message = match error {
        CatalogError::Io { source, .. } => source.to_string(),
        other => other.to_string(),
    };
    warn!(%error, "grade file could not be read");
    notices.push(Notice::error(path, error.to_string()));
    GradeOutcome::ReadFailed { message }
}
