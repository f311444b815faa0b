use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Discrepancy, Grade};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSeverity {
    Error,
    Warning,
}

impl NoticeSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for NoticeSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A partial failure surfaced alongside the discrepancies: a missing or
/// unreadable file, or a record that could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub source: PathBuf,
    pub message: String,
}

impl Notice {
    pub fn warning(source: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Warning,
            source: source.into(),
            message: message.into(),
        }
    }

    pub fn error(source: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            source: source.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.severity,
            self.source.display(),
            self.message
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GradeOutcome {
    Checked {
        concept_count: usize,
        discrepancies: Vec<Discrepancy>,
    },
    FileMissing,
    ReadFailed {
        message: String,
    },
}

/// Result of checking one grade file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeReport {
    pub grade: Grade,
    pub source: PathBuf,
    #[serde(flatten)]
    pub outcome: GradeOutcome,
}

impl GradeReport {
    pub fn discrepancies(&self) -> &[Discrepancy] {
        match &self.outcome {
            GradeOutcome::Checked { discrepancies, .. } => discrepancies,
            GradeOutcome::FileMissing | GradeOutcome::ReadFailed { .. } => &[],
        }
    }

    pub fn discrepancy_count(&self) -> usize {
        self.discrepancies().len()
    }
}

/// Everything one run of the checker produced, in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRun {
    pub standards_source: PathBuf,
    pub standard_count: usize,
    pub grades: Vec<GradeReport>,
    pub notices: Vec<Notice>,
}

impl CheckRun {
    pub fn grade(&self, grade: Grade) -> Option<&GradeReport> {
        self.grades.iter().find(|report| report.grade == grade)
    }

    pub fn discrepancy_count(&self) -> usize {
        self.grades.iter().map(GradeReport::discrepancy_count).sum()
    }

    pub fn has_discrepancies(&self) -> bool {
        self.discrepancy_count() > 0
    }
}
