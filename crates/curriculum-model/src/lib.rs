//! Data model shared by the curriculum mapping checker crates.

pub mod catalog;
pub mod discrepancy;
pub mod error;
pub mod grade;
pub mod run;

pub use catalog::{Concept, ConceptMap, Standard};
pub use discrepancy::Discrepancy;
pub use error::{ModelError, Result};
pub use grade::Grade;
pub use run::{CheckRun, GradeOutcome, GradeReport, Notice, NoticeSeverity};
