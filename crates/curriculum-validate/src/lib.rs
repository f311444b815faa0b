//! Mapping consistency checks between the standards catalog and the
//! per-grade concept catalogs.

mod grade;
mod run;

pub use grade::check_grade;
pub use run::{check_curriculum, check_grade_file};
