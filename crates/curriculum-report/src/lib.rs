//! Rendering of mapping check results.

mod json;
mod text;

pub use json::render_json;
pub use text::{ReportOptions, grade_lines, render_text, write_report};
