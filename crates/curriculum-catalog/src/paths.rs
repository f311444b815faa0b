//! Data directory path resolution.

use std::path::{Path, PathBuf};

use curriculum_model::Grade;

/// Environment variable for overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "CURRICULUM_DATA_DIR";

/// Data directory used when nothing overrides it.
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name of the standards catalog inside the data directory.
pub const DEFAULT_STANDARDS_FILE: &str = "national-standards.ts";

/// Get the data root directory.
///
/// Resolution order:
/// 1. `CURRICULUM_DATA_DIR` environment variable
/// 2. `data/` relative to the working directory
pub fn default_data_root() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(DEFAULT_DATA_DIR)
}

pub fn standards_path(data_root: &Path) -> PathBuf {
    data_root.join(DEFAULT_STANDARDS_FILE)
}

pub fn grade_path(data_root: &Path, grade: Grade) -> PathBuf {
    data_root.join(grade.default_file_name())
}
