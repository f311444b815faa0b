//! Checker configuration: where the catalogs live and how much to print.
//!
//! Precedence, lowest first: built-in defaults, `CURRICULUM_DATA_DIR`, a TOML
//! config file, then explicit overrides applied by the caller.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use curriculum_model::Grade;

use crate::error::{CatalogError, Result};
use crate::paths::{default_data_root, grade_path, standards_path};
use crate::text::read_catalog;

/// Discrepancies printed per grade before the remainder is summarized.
pub const DEFAULT_MAX_PRINT_PER_GRADE: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Directory holding the conventional catalog file names.
    pub data_dir: PathBuf,
    /// Explicit standards file; `None` means `<data_dir>/national-standards.ts`.
    pub standards_file: Option<CatalogPath>,
    /// Explicit grade files; missing grades use `<data_dir>/grade<N>.ts`.
    pub grade_files: BTreeMap<Grade, CatalogPath>,
    pub max_print_per_grade: usize,
}

/// A configured catalog location.
///
/// Config-file paths stay relative to the data directory until they are
/// resolved, so a later `data_dir` override moves them too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogPath {
    /// Used as written.
    Exact(PathBuf),
    /// Joined onto the data directory at resolution time.
    InDataDir(PathBuf),
}

impl CatalogPath {
    fn from_config_file(path: PathBuf) -> Self {
        if path.is_absolute() {
            Self::Exact(path)
        } else {
            Self::InDataDir(path)
        }
    }

    pub fn resolve(&self, data_dir: &Path) -> PathBuf {
        match self {
            Self::Exact(path) => path.clone(),
            Self::InDataDir(path) => data_dir.join(path),
        }
    }
}

/// On-disk form of the configuration.
///
/// ```toml
/// data_dir = "data"
/// standards_path = "national-standards.ts"
/// max_print_per_grade = 15
///
/// [grade_files]
/// 6 = "grade6.ts"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub standards_path: Option<PathBuf>,
    #[serde(default)]
    pub max_print_per_grade: Option<usize>,
    #[serde(default)]
    pub grade_files: BTreeMap<String, PathBuf>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = read_catalog(path)?;
        toml::from_str(&raw).map_err(|source| CatalogError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::for_data_dir(default_data_root())
    }
}

impl CheckerConfig {
    pub fn for_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            standards_file: None,
            grade_files: BTreeMap::new(),
            max_print_per_grade: DEFAULT_MAX_PRINT_PER_GRADE,
        }
    }

    /// Layer a config file on top of this configuration.
    ///
    /// Relative paths in the file resolve against the final data directory,
    /// including any `data_dir` override applied later.
    pub fn apply_file(mut self, file: ConfigFile, origin: &Path) -> Result<Self> {
        if let Some(data_dir) = file.data_dir {
            self.data_dir = data_dir;
        }
        if let Some(path) = file.standards_path {
            self.standards_file = Some(CatalogPath::from_config_file(path));
        }
        if let Some(max) = file.max_print_per_grade {
            self.max_print_per_grade = max;
        }
        for (key, path) in file.grade_files {
            let grade: Grade = key.parse().map_err(|err| CatalogError::InvalidConfig {
                path: origin.to_path_buf(),
                message: format!("grade_files: {err}"),
            })?;
            self.grade_files.insert(grade, CatalogPath::from_config_file(path));
        }
        debug!(config = %origin.display(), data_dir = %self.data_dir.display(), "config file applied");
        Ok(self)
    }

    pub fn load_file(self, path: &Path) -> Result<Self> {
        let file = ConfigFile::load(path)?;
        self.apply_file(file, path)
    }

    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    #[must_use]
    pub fn with_standards_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.standards_file = Some(CatalogPath::Exact(path.into()));
        self
    }

    #[must_use]
    pub fn with_grade_file(mut self, grade: Grade, path: impl Into<PathBuf>) -> Self {
        self.grade_files.insert(grade, CatalogPath::Exact(path.into()));
        self
    }

    #[must_use]
    pub fn with_max_print_per_grade(mut self, max: usize) -> Self {
        self.max_print_per_grade = max;
        self
    }

    pub fn standards_path(&self) -> PathBuf {
        match &self.standards_file {
            Some(path) => path.resolve(&self.data_dir),
            None => standards_path(&self.data_dir),
        }
    }

    pub fn grade_path(&self, grade: Grade) -> PathBuf {
        match self.grade_files.get(&grade) {
            Some(path) => path.resolve(&self.data_dir),
            None => grade_path(&self.data_dir, grade),
        }
    }
}
