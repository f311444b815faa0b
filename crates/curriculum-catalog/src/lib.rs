#![deny(unsafe_code)]

pub mod concepts;
pub mod config;
pub mod error;
pub mod paths;
pub mod standards;

mod text;

pub use crate::concepts::{
    ConceptExtraction, extract_concepts, extract_concepts_with_notices, parse_concepts,
    parse_concepts_with_notices,
};
pub use crate::config::{CatalogPath, CheckerConfig, ConfigFile, DEFAULT_MAX_PRINT_PER_GRADE};
pub use crate::error::{CatalogError, Result};
pub use crate::standards::{
    StandardsExtraction, extract_standards, extract_standards_with_notices, parse_standards,
    parse_standards_with_notices,
};
