use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unsupported grade {0} (expected one of 6, 7, 8, 9)")]
    UnsupportedGrade(u8),
    #[error("invalid grade '{0}'")]
    InvalidGrade(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
