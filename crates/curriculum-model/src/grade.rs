#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// A school grade covered by the curriculum catalogs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Grade {
    Six,
    Seven,
    Eight,
    Nine,
}

impl Grade {
    /// Every grade, in report order.
    pub const ALL: [Grade; 4] = [Grade::Six, Grade::Seven, Grade::Eight, Grade::Nine];

    pub fn number(self) -> u8 {
        match self {
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
        }
    }

    /// Substring that marks a standard id as belonging to this grade (`M-7-`).
    pub fn standard_marker(self) -> String {
        format!("M-{}-", self.number())
    }

    /// Conventional concept file name for this grade (`grade7.ts`).
    pub fn default_file_name(self) -> String {
        format!("grade{}.ts", self.number())
    }

    pub fn owns_standard(self, standard_id: &str) -> bool {
        standard_id.contains(&self.standard_marker())
    }
}

impl TryFrom<u8> for Grade {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            8 => Ok(Self::Eight),
            9 => Ok(Self::Nine),
            other => Err(ModelError::UnsupportedGrade(other)),
        }
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.number()
    }
}

impl FromStr for Grade {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u8 = trimmed
            .parse()
            .map_err(|_| ModelError::InvalidGrade(s.to_string()))?;
        Grade::try_from(value)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
