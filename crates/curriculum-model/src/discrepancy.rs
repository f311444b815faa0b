use std::fmt;

use serde::{Deserialize, Serialize};

/// An inconsistency between a standard's declared concepts and a concept's
/// declared standards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discrepancy {
    /// The standard lists the concept, but the concept does not list the standard.
    ConceptMissingStandard {
        concept_id: String,
        standard_id: String,
    },
    /// The concept lists no standards at all.
    ConceptWithoutStandards { concept_id: String },
}

impl Discrepancy {
    pub fn concept_id(&self) -> &str {
        match self {
            Self::ConceptMissingStandard { concept_id, .. }
            | Self::ConceptWithoutStandards { concept_id } => concept_id,
        }
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConceptMissingStandard {
                concept_id,
                standard_id,
            } => write!(f, "Concept {concept_id} missing standard {standard_id}"),
            Self::ConceptWithoutStandards { concept_id } => {
                write!(f, "Concept {concept_id} has NO standards mapped.")
            }
        }
    }
}
