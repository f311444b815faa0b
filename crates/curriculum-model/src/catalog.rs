use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A curriculum requirement record from the standards catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standard {
    /// Standard identifier, conventionally `M-<grade>-<rest>`.
    pub id: String,
    /// Concepts the standard points at. `None` when the field was absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_concept_ids: Option<Vec<String>>,
}

impl Standard {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            related_concept_ids: None,
        }
    }

    #[must_use]
    pub fn with_related_concepts<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_concept_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }
}

/// A teachable unit from a grade catalog and the standards it claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub id: String,
    pub national_standard_ids: Vec<String>,
}

/// Concepts of one grade keyed by id, iterated in first-seen order.
///
/// Inserting an id that is already present replaces its standard list in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptMap {
    concepts: Vec<Concept>,
    index: HashMap<String, usize>,
}

impl ConceptMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, national_standard_ids: Vec<String>) {
        let id = id.into();
        if let Some(&position) = self.index.get(&id) {
            self.concepts[position].national_standard_ids = national_standard_ids;
            return;
        }
        self.index.insert(id.clone(), self.concepts.len());
        self.concepts.push(Concept {
            id,
            national_standard_ids,
        });
    }

    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.index
            .get(id)
            .map(|&position| self.concepts[position].national_standard_ids.as_slice())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.iter()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for ConceptMap {
    fn from_iter<T: IntoIterator<Item = (S, Vec<String>)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (id, standards) in iter {
            map.insert(id, standards);
        }
        map
    }
}
