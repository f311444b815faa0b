//! Pattern-based extraction of per-grade concept catalogs.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use curriculum_model::{ConceptMap, Notice};

use crate::error::Result;
use crate::text::{read_catalog, split_id_list};

const STANDARD_IDS_FIELD: &str = "\"nationalStandardIds\":";

/// An `id` followed, within the same object, by its `nationalStandardIds` list.
static CONCEPT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"id":\s*"([^"]+)"[^}]+?"nationalStandardIds":\s*\[([^\]]*)\]"#)
        .expect("concept pattern compiles")
});

static ID_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""id":\s*"([^"]+)""#).expect("id pattern compiles"));

#[derive(Debug, Clone, Default)]
pub struct ConceptExtraction {
    pub concepts: ConceptMap,
    pub notices: Vec<Notice>,
}

pub fn parse_concepts(content: &str) -> ConceptMap {
    CONCEPT_PATTERN
        .captures_iter(content)
        .map(|captures| (captures[1].to_string(), split_id_list(&captures[2])))
        .collect()
}

/// Parse concepts and warn about records the pattern could not attribute.
///
/// Two cases are reported: `nationalStandardIds` fields never paired with an
/// id, and lists claimed by an enclosing id when a nearer concept id sits
/// between them (no `}` separates an outer object from its first child).
pub fn parse_concepts_with_notices(content: &str, source: &Path) -> ConceptExtraction {
    let mut notices = Vec::new();
    let mut matched = 0usize;
    for captures in CONCEPT_PATTERN.captures_iter(content) {
        matched += 1;
        let (Some(whole), Some(list)) = (captures.get(0), captures.get(2)) else {
            continue;
        };
        let claimed = &captures[1];
        let nearest = ID_FIELD
            .captures_iter(&content[whole.start()..list.start()])
            .last()
            .map(|inner| inner[1].to_string());
        if let Some(nearest) = nearest
            && nearest != claimed
        {
            warn!(source = %source.display(), claimed, shadowed = %nearest, "concept id shadowed");
            notices.push(Notice::warning(
                source,
                format!("concept \"{nearest}\" lost: its nationalStandardIds were claimed by \"{claimed}\""),
            ));
        }
    }

    let declared = content.matches(STANDARD_IDS_FIELD).count();
    if declared > matched {
        let skipped = declared - matched;
        warn!(source = %source.display(), skipped, "concept records not matched");
        notices.push(Notice::warning(
            source,
            format!("{skipped} nationalStandardIds field(s) not paired with a concept id"),
        ));
    }
    ConceptExtraction {
        concepts: parse_concepts(content),
        notices,
    }
}

pub fn extract_concepts(path: &Path) -> Result<ConceptMap> {
    let content = read_catalog(path)?;
    let concepts = parse_concepts(&content);
    debug!(source = %path.display(), count = concepts.len(), "concepts extracted");
    Ok(concepts)
}

pub fn extract_concepts_with_notices(path: &Path) -> Result<ConceptExtraction> {
    let content = read_catalog(path)?;
    let extraction = parse_concepts_with_notices(&content, path);
    debug!(
        source = %path.display(),
        count = extraction.concepts.len(),
        "concepts extracted"
    );
    Ok(extraction)
}
