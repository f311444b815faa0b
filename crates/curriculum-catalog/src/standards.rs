//! Line-oriented extraction of the national standards catalog.
//!
//! The catalog is a TypeScript module that holds an array of object literals.
//! Records are rebuilt by scanning lines for the `"id"` and
//! `"relatedConceptIds"` fields and closing on `},` or `]`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use curriculum_model::{Notice, Standard};

use crate::error::Result;
use crate::text::{read_catalog, split_id_list};

const ID_FIELD: &str = "\"id\":";
const RELATED_FIELD: &str = "\"relatedConceptIds\":";

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""id":\s*"([^"]+)""#).expect("id pattern compiles"));

static RELATED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""relatedConceptIds":\s*\[([^\]]*)\]"#).expect("related pattern compiles")
});

/// Standards pulled from one file plus the lines that could not be read.
#[derive(Debug, Clone, Default)]
pub struct StandardsExtraction {
    pub standards: Vec<Standard>,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Default)]
struct WorkingRecord {
    id: Option<String>,
    related_concept_ids: Option<Vec<String>>,
}

impl WorkingRecord {
    fn take_standard(&mut self) -> Option<Standard> {
        let id = self.id.take()?;
        Some(Standard {
            id,
            related_concept_ids: self.related_concept_ids.take(),
        })
    }
}

/// Parse standards from catalog text, silently skipping malformed fields.
pub fn parse_standards(content: &str) -> Vec<Standard> {
    scan(content, |_, _| {})
}

/// Parse standards and report every `id`/`relatedConceptIds` line that did
/// not match its pattern as a warning against `source`.
pub fn parse_standards_with_notices(content: &str, source: &Path) -> StandardsExtraction {
    let mut notices = Vec::new();
    let standards = scan(content, |line_number, field| {
        warn!(
            source = %source.display(),
            line = line_number,
            field,
            "unparseable field dropped"
        );
        notices.push(Notice::warning(
            source,
            format!("line {line_number}: unparseable {field} field"),
        ));
    });
    StandardsExtraction { standards, notices }
}

pub fn extract_standards(path: &Path) -> Result<Vec<Standard>> {
    let content = read_catalog(path)?;
    let standards = parse_standards(&content);
    debug!(source = %path.display(), count = standards.len(), "standards extracted");
    Ok(standards)
}

pub fn extract_standards_with_notices(path: &Path) -> Result<StandardsExtraction> {
    let content = read_catalog(path)?;
    let extraction = parse_standards_with_notices(&content, path);
    debug!(
        source = %path.display(),
        count = extraction.standards.len(),
        dropped = extraction.notices.len(),
        "standards extracted"
    );
    Ok(extraction)
}

fn scan(content: &str, mut on_dropped: impl FnMut(usize, &'static str)) -> Vec<Standard> {
    let mut standards = Vec::new();
    let mut current = WorkingRecord::default();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;

        if line.contains(ID_FIELD) {
            match ID_PATTERN.captures(line) {
                Some(captures) => current.id = Some(captures[1].to_string()),
                None => on_dropped(line_number, "\"id\""),
            }
        }

        if line.contains(RELATED_FIELD) {
            match RELATED_PATTERN.captures(line) {
                Some(captures) => current.related_concept_ids = Some(split_id_list(&captures[1])),
                None => on_dropped(line_number, "\"relatedConceptIds\""),
            }
        }

        // A record without an id is kept open, so fields seen before the id carry over.
        if (line.contains("},") || line.contains(']'))
            && let Some(standard) = current.take_standard()
        {
            standards.push(standard);
        }
    }

    standards
}
