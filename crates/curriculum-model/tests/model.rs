//! Tests for curriculum-model types.

use curriculum_model::{ConceptMap, Discrepancy, Grade, ModelError, Standard};

#[test]
fn grade_parses_supported_numbers() {
    assert_eq!("6".parse::<Grade>(), Ok(Grade::Six));
    assert_eq!(" 9 ".parse::<Grade>(), Ok(Grade::Nine));
    assert_eq!(Grade::try_from(5), Err(ModelError::UnsupportedGrade(5)));
    assert_eq!(
        "seven".parse::<Grade>(),
        Err(ModelError::InvalidGrade("seven".to_string()))
    );
}

#[test]
fn grade_order_and_conventions() {
    let numbers: Vec<u8> = Grade::ALL.iter().map(|grade| grade.number()).collect();
    assert_eq!(numbers, vec![6, 7, 8, 9]);
    assert_eq!(Grade::Seven.standard_marker(), "M-7-");
    assert_eq!(Grade::Eight.default_file_name(), "grade8.ts");
    assert!(Grade::Seven.owns_standard("M-7-ALG-1"));
    assert!(!Grade::Seven.owns_standard("M-17-ALG-1"));
    assert!(!Grade::Six.owns_standard("M-7-ALG-1"));
}

#[test]
fn grade_serializes_as_number() {
    let json = serde_json::to_string(&Grade::Eight).expect("serialize grade");
    assert_eq!(json, "8");
    let parsed: Result<Grade, _> = serde_json::from_str("10");
    assert!(parsed.is_err());
}

#[test]
fn concept_map_keeps_first_seen_order_on_overwrite() {
    let mut map = ConceptMap::new();
    map.insert("C1", vec!["M-6-A".to_string()]);
    map.insert("C2", vec![]);
    map.insert("C1", vec!["M-6-B".to_string()]);

    let ids: Vec<&str> = map.iter().map(|concept| concept.id.as_str()).collect();
    assert_eq!(ids, vec!["C1", "C2"]);
    assert_eq!(map.get("C1"), Some(&["M-6-B".to_string()][..]));
    assert_eq!(map.get("C2"), Some(&[][..]));
    assert!(map.get("C3").is_none());
    assert_eq!(map.len(), 2);
}

#[test]
fn discrepancy_messages_are_verbatim() {
    let missing = Discrepancy::ConceptMissingStandard {
        concept_id: "C1".to_string(),
        standard_id: "M-7-ALG-1".to_string(),
    };
    let empty = Discrepancy::ConceptWithoutStandards {
        concept_id: "C1".to_string(),
    };
    assert_eq!(missing.to_string(), "Concept C1 missing standard M-7-ALG-1");
    assert_eq!(empty.to_string(), "Concept C1 has NO standards mapped.");
    assert_eq!(empty.concept_id(), "C1");
}

#[test]
fn standard_without_related_concepts_omits_field() {
    let bare = Standard::new("M-6-A");
    let json = serde_json::to_value(&bare).expect("serialize standard");
    assert!(json.get("related_concept_ids").is_none());

    let linked = Standard::new("M-6-A").with_related_concepts(["C1", "C2"]);
    assert_eq!(
        linked.related_concept_ids,
        Some(vec!["C1".to_string(), "C2".to_string()])
    );
}
