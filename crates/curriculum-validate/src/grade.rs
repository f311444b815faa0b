use curriculum_model::{ConceptMap, Discrepancy, Grade, Standard};

/// Compare one grade's standards against its concept map.
///
/// Standards belong to the grade when their id contains `M-<grade>-`. A
/// related concept that is present in `concepts` but does not list the
/// standard back yields [`Discrepancy::ConceptMissingStandard`], in standards
/// order then related-id order. Concepts with an empty standard list follow as
/// [`Discrepancy::ConceptWithoutStandards`], in map order. Concepts that list a
/// standard which does not list them back are not reported.
pub fn check_grade(grade: Grade, standards: &[Standard], concepts: &ConceptMap) -> Vec<Discrepancy> {
    let mut discrepancies = Vec::new();

    for standard in standards.iter().filter(|s| grade.owns_standard(&s.id)) {
        let Some(related) = standard.related_concept_ids.as_deref() else {
            continue;
        };
        for concept_id in related {
            let Some(declared) = concepts.get(concept_id) else {
                continue;
            };
            if !declared.contains(&standard.id) {
                discrepancies.push(Discrepancy::ConceptMissingStandard {
                    concept_id: concept_id.clone(),
                    standard_id: standard.id.clone(),
                });
            }
        }
    }

    for concept in concepts.iter() {
        if concept.national_standard_ids.is_empty() {
            discrepancies.push(Discrepancy::ConceptWithoutStandards {
                concept_id: concept.id.clone(),
            });
        }
    }

    discrepancies
}
