use std::collections::BTreeSet;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use curriculum_model::{CheckRun, Discrepancy, GradeOutcome, GradeReport};

pub fn print_summary(run: &CheckRun) {
    println!();
    println!(
        "Standards: {} ({} records)",
        run.standards_source.display(),
        run.standard_count
    );
    println!("{}", summary_table(run));
}

pub fn summary_table(run: &CheckRun) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Grade"),
        header_cell("Source"),
        header_cell("Concepts"),
        header_cell("Missing standard"),
        header_cell("No standards"),
        header_cell("Flagged concepts"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for index in [0, 2, 3, 4, 5] {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_missing = 0usize;
    let mut total_empty = 0usize;
    for report in &run.grades {
        let (missing, empty) = split_counts(report);
        total_missing += missing;
        total_empty += empty;
        let concepts = match &report.outcome {
            GradeOutcome::Checked { concept_count, .. } => Cell::new(concept_count),
            GradeOutcome::FileMissing | GradeOutcome::ReadFailed { .. } => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(report.grade).add_attribute(Attribute::Bold),
            Cell::new(report.source.display()),
            concepts,
            count_cell(missing, Color::Red),
            count_cell(empty, Color::Yellow),
            count_cell(flagged_concepts(report), Color::Magenta),
            status_cell(&report.outcome),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(total_missing, Color::Red).add_attribute(Attribute::Bold),
        count_cell(total_empty, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table
}

fn split_counts(report: &GradeReport) -> (usize, usize) {
    report
        .discrepancies()
        .iter()
        .fold((0, 0), |(missing, empty), discrepancy| match discrepancy {
            Discrepancy::ConceptMissingStandard { .. } => (missing + 1, empty),
            Discrepancy::ConceptWithoutStandards { .. } => (missing, empty + 1),
        })
}

/// Distinct concepts with at least one discrepancy.
fn flagged_concepts(report: &GradeReport) -> usize {
    report
        .discrepancies()
        .iter()
        .map(Discrepancy::concept_id)
        .collect::<BTreeSet<_>>()
        .len()
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(outcome: &GradeOutcome) -> Cell {
    match outcome {
        GradeOutcome::Checked { discrepancies, .. } if discrepancies.is_empty() => {
            Cell::new("ok").fg(Color::Green)
        }
        GradeOutcome::Checked { .. } => Cell::new("mismatches").fg(Color::Yellow),
        GradeOutcome::FileMissing => Cell::new("file not found").fg(Color::Red),
        GradeOutcome::ReadFailed { .. } => Cell::new("read failed")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use curriculum_model::Grade;

    use super::*;

    #[test]
    fn flagged_concepts_counts_each_concept_once() {
        let report = GradeReport {
            grade: Grade::Seven,
            source: PathBuf::from("grade7.ts"),
            outcome: GradeOutcome::Checked {
                concept_count: 3,
                discrepancies: vec![
                    Discrepancy::ConceptMissingStandard {
                        concept_id: "C1".to_string(),
                        standard_id: "M-7-ALG-1".to_string(),
                    },
                    Discrepancy::ConceptWithoutStandards {
                        concept_id: "C1".to_string(),
                    },
                    Discrepancy::ConceptWithoutStandards {
                        concept_id: "C2".to_string(),
                    },
                ],
            },
        };
        assert_eq!(flagged_concepts(&report), 2);
        assert_eq!(split_counts(&report), (1, 2));
    }
}
