//! Text rendering for diagnoses, encoded rows and reference tables.

use arrow::array::{Array, Float64Array, Int64Array};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use loyalscope_ai::Diagnosis;
use loyalscope_core::{Demographic, FEATURE_COLUMNS, SurveyItem, TemplateId, schema::Column};

use crate::narrative::{self, Action};

// ── Diagnosis card ──

/// Print one diagnosis as a text card.
pub fn print_diagnosis(label: &str, diagnosis: &Diagnosis) {
    let assessment = &diagnosis.assessment;
    let advisory = &diagnosis.advisory;

    println!("=== {label} ===");
    println!("model {}", diagnosis.model_version);
    println!();

    println!("Loyalty");
    for (dimension, level) in [
        ("rational", assessment.prediction.rational),
        ("emotional", assessment.prediction.emotional),
        ("behavioral", assessment.prediction.behavioral),
    ] {
        println!("  {dimension:<26} {level}");
    }
    println!(
        "  {:<26} low {} / neutral {} / high {}",
        "counts", assessment.counts.low, assessment.counts.neutral, assessment.counts.high
    );
    println!("  {:<26} {}", "tier", assessment.tier);
    println!();

    if let Some(copy) = narrative::tier_copy(advisory.tier_template) {
        println!("{}", copy.headline);
        println!("  {}", copy.summary);
        println!();
    }

    let [trust, satisfaction, loyalty] = narrative::chain_stages(advisory.chain_state);
    println!("Trust → Satisfaction → Loyalty");
    println!(
        "  TRUST ({trust}) --{}%--> SATISFACTION ({satisfaction}) --{}%--> LOYALTY ({loyalty})",
        narrative::TRUST_TO_SATISFACTION,
        narrative::SATISFACTION_TO_LOYALTY
    );
    println!("  {}", narrative::chain_note(advisory.chain_state));
    println!();

    if !advisory.dimension_blocks.is_empty() {
        println!("Preventive action plan");
        for block in &advisory.dimension_blocks {
            print_dimension_block(*block);
        }
        println!();
    }

    if let Some(copy) = narrative::tier_copy(advisory.tier_template) {
        print_actions(copy.recommended_heading, copy.recommended);
        print_actions(copy.avoid_heading, copy.avoid);
    }
}

fn print_dimension_block(template: TemplateId) {
    let Some(copy) = narrative::dimension_copy(template) else {
        return;
    };
    println!("  Target: {} (focus on {})", copy.heading, copy.focus);
    for step in copy.steps {
        println!("    - {step}");
    }
}

fn print_actions(heading: &str, actions: &[Action]) {
    if actions.is_empty() {
        return;
    }
    println!("{heading}");
    for (i, action) in actions.iter().enumerate() {
        match action.impact {
            Some(impact) => println!("  {}. {} (impact {impact:+}%)", i + 1, action.title),
            None => println!("  {}. {}", i + 1, action.title),
        }
        println!("     {}", action.detail);
    }
    println!();
}

pub fn print_methodology() {
    println!("About this analysis");
    println!("  {}", narrative::METHODOLOGY);
}

// ── Encoded row ──

/// Print a one-row feature batch as a vertical card, demographics first.
pub fn print_feature_card(batch: &RecordBatch) {
    let schema = batch.schema();
    let (demographics, survey): (Vec<_>, Vec<_>) = FEATURE_COLUMNS
        .into_iter()
        .enumerate()
        .partition(|(_, c)| matches!(c, Column::Demographic(_)));

    for (header, group) in [("Demographics", demographics), ("Survey", survey)] {
        println!("{header}");
        for (idx, column) in group {
            let col = batch.column(idx);
            if col.is_null(0) {
                continue;
            }
            let value = match schema.field(idx).data_type() {
                DataType::Int64 => col
                    .as_any()
                    .downcast_ref::<Int64Array>()
                    .map(|a| a.value(0).to_string()),
                DataType::Float64 => col
                    .as_any()
                    .downcast_ref::<Float64Array>()
                    .map(|a| format!("{:.1}", a.value(0))),
                _ => None,
            };
            println!(
                "  {:<26} {}",
                column.name(),
                value.unwrap_or_else(|| "(unsupported)".into())
            );
        }
        println!();
    }
}

// ── Reference tables ──

pub fn print_schema() {
    println!("{:>3}  {:<16} {:<8} source", "#", "column", "type");
    for (i, column) in FEATURE_COLUMNS.iter().enumerate() {
        let (ty, source) = match column {
            Column::Demographic(d) => ("int64", d.field_name().to_string()),
            Column::Survey(item) => (
                if column.is_float() { "float64" } else { "int64" },
                item.prompt().to_string(),
            ),
        };
        println!("{i:>3}  {:<16} {ty:<8} {source}", column.name());
    }
}

pub fn print_options() {
    for field in Demographic::ALL {
        println!("{} ({})", field.field_name(), field.column_name());
        for (code, label) in field.options() {
            println!("  {code:>2}  {label}");
        }
        println!();
    }

    println!("likert (1-7, neutral 4)");
    for item in SurveyItem::ALL {
        println!("  {:<8} {}", item.id(), item.prompt());
    }
}
