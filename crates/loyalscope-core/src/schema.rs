//! The classifier's feature contract.
//!
//! [`FEATURE_COLUMNS`] is the training-time column order. The encoder and the
//! model manifest check both read it; nothing recomputes the order per call.

use arrow::datatypes::{DataType, Field, Schema};

use crate::CoreError;
use crate::demographics::Demographic;
use crate::survey::SurveyItem;

/// Number of model inputs.
pub const FEATURE_COUNT: usize = 38;

/// One input column of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Demographic(Demographic),
    Survey(SurveyItem),
}

impl Column {
    /// Trained column name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Demographic(d) => d.column_name(),
            Self::Survey(item) => item.column_name(),
        }
    }

    /// `CSOR_5` was floating point in the training frame; every other column is integral.
    pub fn is_float(self) -> bool {
        matches!(self, Self::Survey(SurveyItem::Csor5))
    }

    pub fn data_type(self) -> DataType {
        if self.is_float() {
            DataType::Float64
        } else {
            DataType::Int64
        }
    }
}

const fn d(field: Demographic) -> Column {
    Column::Demographic(field)
}

const fn s(item: SurveyItem) -> Column {
    Column::Survey(item)
}

/// Training-time column order.
pub const FEATURE_COLUMNS: [Column; FEATURE_COUNT] = [
    s(SurveyItem::Csor2),
    d(Demographic::MaritalStatus),
    s(SurveyItem::Sat1),
    s(SurveyItem::Trust4),
    s(SurveyItem::Sat3),
    s(SurveyItem::Perf3),
    d(Demographic::Education),
    s(SurveyItem::Csor3),
    s(SurveyItem::Qual5),
    s(SurveyItem::Attr4),
    s(SurveyItem::Csor5),
    s(SurveyItem::Csor1),
    s(SurveyItem::Qual2),
    s(SurveyItem::Perf4),
    s(SurveyItem::Trust3),
    s(SurveyItem::Sat2),
    d(Demographic::Age),
    s(SurveyItem::Qual7),
    s(SurveyItem::Like2),
    s(SurveyItem::Comp3),
    s(SurveyItem::Perf1),
    s(SurveyItem::Comp2),
    s(SurveyItem::Like1),
    s(SurveyItem::Attr2),
    s(SurveyItem::Attr1),
    s(SurveyItem::Attr3),
    d(Demographic::Employment),
    s(SurveyItem::Qual6),
    s(SurveyItem::Perf2),
    s(SurveyItem::Csor4),
    s(SurveyItem::Qual1),
    s(SurveyItem::Comp1),
    d(Demographic::Gender),
    s(SurveyItem::Trust2),
    s(SurveyItem::Trust1),
    s(SurveyItem::Qual4),
    s(SurveyItem::Perf5),
    d(Demographic::Income),
];

const fn column_slot(column: Column) -> usize {
    match column {
        Column::Demographic(field) => field as usize,
        Column::Survey(item) => Demographic::ALL.len() + item as usize,
    }
}

// Every demographic field and survey item appears exactly once.
const _: () = {
    assert!(Demographic::ALL.len() + SurveyItem::ALL.len() == FEATURE_COUNT);
    let mut seen = [false; FEATURE_COUNT];
    let mut i = 0;
    while i < FEATURE_COUNT {
        let slot = column_slot(FEATURE_COLUMNS[i]);
        assert!(!seen[slot], "feature column listed twice");
        seen[slot] = true;
        i += 1;
    }
};

/// Column names in training order.
pub fn feature_names() -> Vec<&'static str> {
    FEATURE_COLUMNS.iter().map(|c| c.name()).collect()
}

/// Position of a column in the feature vector.
pub fn position(column: Column) -> usize {
    FEATURE_COLUMNS
        .iter()
        .position(|c| *c == column)
        .unwrap_or_else(|| unreachable!("every column is listed in FEATURE_COLUMNS"))
}

/// Arrow schema of the one-row model input frame.
pub fn feature_schema() -> Schema {
    let fields: Vec<Field> = FEATURE_COLUMNS
        .iter()
        .map(|c| Field::new(c.name(), c.data_type(), false))
        .collect();
    Schema::new(fields)
}

/// Check a declared feature order (e.g. from a model manifest) against
/// [`FEATURE_COLUMNS`].
pub fn verify_feature_names<S: AsRef<str>>(declared: &[S]) -> Result<(), CoreError> {
    if declared.len() != FEATURE_COUNT {
        return Err(CoreError::SchemaMismatch(format!(
            "model expects {} features, encoder emits {FEATURE_COUNT}",
            declared.len()
        )));
    }

    for (i, (name, column)) in declared.iter().zip(FEATURE_COLUMNS).enumerate() {
        if name.as_ref() != column.name() {
            return Err(CoreError::SchemaMismatch(format!(
                "position {i}: model expects {:?}, encoder emits {:?}",
                name.as_ref(),
                column.name()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const TRAINED_ORDER: [&str; FEATURE_COUNT] = [
        "CSOR_2", "D_2_FAMILY", "SAT_1", "TRUST_4", "SAT_3", "PERF_3", "D_3_EDUCATION",
        "CSOR_3", "QUAL_5", "ATTR_4", "CSOR_5", "CSOR_1", "QUAL_2", "PERF_4", "TRUST_3",
        "SAT_2", "A_1_AGE", "QUA_7", "LIKE_2", "COMP_3", "PERF_1", "COMP_2", "LIKE_1",
        "ATTR_2", "ATTR_1", "ATTR_3", "D_4_EMPLOYMENT", "QUAL_6", "PERF_2", "CSOR_4",
        "QUAL_1", "COMP_1", "D_1_GENDER", "TRUST_2", "TRUST_1", "QUAL_4", "PERF_5",
        "D_6_INCOME",
    ];

    #[test]
    fn names_match_trained_order() {
        assert_eq!(feature_names(), TRAINED_ORDER.to_vec());
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = feature_names().into_iter().collect();
        assert_eq!(names.len(), FEATURE_COUNT);
    }

    #[test]
    fn only_csor_5_is_float() {
        let floats: Vec<&str> = FEATURE_COLUMNS
            .iter()
            .filter(|c| c.is_float())
            .map(|c| c.name())
            .collect();
        assert_eq!(floats, vec!["CSOR_5"]);
        assert_eq!(position(Column::Survey(SurveyItem::Csor5)), 10);
    }

    #[test]
    fn arrow_schema_has_expected_fields() {
        let schema = feature_schema();
        assert_eq!(schema.fields().len(), FEATURE_COUNT);
        assert_eq!(
            schema.field_with_name("CSOR_5").unwrap().data_type(),
            &DataType::Float64
        );
        assert_eq!(
            schema.field_with_name("D_6_INCOME").unwrap().data_type(),
            &DataType::Int64
        );
        assert_eq!(schema.field(0).name(), "CSOR_2");
    }

    #[test]
    fn verify_accepts_trained_order() {
        assert!(verify_feature_names(&TRAINED_ORDER[..]).is_ok());
    }

    #[test]
    fn verify_rejects_swapped_columns() {
        let mut names = TRAINED_ORDER.to_vec();
        names.swap(0, 1);
        let err = verify_feature_names(&names[..]).unwrap_err();
        assert!(matches!(err, CoreError::SchemaMismatch(_)));
        assert!(err.to_string().contains("position 0"), "{err}");
    }

    #[test]
    fn verify_rejects_wrong_count() {
        let err = verify_feature_names(&TRAINED_ORDER[..37]).unwrap_err();
        assert!(err.to_string().contains("37"), "{err}");
    }

    #[test]
    fn verify_rejects_renamed_column() {
        let mut names = TRAINED_ORDER.to_vec();
        names[17] = "QUAL_7";
        let err = verify_feature_names(&names[..]).unwrap_err();
        assert!(err.to_string().contains("position 17"), "{err}");
    }
}
