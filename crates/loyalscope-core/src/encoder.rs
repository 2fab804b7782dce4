//! Feature encoding: form answers → one model input row.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array};
use arrow::record_batch::RecordBatch;
use tracing::debug;

use crate::CoreError;
use crate::demographics::CustomerProfile;
use crate::schema::{Column, FEATURE_COLUMNS, FEATURE_COUNT, feature_schema};
use crate::survey::SurveyResponses;

/// A single encoded value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Int(i64),
    Float(f64),
}

impl FeatureValue {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    pub fn as_f32(self) -> f32 {
        self.as_f64() as f32
    }
}

/// Encoded answers in [`FEATURE_COLUMNS`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [FeatureValue; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn values(&self) -> &[FeatureValue; FEATURE_COUNT] {
        &self.values
    }

    /// Value of one column.
    pub fn get(&self, column: Column) -> FeatureValue {
        self.values[crate::schema::position(column)]
    }

    /// The row as `f32`, the element type of the ONNX input tensor.
    pub fn to_f32_row(&self) -> Vec<f32> {
        self.values.iter().map(|v| v.as_f32()).collect()
    }

    /// The row as a one-row Arrow batch under [`feature_schema`].
    pub fn to_record_batch(&self) -> Result<RecordBatch, CoreError> {
        let columns: Vec<ArrayRef> = self
            .values
            .iter()
            .map(|v| match *v {
                FeatureValue::Int(i) => Arc::new(Int64Array::from(vec![i])) as ArrayRef,
                FeatureValue::Float(f) => Arc::new(Float64Array::from(vec![f])) as ArrayRef,
            })
            .collect();
        Ok(RecordBatch::try_new(Arc::new(feature_schema()), columns)?)
    }
}

/// Encode one customer's answers.
///
/// Categorical answers become their ordinal codes; Likert answers pass
/// through unchanged, with `CSOR_5` carried as a float of the same value.
/// Every unanswered field is reported in a single `IncompleteInput`.
pub fn encode(
    profile: &CustomerProfile,
    responses: &SurveyResponses,
) -> Result<FeatureVector, CoreError> {
    let mut values = [FeatureValue::Int(0); FEATURE_COUNT];
    let mut missing = Vec::new();

    for (slot, column) in values.iter_mut().zip(FEATURE_COLUMNS) {
        let raw = match column {
            Column::Demographic(field) => profile.code(field).map(i64::from),
            Column::Survey(item) => responses.get(item).map(|a| i64::from(a.value())),
        };
        match raw {
            Some(v) if column.is_float() => *slot = FeatureValue::Float(v as f64),
            Some(v) => *slot = FeatureValue::Int(v),
            None => missing.push(column.name()),
        }
    }

    if !missing.is_empty() {
        debug!(missing = missing.len(), "submission incomplete");
        return Err(CoreError::IncompleteInput { missing });
    }

    Ok(FeatureVector { values })
}
