//! Machine-readable diagnosis report.

use chrono::{DateTime, SecondsFormat, Utc};
use loyalscope_ai::Diagnosis;
use loyalscope_core::{Advisory, Assessment};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
    /// Submission file the report was produced from.
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub assessed_at: String,
    pub model_version: String,
    #[serde(flatten)]
    pub assessment: Assessment,
    pub advisory: Advisory,
}

impl Report {
    pub fn new(
        source: String,
        id: Option<String>,
        diagnosis: Diagnosis,
        assessed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            source,
            id,
            assessed_at: assessed_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            model_version: diagnosis.model_version,
            assessment: diagnosis.assessment,
            advisory: diagnosis.advisory,
        }
    }
}
