//! Model manifest: the metadata shipped next to the classifier artifact.
//!
//! The manifest records the feature order the model was trained on. It is
//! checked once, at load time, against the encoder's column constant; a
//! model whose manifest disagrees is never used.

use std::path::Path;

use loyalscope_core::{CoreError, feature_names, verify_feature_names};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ClassifierError;

pub const MANIFEST_FILE: &str = "manifest.json";

/// Class index order of every loyalty output.
pub const CLASS_LABELS: [&str; 3] = ["Low", "Neutral", "High"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelManifest {
    pub model_version: String,
    /// Training-time column order.
    pub feature_names: Vec<String>,
    /// Name of the model's input tensor. Defaults to the first input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_name: Option<String>,
    /// Name of the label output. Defaults to the first output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_labels: Option<Vec<String>>,
}

impl ModelManifest {
    /// A manifest describing the encoder's own column order.
    pub fn for_current_schema(model_version: impl Into<String>) -> Self {
        Self {
            model_version: model_version.into(),
            feature_names: feature_names().into_iter().map(String::from).collect(),
            input_name: None,
            output_name: None,
            class_labels: Some(CLASS_LABELS.iter().map(|s| s.to_string()).collect()),
        }
    }

    /// Read a manifest file. A missing or malformed file makes the classifier unavailable.
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let unavailable = |reason: String| ClassifierError::Unavailable {
            path: path.to_path_buf(),
            reason,
        };

        let text = std::fs::read_to_string(path)
            .map_err(|e| unavailable(format!("reading manifest: {e}")))?;
        let manifest: Self = serde_json::from_str(&text)
            .map_err(|e| unavailable(format!("parsing manifest: {e}")))?;

        info!(
            version = %manifest.model_version,
            features = manifest.feature_names.len(),
            "loaded model manifest"
        );
        Ok(manifest)
    }

    /// Check the declared feature order and class labels against the encoder.
    pub fn verify(&self) -> Result<(), ClassifierError> {
        verify_feature_names(self.feature_names.as_slice()).map_err(|e| match e {
            CoreError::SchemaMismatch(detail) => ClassifierError::SchemaMismatch(detail),
            other => ClassifierError::Input(other),
        })?;

        if let Some(labels) = &self.class_labels
            && labels.iter().map(String::as_str).ne(CLASS_LABELS)
        {
            return Err(ClassifierError::SchemaMismatch(format!(
                "class labels {labels:?}, expected {CLASS_LABELS:?}"
            )));
        }

        Ok(())
    }
}
