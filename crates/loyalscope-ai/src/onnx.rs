//! ONNX Runtime loyalty classifier.
//!
//! The model directory must contain `model.onnx` and `manifest.json`. The
//! manifest is verified against the encoder's column order before the
//! session is built, so a stale artifact fails at startup instead of
//! producing silently wrong predictions.

use std::path::Path;
use std::sync::Mutex;

use loyalscope_core::{FEATURE_COUNT, FeatureVector};
use ort::session::Session;
use ort::value::Tensor;
use tracing::{debug, info};

use crate::classifier::{LoyaltyClassifier, classes_from_output};
use crate::manifest::{MANIFEST_FILE, ModelManifest};
use crate::ClassifierError;

pub const MODEL_FILE: &str = "model.onnx";

/// Multi-output loyalty classifier backed by an ONNX session.
pub struct OnnxClassifier {
    // Running a session needs exclusive access.
    session: Mutex<Session>,
    manifest: ModelManifest,
    input_name: String,
}

impl OnnxClassifier {
    /// Load and verify a classifier from `model_dir`.
    pub fn load(model_dir: &Path) -> Result<Self, ClassifierError> {
        let model_path = model_dir.join(MODEL_FILE);
        if !model_path.exists() {
            return Err(ClassifierError::Unavailable {
                path: model_path,
                reason: format!("{MODEL_FILE} not found"),
            });
        }

        let manifest = ModelManifest::load(&model_dir.join(MANIFEST_FILE))?;
        manifest.verify()?;

        let unavailable = |reason: String| ClassifierError::Unavailable {
            path: model_path.clone(),
            reason,
        };
        let session = Session::builder()
            .map_err(|e| unavailable(e.to_string()))?
            .commit_from_file(&model_path)
            .map_err(|e| unavailable(e.to_string()))?;

        let input_name = match &manifest.input_name {
            Some(name) => name.clone(),
            None => session
                .inputs()
                .first()
                .map(|input| input.name().to_string())
                .ok_or_else(|| unavailable("model declares no inputs".into()))?,
        };

        info!(
            version = %manifest.model_version,
            input = %input_name,
            model = %model_path.display(),
            "loaded loyalty classifier"
        );
        Ok(Self {
            session: Mutex::new(session),
            manifest,
            input_name,
        })
    }
}

impl LoyaltyClassifier for OnnxClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<[i64; 3], ClassifierError> {
        let row = features.to_f32_row();
        let shape = [1i64, FEATURE_COUNT as i64];
        let tensor = Tensor::from_array((shape, row.into_boxed_slice()))
            .map_err(|e| ClassifierError::Inference(format!("build input tensor: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| ClassifierError::Inference("session lock poisoned".into()))?;

        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => tensor])
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let value = match &self.manifest.output_name {
            Some(name) => outputs.get(name.as_str()).ok_or_else(|| {
                ClassifierError::InvalidOutput(format!("model has no output named {name:?}"))
            })?,
            None => &outputs[0],
        };

        let (out_shape, data) = value
            .try_extract_tensor::<i64>()
            .map_err(|e| ClassifierError::InvalidOutput(e.to_string()))?;
        let dims: &[i64] = out_shape;
        debug!(?dims, ?data, "classifier output");

        classes_from_output(dims, data)
    }

    fn model_version(&self) -> &str {
        &self.manifest.model_version
    }
}
