use std::path::PathBuf;

use loyalscope_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier unavailable ({}): {reason}", .path.display())]
    Unavailable { path: PathBuf, reason: String },

    #[error("feature schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("invalid classifier output: {0}")]
    InvalidOutput(String),

    #[error(transparent)]
    Input(#[from] CoreError),
}
