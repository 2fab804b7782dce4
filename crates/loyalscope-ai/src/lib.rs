//! Classifier boundary: the model manifest, the ONNX Runtime adapter and the
//! diagnostic pipeline that drives a classifier from form answers.

mod classifier;
mod error;
pub mod manifest;
pub mod pipeline;

pub use classifier::{LoyaltyClassifier, classes_from_output};
pub use error::ClassifierError;
pub use manifest::ModelManifest;
pub use pipeline::{Diagnosis, LoyaltyPipeline};

#[cfg(feature = "onnx")]
mod onnx;
#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;
