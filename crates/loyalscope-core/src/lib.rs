//! Core types for Loyalscope: survey data model, the classifier's feature
//! contract, feature encoding, and interpretation of loyalty predictions.

pub mod advisory;
pub mod demographics;
pub mod encoder;
mod error;
pub mod interpret;
pub mod schema;
pub mod submission;
pub mod survey;

pub use advisory::{Advisory, ChainState, TemplateId};
pub use demographics::{Categorical, CustomerProfile, Demographic};
pub use encoder::{FeatureValue, FeatureVector, encode};
pub use error::CoreError;
pub use interpret::{
    Assessment, Dimension, LevelCounts, LoyaltyLevel, PredictionResult, RiskTier, interpret,
};
pub use schema::{
    FEATURE_COLUMNS, FEATURE_COUNT, feature_names, feature_schema, verify_feature_names,
};
pub use submission::Submission;
pub use survey::{Likert, SurveyItem, SurveyResponses};
