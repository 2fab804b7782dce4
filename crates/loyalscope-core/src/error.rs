use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("incomplete input: missing {}", .missing.join(", "))]
    IncompleteInput { missing: Vec<&'static str> },

    #[error("{item} answer {value} is outside the Likert range 1..=7")]
    LikertOutOfRange { item: String, value: i64 },

    #[error("answer {0} is outside the Likert range 1..=7")]
    InvalidLikert(i64),

    #[error("unknown {field} option: {value}")]
    UnknownOption { field: &'static str, value: String },

    #[error("unknown survey item: {0}")]
    UnknownItem(String),

    #[error("survey item {item} answered twice (as {first} and {second})")]
    DuplicateItem {
        item: &'static str,
        first: String,
        second: String,
    },

    #[error("feature schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("unknown loyalty class index {0} (expected 0, 1 or 2)")]
    UnknownClass(i64),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
