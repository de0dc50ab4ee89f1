use rust_decimal::Decimal;
use std::path::PathBuf;

/// Why an attribute scale is not usable.
///
/// Kept separate from [`KaffaError`] so callers that validate scales inside a
/// larger structure (defect configurations prefix these with the defect name)
/// can reuse the bare message.
#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    #[error("minimum ({min}) must be less than maximum ({max})")]
    InvertedBounds { min: Decimal, max: Decimal },

    #[error("increment must be greater than zero (got {0})")]
    NonPositiveIncrement(Decimal),

    #[error("range {min}-{max} is not evenly divisible by increment {increment}")]
    UnevenSteps {
        min: Decimal,
        max: Decimal,
        increment: Decimal,
    },

    #[error("wording scale must have at least one option")]
    EmptyOptions,

    #[error("options '{a}' and '{b}' share display order {order}")]
    DuplicateDisplayOrder { a: String, b: String, order: i32 },

    #[error("options '{a}' and '{b}' share value {value} (ambiguous severity mapping)")]
    DuplicateValue { a: String, b: String, value: Decimal },
}

#[derive(Debug, thiserror::Error)]
pub enum KaffaError {
    #[error("invalid scale: {0}")]
    Scale(#[from] ScaleError),

    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("failed to load configuration from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
