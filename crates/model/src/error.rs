//! Model error types.

use thiserror::Error;

/// Errors produced while loading or invoking the model artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Artifact file could not be read
    #[error("Failed to read model artifact '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Artifact document could not be parsed
    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// Artifact metadata is internally inconsistent
    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    /// Input vector length does not match the declared feature count
    #[error("Feature count mismatch: model expects {expected} features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    /// A feature column declared by the model is absent from the input
    #[error("Missing feature column '{0}'")]
    MissingColumn(String),

    /// Categorical value not present in the artifact's encoder
    #[error("Unknown category '{value}' for feature '{feature}'")]
    UnknownCategory { feature: String, value: String },

    /// Numeric field failed to parse
    #[error("Invalid number '{value}' for feature '{feature}'")]
    InvalidNumber { feature: String, value: String },

    /// CSV input could not be read
    #[error("Failed to parse CSV: {0}")]
    Csv(String),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
