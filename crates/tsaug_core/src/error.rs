//! Error types for tsaug_core.

use thiserror::Error;

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors surfaced by the augmentation engine.
///
/// Construction and configuration errors are raised before any mutation
/// takes place; batch operations either commit fully or leave their input
/// untouched.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Feature rows and labels disagree in count, or rows disagree in length.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Invalid or incompatible augmenter parameters, including unknown
    /// enumeration values and out-of-range probabilities.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A row-length-changing operation produced rows of unequal length, or
    /// was applied to data too short for its configured size.
    #[error("Dimension error: {0}")]
    Dimension(String),

    /// Per-sample pipelining was requested with an incompatible stage.
    #[error("Stage '{stage}' does not support per-sample pipelining")]
    PipelineCompatibility {
        /// Name of the offending pipeline stage.
        stage: String,
    },

    /// An operation that requires non-empty input was given a zero-length
    /// sequence.
    #[error("Empty sequence: {0}")]
    EmptySequence(String),
}
