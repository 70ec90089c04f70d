//! Error types for the repair engine.

/// Errors that can occur while loading, repairing or writing a batch.
#[derive(Debug, thiserror::Error)]
pub enum RepairError {
    /// Database error (opening or talking to a database file).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO error (reading predictions, writing output).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Predictions and schema instances are not paired one-to-one.
    #[error("Got {predictions} predictions but {instances} schema instances")]
    LengthMismatch {
        /// Number of candidate statements.
        predictions: usize,
        /// Number of schema instances.
        instances: usize,
    },
}

/// Result type for repair operations.
pub type Result<T> = std::result::Result<T, RepairError>;
