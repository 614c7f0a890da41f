//! Error types for persistence sinks.

use thiserror::Error;

/// Errors raised while persisting a batch.
///
/// # Variants
/// - `Io`: Underlying file I/O failure
/// - `Parquet`: Parquet encoding or schema failure
/// - `Json`: JSON serialisation failure
/// - `SchemaMismatch`: Writer and schema column counts diverged
#[derive(Error, Debug)]
pub enum SinkError {
    /// Underlying file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parquet encoding or schema failure.
    #[error("parquet error: {0}")]
    Parquet(#[from] ::parquet::errors::ParquetError),

    /// JSON serialisation failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writer and schema column counts diverged.
    #[error("parquet schema mismatch: expected another column")]
    SchemaMismatch,
}
