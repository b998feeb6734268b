use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the export pipeline.
///
/// Per-row validation failures are deliberately absent: malformed rows are
/// dropped during filtering, never raised. Only whole-stage failures become
/// errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("data source unavailable: {0}")]
    DataSource(String),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no valid networks remain after filtering")]
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, PipelineError>;
