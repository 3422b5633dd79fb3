use thiserror::Error;

/// Failures that abort the whole batch run. Per-record problems never end up
/// here; they are repaired or counted by the cleaning stage instead.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input is missing required column '{0}'")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
