use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch data: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Failed to read data source {source_id}: {message}")]
    Source { source_id: String, message: String },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl ProcessingError {
    /// True for errors raised while retrieving the raw dataset.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            ProcessingError::Fetch(_) | ProcessingError::Source { .. }
        )
    }
}
