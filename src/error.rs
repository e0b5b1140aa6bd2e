use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Classifier has not been trained or loaded")]
    NotTrained,

    #[error("Malformed Feature Row: {0}")]
    MalformedFeatures(String),
}

pub type MfResult<T> = Result<T, MatchError>;

/// Keeps the io error kind and prefixes the message with the path.
pub fn io_at(path: &std::path::Path, err: std::io::Error) -> MatchError {
    MatchError::Io(std::io::Error::new(
        err.kind(),
        format!("'{}': {}", path.display(), err),
    ))
}
