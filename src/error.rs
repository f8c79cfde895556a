use thiserror::Error;

/// Errors raised by the surfaces around the classifier (config files, batch
/// reports, the HTTP server). Classification itself never fails.
#[derive(Error, Debug)]
pub enum SignSenseError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type SsResult<T> = Result<T, SignSenseError>;
