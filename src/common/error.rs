use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum QRError {
    #[error("Empty content")]
    EmptyContent,
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Storage backend failure: {0}")]
    Storage(String),
    #[error("Malformed history record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

pub type QRResult<T> = Result<T, QRError>;
