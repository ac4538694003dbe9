use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid duration: {0} is not a finite number of seconds")]
    InvalidDuration(f64),
}

pub type Result<T> = std::result::Result<T, JournalError>;
