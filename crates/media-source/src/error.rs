use thiserror::Error;

/// Errors produced while deriving a chunk stream from an origin.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(usize),
}

impl SourceError {
    pub fn fetch(reason: impl Into<String>) -> Self {
        SourceError::Fetch(reason.into())
    }
}
