use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashcrackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("No key terms provided")]
    NoKeyTerms,

    #[error("Key term {0} is empty")]
    EmptyKeyTerm(usize),

    #[error("Too many key terms: {0}. At most {1} are supported")]
    TooManyKeyTerms(usize, usize),

    #[error("Hash type '{0}' is invalid. Expected sha256 or md5")]
    UnsupportedAlgorithm(String),

    #[error("Maximum must be over 0")]
    InvalidMaximum,

    #[error("Invalid target digest: {0}")]
    InvalidDigest(String),

    #[error("Failed to load input file {}: {source}", .path.display())]
    Preload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HashcrackError>;
