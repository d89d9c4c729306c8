// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NlpError>;

#[derive(Error, Debug)]
pub enum NlpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Document store error: {0}")]
    Storage(String),

    #[error("Vectorization error: {0}")]
    Vectorize(String),

    #[error("Corpus file {path} could not be loaded: {source}")]
    Corpus {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),
}
