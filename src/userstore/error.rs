use crate::validation::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserStoreError {
    #[error("--{0} flag has to be specified")]
    MissingArgument(&'static str),

    #[error("Operation {0} not allowed!")]
    UnsupportedOperation(String),

    #[error("File error ({}): {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Item data is not valid: {0}")]
    InvalidRecord(#[from] ValidationError),

    #[error("Item with id {0} already exists")]
    DuplicateId(String),

    #[error("Item with id {0} not found")]
    NotFound(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl UserStoreError {
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, UserStoreError>;
