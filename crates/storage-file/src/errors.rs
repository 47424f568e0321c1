//! Errors raised while loading or persisting the data file.

use balancebook_core::errors::{DatabaseError, Error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileStorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Data file {path} is not valid: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("File task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<FileStorageError> for Error {
    fn from(err: FileStorageError) -> Self {
        match err {
            FileStorageError::Io { .. } => {
                Error::Database(DatabaseError::ConnectionFailed(err.to_string()))
            }
            FileStorageError::Corrupt { .. }
            | FileStorageError::Serialize(_)
            | FileStorageError::Task(_) => {
                Error::Database(DatabaseError::Internal(err.to_string()))
            }
        }
    }
}
