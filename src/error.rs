use std::path::PathBuf;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Backing resource could not be read, written or parsed.
    #[error("Failed to access {path}: {message}")]
    Persistence { path: PathBuf, message: String },

    #[error("Templates file not found: {0}")]
    NotFound(PathBuf),

    #[error("No templates to export")]
    EmptySource(PathBuf),

    /// The user backed out of choosing a file. Not a failure.
    #[error("{0} cancelled")]
    Cancelled(&'static str),

    #[error("Invalid template file {path}: {source}")]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        StoreError::Persistence {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, err: serde_json::Error) -> Self {
        StoreError::Persistence {
            path: path.into(),
            message: format!("invalid JSON: {}", err),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, StoreError::Cancelled(_))
    }
}
