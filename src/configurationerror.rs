use thiserror::Error;

use crate::shapeerror::ShapeError;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFound(String),

    #[error("vulnerability function '{0}' is defined more than once")]
    DuplicateName(String),

    #[error("vulnerability function '{name}' is invalid: {source}")]
    InvalidFunction {
        name: String,
        #[source]
        source: ShapeError,
    },
}
