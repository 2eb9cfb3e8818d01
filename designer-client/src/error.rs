use layout_designer::{ElementId, StorageError, ValidationError};
use thiserror::Error;

/// Errors reported back to the person at the prompt.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No element with id {0}")]
    UnknownElement(ElementId),

    #[error("No element is selected")]
    NothingSelected,
}

pub type Result<T> = std::result::Result<T, ClientError>;
