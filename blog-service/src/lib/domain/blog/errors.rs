use thiserror::Error;

use crate::domain::blog::models::BlogId;
use crate::domain::cancellation::Cancelled;

/// Error for BlogTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogTitleError {
    #[error("Title is empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for BlogContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogContentError {
    #[error("Content is empty")]
    Empty,
}

/// Top-level error for all blog operations
#[derive(Debug, Clone, Error)]
pub enum BlogError {
    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] BlogTitleError),

    #[error("Invalid content: {0}")]
    InvalidContent(#[from] BlogContentError),

    // Domain-level errors
    #[error("Blog not found: {0}")]
    NotFound(BlogId),

    #[error(transparent)]
    Cancelled(#[from] Cancelled),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
