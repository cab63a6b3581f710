use thiserror::Error;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogId;
use crate::domain::cancellation::Cancelled;
use crate::domain::comment::models::CommentId;

/// Error for CommentContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentContentError {
    #[error("Comment content is empty")]
    Empty,

    #[error("Comment content too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all comment operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    #[error("Invalid comment content: {0}")]
    InvalidContent(#[from] CommentContentError),

    // Domain-level errors
    #[error("Comment not found: {0}")]
    NotFound(CommentId),

    #[error("Blog not found: {0}")]
    BlogNotFound(BlogId),

    #[error(transparent)]
    Cancelled(#[from] Cancelled),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Blog lookups made on behalf of comment operations.
impl From<BlogError> for CommentError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::NotFound(id) => CommentError::BlogNotFound(id),
            BlogError::Cancelled(c) => CommentError::Cancelled(c),
            BlogError::DatabaseError(e) => CommentError::DatabaseError(e),
            other => CommentError::Unknown(other.to_string()),
        }
    }
}
