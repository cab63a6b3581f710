use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::blog::models::BlogId;
use crate::domain::comment::errors::CommentContentError;
use crate::domain::user::models::UserId;

/// Comment entity.
///
/// Belongs to one blog post and is owned by the user that wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub blog_id: BlogId,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}

/// Comment ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub user_id: UserId,
    pub blog_id: BlogId,
    pub content: CommentContent,
}

/// Comment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Comment content value object with validation.
///
/// Ensures content is non-empty after trimming and within 2000 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    const MAX_LENGTH: usize = 2000;

    /// Create a new validated comment content.
    ///
    /// # Errors
    /// * `Empty` - Nothing left after trimming
    /// * `TooLong` - Content exceeds 2000 characters
    pub fn new(content: String) -> Result<Self, CommentContentError> {
        let content = content.trim();
        let length = content.chars().count();

        if length == 0 {
            Err(CommentContentError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(CommentContentError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(content.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
