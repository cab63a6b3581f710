use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::blog::errors::BlogContentError;
use crate::domain::blog::errors::BlogError;
use crate::domain::blog::errors::BlogTitleError;
use crate::domain::user::models::UserId;

/// Blog post entity.
///
/// Owned by the user that created it; the owner never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: BlogId,
    pub user_id: UserId,
    pub title: BlogTitle,
    pub content: BlogContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Blog post ready to be persisted; the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub user_id: UserId,
    pub title: BlogTitle,
    pub content: BlogContent,
}

/// Blog unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlogId(pub i64);

impl BlogId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Blog title value type
///
/// Trimmed, non-empty and at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogTitle(String);

impl BlogTitle {
    const MAX_LENGTH: usize = 100;

    /// Create a new valid title.
    ///
    /// # Errors
    /// * `Empty` - Nothing left after trimming
    /// * `TooLong` - Longer than 100 characters
    pub fn new(title: String) -> Result<Self, BlogTitleError> {
        let title = title.trim();
        let length = title.chars().count();

        if length == 0 {
            Err(BlogTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(BlogTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Blog body value type, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogContent(String);

impl BlogContent {
    pub fn new(content: String) -> Result<Self, BlogContentError> {
        let content = content.trim();

        if content.is_empty() {
            Err(BlogContentError::Empty)
        } else {
            Ok(Self(content.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Title and content for creating or replacing a blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: BlogTitle,
    pub content: BlogContent,
}

impl BlogDraft {
    /// # Errors
    /// * `InvalidTitle` - Title empty after trimming or too long
    /// * `InvalidContent` - Content empty after trimming
    pub fn new(title: String, content: String) -> Result<Self, BlogError> {
        Ok(Self {
            title: BlogTitle::new(title)?,
            content: BlogContent::new(content)?,
        })
    }
}
