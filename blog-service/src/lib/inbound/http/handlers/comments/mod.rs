use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::models::CommentId;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::FieldErrors;
use crate::inbound::http::validation::Rule;
use crate::inbound::http::validation::Validate;
use crate::inbound::http::validation::Validator;

pub mod create_comment;
pub mod delete_comment;
pub mod get_comment;
pub mod list_blog_comments;
pub mod update_comment;

const CONTENT_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(2000)];

/// HTTP request body for adding a comment to a blog post
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateCommentRequest {
    blog_id: i64,
    content: String,
}

impl Validate for CreateCommentRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .check("blog_id", self.blog_id > 0, "is required")
            .field("content", &self.content, CONTENT_RULES)
            .finish()
    }
}

/// HTTP request body for editing a comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateCommentRequest {
    content: String,
}

impl Validate for UpdateCommentRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .field("content", &self.content, CONTENT_RULES)
            .finish()
    }
}

fn parse_content(content: String) -> Result<CommentContent, ApiError> {
    CommentContent::new(content)
        .map_err(CommentError::from)
        .map_err(ApiError::from)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentData {
    pub id: i64,
    pub user_id: i64,
    pub blog_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.as_i64(),
            user_id: comment.user_id.as_i64(),
            blog_id: comment.blog_id.as_i64(),
            content: comment.content.as_str().to_string(),
            created_at: comment.created_at,
        }
    }
}

/// Fails with 404 if the comment is missing and 403 if `user_id` did not write it.
async fn ensure_owner(
    state: &AppState,
    id: CommentId,
    user_id: UserId,
    cancel: &CancellationToken,
) -> Result<(), ApiError> {
    if state.comment_service.is_owner(id, user_id, cancel).await? {
        Ok(())
    } else {
        tracing::warn!(comment_id = %id, user_id = %user_id, "Comment modification forbidden");
        Err(ApiError::Forbidden(
            "you are not allowed to modify this comment".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_blog_and_content() {
        let body: CreateCommentRequest = serde_json::from_str("{}").unwrap();
        let errors = body.validate().unwrap_err();

        assert_eq!(errors.get("blog_id"), Some("is required"));
        assert_eq!(errors.get("content"), Some("is required"));
    }

    #[test]
    fn test_content_length_limit() {
        let body = UpdateCommentRequest {
            content: "x".repeat(2001),
        };

        assert_eq!(
            body.validate().unwrap_err().get("content"),
            Some("must be at most 2000 characters")
        );
    }
}
