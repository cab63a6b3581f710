use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogDraft;
use crate::domain::blog::models::BlogId;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::FieldErrors;
use crate::inbound::http::validation::Rule;
use crate::inbound::http::validation::Validate;
use crate::inbound::http::validation::Validator;

pub mod create_blog;
pub mod delete_blog;
pub mod get_blog;
pub mod list_blogs;
pub mod update_blog;

/// HTTP request body for creating or replacing a blog post
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BlogRequest {
    title: String,
    content: String,
}

impl BlogRequest {
    fn try_into_draft(self) -> Result<BlogDraft, ApiError> {
        Ok(BlogDraft::new(self.title, self.content)?)
    }
}

impl Validate for BlogRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .field(
                "title",
                &self.title,
                &[Rule::Required, Rule::MinLength(3), Rule::MaxLength(100)],
            )
            .field(
                "content",
                &self.content,
                &[Rule::Required, Rule::MinLength(10)],
            )
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogData {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Blog> for BlogData {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id.as_i64(),
            user_id: blog.user_id.as_i64(),
            title: blog.title.as_str().to_string(),
            content: blog.content.as_str().to_string(),
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}

/// Fails with 404 if the blog is missing and 403 if `user_id` does not own it.
async fn ensure_owner(
    state: &AppState,
    id: BlogId,
    user_id: UserId,
    cancel: &CancellationToken,
) -> Result<(), ApiError> {
    if state.blog_service.is_owner(id, user_id, cancel).await? {
        Ok(())
    } else {
        tracing::warn!(blog_id = %id, user_id = %user_id, "Blog modification forbidden");
        Err(ApiError::Forbidden(
            "you are not allowed to modify this blog".to_string(),
        ))
    }
}
