use axum::extract::State;
use axum::http::StatusCode;

use super::parse_content;
use super::CommentData;
use super::CreateCommentRequest;
use crate::domain::blog::models::BlogId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::middleware::RequestCancellation;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidatedJson;

pub async fn create_comment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    RequestCancellation(cancel): RequestCancellation,
    ValidatedJson(body): ValidatedJson<CreateCommentRequest>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let content = parse_content(body.content)?;

    state
        .comment_service
        .create_comment(user.user_id, BlogId(body.blog_id), content, &cancel)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::CREATED, comment.into()))
}
