use axum::extract::State;
use axum::http::StatusCode;

use super::ensure_owner;
use super::parse_content;
use super::CommentData;
use super::UpdateCommentRequest;
use crate::domain::comment::models::CommentId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::middleware::RequestCancellation;
use crate::inbound::http::path::ResourceId;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidatedJson;

pub async fn update_comment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    RequestCancellation(cancel): RequestCancellation,
    ResourceId(id): ResourceId,
    body: Result<ValidatedJson<UpdateCommentRequest>, ApiError>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let comment_id = CommentId(id);
    ensure_owner(&state, comment_id, user.user_id, &cancel).await?;

    let ValidatedJson(body) = body?;
    let content = parse_content(body.content)?;

    state
        .comment_service
        .update_comment(comment_id, content, &cancel)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::OK, comment.into()))
}
