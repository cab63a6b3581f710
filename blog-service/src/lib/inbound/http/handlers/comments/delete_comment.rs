use axum::extract::State;
use axum::http::StatusCode;

use super::ensure_owner;
use crate::domain::comment::models::CommentId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::middleware::RequestCancellation;
use crate::inbound::http::path::ResourceId;
use crate::inbound::http::router::AppState;

pub async fn delete_comment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    RequestCancellation(cancel): RequestCancellation,
    ResourceId(id): ResourceId,
) -> Result<StatusCode, ApiError> {
    let comment_id = CommentId(id);
    ensure_owner(&state, comment_id, user.user_id, &cancel).await?;

    state
        .comment_service
        .delete_comment(comment_id, &cancel)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
