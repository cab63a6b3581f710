use axum::extract::State;
use axum::http::StatusCode;

use super::CommentData;
use crate::domain::comment::models::CommentId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::RequestCancellation;
use crate::inbound::http::path::ResourceId;
use crate::inbound::http::router::AppState;

pub async fn get_comment(
    State(state): State<AppState>,
    RequestCancellation(cancel): RequestCancellation,
    ResourceId(id): ResourceId,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    state
        .comment_service
        .get_comment(CommentId(id), &cancel)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::OK, comment.into()))
}
