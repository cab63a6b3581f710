use axum::extract::State;
use axum::http::StatusCode;

use super::ensure_owner;
use crate::domain::blog::models::BlogId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::middleware::RequestCancellation;
use crate::inbound::http::path::ResourceId;
use crate::inbound::http::router::AppState;

pub async fn delete_blog(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    RequestCancellation(cancel): RequestCancellation,
    ResourceId(id): ResourceId,
) -> Result<StatusCode, ApiError> {
    let blog_id = BlogId(id);
    ensure_owner(&state, blog_id, user.user_id, &cancel).await?;

    state.blog_service.delete_blog(blog_id, &cancel).await?;

    Ok(StatusCode::NO_CONTENT)
}
