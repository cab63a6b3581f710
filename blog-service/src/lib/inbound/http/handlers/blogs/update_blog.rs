use axum::extract::State;
use axum::http::StatusCode;

use super::ensure_owner;
use super::BlogData;
use super::BlogRequest;
use crate::domain::blog::models::BlogId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::middleware::RequestCancellation;
use crate::inbound::http::path::ResourceId;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidatedJson;

/// Ownership is checked before the body is validated.
pub async fn update_blog(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    RequestCancellation(cancel): RequestCancellation,
    ResourceId(id): ResourceId,
    body: Result<ValidatedJson<BlogRequest>, ApiError>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let blog_id = BlogId(id);
    ensure_owner(&state, blog_id, user.user_id, &cancel).await?;

    let ValidatedJson(body) = body?;
    let draft = body.try_into_draft()?;

    state
        .blog_service
        .update_blog(blog_id, draft, &cancel)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::OK, blog.into()))
}
