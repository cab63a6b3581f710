use axum::extract::State;
use axum::http::StatusCode;

use super::BlogData;
use crate::domain::blog::models::BlogId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::RequestCancellation;
use crate::inbound::http::path::ResourceId;
use crate::inbound::http::router::AppState;

pub async fn get_blog(
    State(state): State<AppState>,
    RequestCancellation(cancel): RequestCancellation,
    ResourceId(id): ResourceId,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    state
        .blog_service
        .get_blog(BlogId(id), &cancel)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::OK, blog.into()))
}
