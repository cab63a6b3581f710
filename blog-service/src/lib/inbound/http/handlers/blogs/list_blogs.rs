use axum::extract::State;
use axum::http::StatusCode;

use super::BlogData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::RequestCancellation;
use crate::inbound::http::pagination::Pagination;
use crate::inbound::http::router::AppState;

pub async fn list_blogs(
    State(state): State<AppState>,
    RequestCancellation(cancel): RequestCancellation,
    Pagination(page): Pagination,
) -> Result<ApiSuccess<Vec<BlogData>>, ApiError> {
    let blogs = state.blog_service.list_blogs(page, &cancel).await?;

    tracing::debug!(blog_count = blogs.len(), "Blogs listed");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        blogs.iter().map(BlogData::from).collect(),
    ))
}
