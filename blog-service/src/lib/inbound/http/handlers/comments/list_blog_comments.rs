use axum::extract::State;
use axum::http::StatusCode;

use super::CommentData;
use crate::domain::blog::models::BlogId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::RequestCancellation;
use crate::inbound::http::pagination::Pagination;
use crate::inbound::http::path::ResourceId;
use crate::inbound::http::router::AppState;

pub async fn list_blog_comments(
    State(state): State<AppState>,
    RequestCancellation(cancel): RequestCancellation,
    ResourceId(blog_id): ResourceId,
    Pagination(page): Pagination,
) -> Result<ApiSuccess<Vec<CommentData>>, ApiError> {
    let comments = state
        .comment_service
        .list_blog_comments(BlogId(blog_id), page, &cancel)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        comments.iter().map(CommentData::from).collect(),
    ))
}
