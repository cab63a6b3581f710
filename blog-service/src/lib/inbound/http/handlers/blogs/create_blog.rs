use axum::extract::State;
use axum::http::StatusCode;

use super::BlogData;
use super::BlogRequest;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::middleware::RequestCancellation;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidatedJson;

pub async fn create_blog(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    RequestCancellation(cancel): RequestCancellation,
    ValidatedJson(body): ValidatedJson<BlogRequest>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let draft = body.try_into_draft()?;

    state
        .blog_service
        .create_blog(user.user_id, draft, &cancel)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::CREATED, blog.into()))
}
