use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Path;
use axum::http::request::Parts;

use crate::inbound::http::handlers::ApiError;

/// Numeric `:id` path segment; anything else is `400 {"error": "invalid id"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest("invalid id".to_string()))?;

        raw.parse::<i64>()
            .map(ResourceId)
            .map_err(|_| ApiError::BadRequest("invalid id".to_string()))
    }
}
