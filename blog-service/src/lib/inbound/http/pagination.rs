use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Query;
use axum::http::request::Parts;
use serde::Deserialize;

use crate::domain::page::PageRequest;

/// `?page=&limit=` query parameters.
///
/// Parsing is lenient: missing or unparsable values fall back to page 1 and
/// the default page size, and out-of-range values are clamped by
/// [`PageRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination(pub PageRequest);

#[derive(Debug, Default, Deserialize)]
struct PaginationQuery {
    page: Option<String>,
    limit: Option<String>,
}

impl PaginationQuery {
    fn into_page_request(self) -> PageRequest {
        let page = parse_or(self.page, 1);
        let limit = parse_or(self.limit, PageRequest::DEFAULT_LIMIT);

        PageRequest::new(page, limit)
    }
}

fn parse_or(value: Option<String>, default: i64) -> i64 {
    value
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<PaginationQuery>::try_from_uri(&parts.uri)
            .map(|Query(query)| query)
            .unwrap_or_default();

        Ok(Pagination(query.into_page_request()))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn pagination_for(uri: &str) -> PageRequest {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        let Pagination(page) = Pagination::from_request_parts(&mut parts, &()).await.unwrap();
        page
    }

    #[tokio::test]
    async fn test_defaults_when_absent() {
        assert_eq!(pagination_for("/blogs").await, PageRequest::new(1, 10));
    }

    #[tokio::test]
    async fn test_explicit_values() {
        let page = pagination_for("/blogs?page=3&limit=5").await;
        assert_eq!(page.limit, 5);
        assert_eq!(page.offset, 10);
    }

    #[tokio::test]
    async fn test_garbage_falls_back_to_defaults() {
        assert_eq!(
            pagination_for("/blogs?page=abc&limit=1000").await,
            PageRequest::new(1, 10)
        );
        assert_eq!(
            pagination_for("/blogs?page=-2&limit=0").await,
            PageRequest::new(1, 10)
        );
    }
}
