use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::blogs::create_blog::create_blog;
use super::handlers::blogs::delete_blog::delete_blog;
use super::handlers::blogs::get_blog::get_blog;
use super::handlers::blogs::list_blogs::list_blogs;
use super::handlers::blogs::update_blog::update_blog;
use super::handlers::comments::create_comment::create_comment;
use super::handlers::comments::delete_comment::delete_comment;
use super::handlers::comments::get_comment::get_comment;
use super::handlers::comments::list_blog_comments::list_blog_comments;
use super::handlers::comments::update_comment::update_comment;
use super::handlers::health::healthz;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::ApiError;
use super::middleware::authenticate as auth_middleware;
use super::middleware::request_context;
use crate::domain::blog::ports::BlogServicePort;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::user::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub blog_service: Arc<dyn BlogServicePort>,
    pub comment_service: Arc<dyn CommentServicePort>,
    pub authenticator: Arc<Authenticator>,
    /// Parent of every request's cancellation token; cancelled on shutdown.
    pub shutdown: CancellationToken,
    pub request_timeout: Duration,
}

/// Limits applied to every request.
#[derive(Debug, Clone, Copy)]
pub struct HttpLimits {
    pub body_limit_bytes: usize,
    pub request_timeout: Duration,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            body_limit_bytes: 1024 * 1024,
            request_timeout: Duration::from_secs(30),
        }
    }
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    blog_service: Arc<dyn BlogServicePort>,
    comment_service: Arc<dyn CommentServicePort>,
    authenticator: Arc<Authenticator>,
    shutdown: CancellationToken,
    limits: HttpLimits,
) -> Router {
    let state = AppState {
        auth_service,
        blog_service,
        comment_service,
        authenticator,
        shutdown,
        request_timeout: limits.request_timeout,
    };

    let public_routes = Router::new()
        .route("/healthz", get(healthz))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/blogs", get(list_blogs))
        .route("/blogs/:id", get(get_blog))
        .route("/blogs/:id/comments", get(list_blog_comments))
        .route("/comments/:id", get(get_comment));

    let protected_routes = Router::new()
        .route("/blogs", post(create_blog))
        .route("/blogs/:id", put(update_blog).delete(delete_blog))
        .route("/comments", post(create_comment))
        .route("/comments/:id", put(update_comment).delete(delete_comment))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span so bearer tokens never reach the logs.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(route_not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            request_context,
        ))
        .layer(DefaultBodyLimit::max(limits.body_limit_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(CorsLayer::permissive())
        .layer(trace_layer)
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("route not found".to_string())
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::InternalServerError(format!("handler panicked: {}", detail)).into_response()
}
