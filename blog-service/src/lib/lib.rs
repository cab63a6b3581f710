pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::blog::service::BlogService;
pub use domain::comment::service::CommentService;
pub use domain::user::service::AuthService;
pub use outbound::repositories;
