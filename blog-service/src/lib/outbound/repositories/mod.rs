pub mod blog;
pub mod comment;
pub mod user;

pub use blog::PostgresBlogRepository;
pub use comment::PostgresCommentRepository;
pub use user::PostgresUserRepository;
