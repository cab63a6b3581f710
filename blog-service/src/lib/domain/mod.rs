pub mod blog;
pub mod cancellation;
pub mod comment;
pub mod page;
pub mod user;
