pub mod handlers;
pub mod middleware;
pub mod pagination;
pub mod path;
pub mod router;
pub mod validation;
