use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogDraft;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::NewBlog;
use crate::domain::page::PageRequest;
use crate::domain::user::models::UserId;

/// Port for blog domain service operations.
#[async_trait]
pub trait BlogServicePort: Send + Sync + 'static {
    /// Create a blog post owned by `owner`.
    ///
    /// # Errors
    /// * `Cancelled` - Cancellation was requested first
    /// * `DatabaseError` - Database operation failed
    async fn create_blog(
        &self,
        owner: UserId,
        draft: BlogDraft,
        cancel: &CancellationToken,
    ) -> Result<Blog, BlogError>;

    /// Retrieve a live (not deleted) blog post.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist or was deleted
    /// * `DatabaseError` - Database operation failed
    async fn get_blog(&self, id: BlogId, cancel: &CancellationToken) -> Result<Blog, BlogError>;

    /// Replace title and content of a blog post.
    ///
    /// Ownership is checked by the caller through [`BlogServicePort::is_owner`].
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist or was deleted
    /// * `DatabaseError` - Database operation failed
    async fn update_blog(
        &self,
        id: BlogId,
        draft: BlogDraft,
        cancel: &CancellationToken,
    ) -> Result<Blog, BlogError>;

    /// Soft-delete a blog post; it disappears from every read.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist or was already deleted
    /// * `DatabaseError` - Database operation failed
    async fn delete_blog(&self, id: BlogId, cancel: &CancellationToken) -> Result<(), BlogError>;

    /// List live blog posts, newest first.
    async fn list_blogs(
        &self,
        page: PageRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<Blog>, BlogError>;

    /// Whether `user_id` owns the blog post.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist or was deleted
    /// * `DatabaseError` - Database operation failed
    async fn is_owner(
        &self,
        id: BlogId,
        user_id: UserId,
        cancel: &CancellationToken,
    ) -> Result<bool, BlogError>;
}

/// Persistence operations for blog posts.
///
/// Soft-deleted rows are invisible to every method.
#[async_trait]
pub trait BlogRepository: Send + Sync + 'static {
    async fn create(&self, blog: NewBlog) -> Result<Blog, BlogError>;

    /// # Returns
    /// Optional blog (None if not found or deleted)
    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogError>;

    /// # Errors
    /// * `NotFound` - Blog does not exist or was deleted
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, id: BlogId, draft: BlogDraft) -> Result<Blog, BlogError>;

    /// Mark the blog post deleted.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist or was already deleted
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: BlogId) -> Result<(), BlogError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<Blog>, BlogError>;
}
