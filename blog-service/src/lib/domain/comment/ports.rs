use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::blog::models::BlogId;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::NewComment;
use crate::domain::page::PageRequest;
use crate::domain::user::models::UserId;

/// Port for comment domain service operations.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// Add a comment by `owner` to a live blog post.
    ///
    /// # Errors
    /// * `BlogNotFound` - Blog does not exist or was deleted
    /// * `Cancelled` - Cancellation was requested first
    /// * `DatabaseError` - Database operation failed
    async fn create_comment(
        &self,
        owner: UserId,
        blog_id: BlogId,
        content: CommentContent,
        cancel: &CancellationToken,
    ) -> Result<Comment, CommentError>;

    /// # Errors
    /// * `NotFound` - Comment does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_comment(
        &self,
        id: CommentId,
        cancel: &CancellationToken,
    ) -> Result<Comment, CommentError>;

    /// Replace the comment's content. Ownership is checked by the caller.
    ///
    /// # Errors
    /// * `NotFound` - Comment does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_comment(
        &self,
        id: CommentId,
        content: CommentContent,
        cancel: &CancellationToken,
    ) -> Result<Comment, CommentError>;

    /// # Errors
    /// * `NotFound` - Comment does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_comment(
        &self,
        id: CommentId,
        cancel: &CancellationToken,
    ) -> Result<(), CommentError>;

    /// List comments of a live blog post, oldest first.
    ///
    /// # Errors
    /// * `BlogNotFound` - Blog does not exist or was deleted
    /// * `DatabaseError` - Database operation failed
    async fn list_blog_comments(
        &self,
        blog_id: BlogId,
        page: PageRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<Comment>, CommentError>;

    /// Whether `user_id` wrote the comment.
    ///
    /// # Errors
    /// * `NotFound` - Comment does not exist
    /// * `DatabaseError` - Database operation failed
    async fn is_owner(
        &self,
        id: CommentId,
        user_id: UserId,
        cancel: &CancellationToken,
    ) -> Result<bool, CommentError>;
}

/// Persistence operations for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentError>;

    /// # Returns
    /// Optional comment (None if not found)
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentError>;

    /// # Errors
    /// * `NotFound` - Comment does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        id: CommentId,
        content: CommentContent,
    ) -> Result<Comment, CommentError>;

    /// # Errors
    /// * `NotFound` - Comment does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: CommentId) -> Result<(), CommentError>;

    async fn list_by_blog(
        &self,
        blog_id: BlogId,
        page: PageRequest,
    ) -> Result<Vec<Comment>, CommentError>;
}
