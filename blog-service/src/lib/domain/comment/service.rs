use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::blog::models::BlogId;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::cancellation::run_until_cancelled;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::NewComment;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::page::PageRequest;
use crate::domain::user::models::UserId;

/// Domain service implementation for comment operations.
///
/// Consults the blog repository so comments are only attached to, and
/// listed for, live blog posts.
pub struct CommentService<CR, BR>
where
    CR: CommentRepository,
    BR: BlogRepository,
{
    comment_repository: Arc<CR>,
    blog_repository: Arc<BR>,
}

impl<CR, BR> CommentService<CR, BR>
where
    CR: CommentRepository,
    BR: BlogRepository,
{
    /// Create a new comment service with injected dependencies.
    ///
    /// # Arguments
    /// * `comment_repository` - Comment persistence implementation
    /// * `blog_repository` - Blog repository for existence checks
    pub fn new(comment_repository: Arc<CR>, blog_repository: Arc<BR>) -> Self {
        Self {
            comment_repository,
            blog_repository,
        }
    }

    async fn ensure_blog_exists(&self, blog_id: BlogId) -> Result<(), CommentError> {
        self.blog_repository
            .find_by_id(blog_id)
            .await?
            .map(|_| ())
            .ok_or(CommentError::BlogNotFound(blog_id))
    }
}

#[async_trait]
impl<CR, BR> CommentServicePort for CommentService<CR, BR>
where
    CR: CommentRepository,
    BR: BlogRepository,
{
    async fn create_comment(
        &self,
        owner: UserId,
        blog_id: BlogId,
        content: CommentContent,
        cancel: &CancellationToken,
    ) -> Result<Comment, CommentError> {
        run_until_cancelled(cancel, self.ensure_blog_exists(blog_id)).await?;

        let new_comment = NewComment {
            user_id: owner,
            blog_id,
            content,
        };

        let comment = run_until_cancelled(cancel, self.comment_repository.create(new_comment)).await?;

        tracing::info!(
            comment_id = %comment.id,
            blog_id = %blog_id,
            user_id = %owner,
            "Comment created"
        );

        Ok(comment)
    }

    async fn get_comment(
        &self,
        id: CommentId,
        cancel: &CancellationToken,
    ) -> Result<Comment, CommentError> {
        run_until_cancelled(cancel, self.comment_repository.find_by_id(id))
            .await?
            .ok_or(CommentError::NotFound(id))
    }

    async fn update_comment(
        &self,
        id: CommentId,
        content: CommentContent,
        cancel: &CancellationToken,
    ) -> Result<Comment, CommentError> {
        let comment = run_until_cancelled(cancel, self.comment_repository.update(id, content)).await?;

        tracing::info!(comment_id = %id, "Comment updated");

        Ok(comment)
    }

    async fn delete_comment(
        &self,
        id: CommentId,
        cancel: &CancellationToken,
    ) -> Result<(), CommentError> {
        run_until_cancelled(cancel, self.comment_repository.delete(id)).await?;

        tracing::info!(comment_id = %id, "Comment deleted");

        Ok(())
    }

    async fn list_blog_comments(
        &self,
        blog_id: BlogId,
        page: PageRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<Comment>, CommentError> {
        run_until_cancelled(cancel, self.ensure_blog_exists(blog_id)).await?;

        run_until_cancelled(cancel, self.comment_repository.list_by_blog(blog_id, page)).await
    }

    async fn is_owner(
        &self,
        id: CommentId,
        user_id: UserId,
        cancel: &CancellationToken,
    ) -> Result<bool, CommentError> {
        let comment = self.get_comment(id, cancel).await?;

        Ok(comment.user_id == user_id)
    }
}
