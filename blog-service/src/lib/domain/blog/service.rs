use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogDraft;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::NewBlog;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::blog::ports::BlogServicePort;
use crate::domain::cancellation::run_until_cancelled;
use crate::domain::page::PageRequest;
use crate::domain::user::models::UserId;

/// Domain service implementation for blog operations.
pub struct BlogService<BR>
where
    BR: BlogRepository,
{
    repository: Arc<BR>,
}

impl<BR> BlogService<BR>
where
    BR: BlogRepository,
{
    /// Create a new blog service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Blog persistence implementation
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BlogServicePort for BlogService<BR>
where
    BR: BlogRepository,
{
    async fn create_blog(
        &self,
        owner: UserId,
        draft: BlogDraft,
        cancel: &CancellationToken,
    ) -> Result<Blog, BlogError> {
        let new_blog = NewBlog {
            user_id: owner,
            title: draft.title,
            content: draft.content,
        };

        let blog = run_until_cancelled(cancel, self.repository.create(new_blog)).await?;

        tracing::info!(blog_id = %blog.id, user_id = %owner, "Blog created");

        Ok(blog)
    }

    async fn get_blog(&self, id: BlogId, cancel: &CancellationToken) -> Result<Blog, BlogError> {
        run_until_cancelled(cancel, self.repository.find_by_id(id))
            .await?
            .ok_or(BlogError::NotFound(id))
    }

    async fn update_blog(
        &self,
        id: BlogId,
        draft: BlogDraft,
        cancel: &CancellationToken,
    ) -> Result<Blog, BlogError> {
        let blog = run_until_cancelled(cancel, self.repository.update(id, draft)).await?;

        tracing::info!(blog_id = %id, "Blog updated");

        Ok(blog)
    }

    async fn delete_blog(&self, id: BlogId, cancel: &CancellationToken) -> Result<(), BlogError> {
        run_until_cancelled(cancel, self.repository.delete(id)).await?;

        tracing::info!(blog_id = %id, "Blog deleted");

        Ok(())
    }

    async fn list_blogs(
        &self,
        page: PageRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<Blog>, BlogError> {
        run_until_cancelled(cancel, self.repository.list(page)).await
    }

    async fn is_owner(
        &self,
        id: BlogId,
        user_id: UserId,
        cancel: &CancellationToken,
    ) -> Result<bool, BlogError> {
        let blog = self.get_blog(id, cancel).await?;

        Ok(blog.user_id == user_id)
    }
}
