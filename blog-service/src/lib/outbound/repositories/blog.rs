use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogContent;
use crate::domain::blog::models::BlogDraft;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::BlogTitle;
use crate::domain::blog::models::NewBlog;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::page::PageRequest;
use crate::domain::user::models::UserId;

/// Blog persistence on PostgreSQL.
///
/// Deletion is soft: `deleted_at` is set and every query filters on it.
pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: i64,
    user_id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BlogRow> for Blog {
    type Error = BlogError;

    fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
        Ok(Blog {
            id: BlogId(row.id),
            user_id: UserId(row.user_id),
            title: BlogTitle::new(row.title)?,
            content: BlogContent::new(row.content)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn create(&self, blog: NewBlog) -> Result<Blog, BlogError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            INSERT INTO blogs (user_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, content, created_at, updated_at
            "#,
        )
        .bind(blog.user_id.as_i64())
        .bind(blog.title.as_str())
        .bind(blog.content.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        Blog::try_from(row)
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at
            FROM blogs
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        row.map(Blog::try_from).transpose()
    }

    async fn update(&self, id: BlogId, draft: BlogDraft) -> Result<Blog, BlogError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            UPDATE blogs
            SET title = $2, content = $3, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, user_id, title, content, created_at, updated_at
            "#,
        )
        .bind(id.as_i64())
        .bind(draft.title.as_str())
        .bind(draft.content.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => Blog::try_from(row),
            None => Err(BlogError::NotFound(id)),
        }
    }

    async fn delete(&self, id: BlogId) -> Result<(), BlogError> {
        let result = sqlx::query(
            r#"
            UPDATE blogs
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BlogError::NotFound(id));
        }

        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Blog>, BlogError> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at
            FROM blogs
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Blog::try_from).collect()
    }
}
