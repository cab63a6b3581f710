use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::blog::models::BlogId;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::NewComment;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::page::PageRequest;
use crate::domain::user::models::UserId;

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    user_id: i64,
    blog_id: i64,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = CommentError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId(row.id),
            user_id: UserId(row.user_id),
            blog_id: BlogId(row.blog_id),
            content: CommentContent::new(row.content)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (user_id, blog_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, blog_id, content, created_at
            "#,
        )
        .bind(comment.user_id.as_i64())
        .bind(comment.blog_id.as_i64())
        .bind(comment.content.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return CommentError::BlogNotFound(comment.blog_id);
                }
            }
            CommentError::DatabaseError(e.to_string())
        })?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, user_id, blog_id, content, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        row.map(Comment::try_from).transpose()
    }

    async fn update(
        &self,
        id: CommentId,
        content: CommentContent,
    ) -> Result<Comment, CommentError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            UPDATE comments
            SET content = $2
            WHERE id = $1
            RETURNING id, user_id, blog_id, content, created_at
            "#,
        )
        .bind(id.as_i64())
        .bind(content.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => Comment::try_from(row),
            None => Err(CommentError::NotFound(id)),
        }
    }

    async fn delete(&self, id: CommentId) -> Result<(), CommentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound(id));
        }

        Ok(())
    }

    async fn list_by_blog(
        &self,
        blog_id: BlogId,
        page: PageRequest,
    ) -> Result<Vec<Comment>, CommentError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, user_id, blog_id, content, created_at
            FROM comments
            WHERE blog_id = $1
            ORDER BY created_at ASC, id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(blog_id.as_i64())
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
