use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::comment::entity::{AddedComment, CommentRow, NewComment};
use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;

pub struct SqlxCommentRepository {
    pool: PgPool,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_comment_owner(&self, comment_id: &str) -> Result<String, DomainError> {
        sqlx::query_scalar::<_, String>("SELECT owner FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Infrastructure(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound("comment".to_string()))
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn add_comment(&self, new_comment: NewComment) -> Result<AddedComment, DomainError> {
        let id = format!("comment-{}", Uuid::now_v7());
        let date = Utc::now().to_rfc3339();

        let row = sqlx::query_as::<_, (String, String, String)>(
            "INSERT INTO comments (id, content, date, owner, thread_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(&new_comment.content)
        .bind(&date)
        .bind(&new_comment.owner)
        .bind(&new_comment.thread_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        AddedComment::new(row.0, row.1, row.2)
    }

    async fn verify_comment(&self, comment_id: &str, owner: &str) -> Result<(), DomainError> {
        let stored_owner = self.fetch_comment_owner(comment_id).await?;
        if stored_owner != owner {
            return Err(DomainError::Forbidden("not the comment owner".to_string()));
        }
        Ok(())
    }

    async fn verify_comment_availability(&self, comment_id: &str) -> Result<String, DomainError> {
        self.fetch_comment_owner(comment_id).await
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentRow>, DomainError> {
        sqlx::query_as::<_, CommentRow>(
            "SELECT comments.id, comments.content, comments.date, users.username, \
                    comments.is_delete, \
                    COUNT(comment_likes.comment_id) AS like_count \
             FROM comments \
             LEFT JOIN users ON comments.owner = users.id \
             LEFT JOIN comment_likes ON comments.id = comment_likes.comment_id \
             WHERE comments.thread_id = $1 \
             GROUP BY comments.id, users.username \
             ORDER BY comments.date ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Infrastructure(e.to_string()))?;
        Ok(())
    }

    async fn verify_comment_liked(
        &self,
        comment_id: &str,
        user_id: &str,
    ) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comment_likes WHERE comment_id = $1 AND user_id = $2)",
        )
        .bind(comment_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))
    }

    async fn like_comment(&self, comment_id: &str, user_id: &str) -> Result<(), DomainError> {
        let id = format!("comment-like-{}", Uuid::now_v7());
        // The unique constraint on (comment_id, user_id) makes concurrent
        // duplicate toggles converge on a single row.
        sqlx::query(
            "INSERT INTO comment_likes (id, comment_id, user_id) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (comment_id, user_id) DO NOTHING",
        )
        .bind(&id)
        .bind(comment_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;
        Ok(())
    }

    async fn unlike_comment(&self, comment_id: &str, user_id: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM comment_likes WHERE comment_id = $1 AND user_id = $2")
            .bind(comment_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Infrastructure(e.to_string()))?;
        Ok(())
    }
}
