use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::reply::entity::{AddedReply, NewReply, ReplyRow};
use crate::domain::reply::repository::ReplyRepository;

pub struct SqlxReplyRepository {
    pool: PgPool,
}

impl SqlxReplyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for SqlxReplyRepository {
    async fn add_reply(&self, new_reply: NewReply) -> Result<AddedReply, DomainError> {
        let id = format!("reply-{}", Uuid::now_v7());
        let date = Utc::now().to_rfc3339();

        let row = sqlx::query_as::<_, (String, String, String)>(
            "INSERT INTO replies (id, content, date, owner, comment_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(&new_reply.content)
        .bind(&date)
        .bind(&new_reply.owner)
        .bind(&new_reply.comment_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        AddedReply::new(row.0, row.1, row.2)
    }

    async fn verify_reply(&self, reply_id: &str, owner: &str) -> Result<(), DomainError> {
        let stored_owner =
            sqlx::query_scalar::<_, String>("SELECT owner FROM replies WHERE id = $1")
                .bind(reply_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::Infrastructure(e.to_string()))?
                .ok_or_else(|| DomainError::NotFound("reply".to_string()))?;

        if stored_owner != owner {
            return Err(DomainError::Forbidden("not the reply owner".to_string()));
        }
        Ok(())
    }

    async fn delete_reply(&self, reply_id: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE replies SET is_delete = TRUE WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Infrastructure(e.to_string()))?;
        Ok(())
    }

    async fn get_replies_by_comment_id(
        &self,
        comment_id: &str,
    ) -> Result<Vec<ReplyRow>, DomainError> {
        sqlx::query_as::<_, ReplyRow>(
            "SELECT replies.id, replies.content, replies.date, users.username, \
                    replies.is_delete \
             FROM replies \
             LEFT JOIN users ON replies.owner = users.id \
             WHERE replies.comment_id = $1 \
             ORDER BY replies.date ASC",
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))
    }
}
