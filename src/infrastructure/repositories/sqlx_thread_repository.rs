use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::thread::entity::{AddedThread, NewThread, ThreadRecord};
use crate::domain::thread::repository::ThreadRepository;

pub struct SqlxThreadRepository {
    pool: PgPool,
}

impl SqlxThreadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for SqlxThreadRepository {
    async fn add_thread(&self, new_thread: NewThread) -> Result<AddedThread, DomainError> {
        let id = format!("thread-{}", Uuid::now_v7());
        let date = Utc::now().to_rfc3339();

        let row = sqlx::query_as::<_, (String, String, String)>(
            "INSERT INTO threads (id, title, body, date, owner) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(&new_thread.title)
        .bind(&new_thread.body)
        .bind(&date)
        .bind(&new_thread.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        AddedThread::new(row.0, row.1, row.2)
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadRecord, DomainError> {
        sqlx::query_as::<_, ThreadRecord>(
            "SELECT threads.id, threads.title, threads.body, threads.date, users.username \
             FROM threads \
             LEFT JOIN users ON threads.owner = users.id \
             WHERE threads.id = $1",
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?
        .ok_or_else(|| DomainError::NotFound("thread".to_string()))
    }
}
