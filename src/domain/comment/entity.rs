use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::reply::entity::DetailReply;
use crate::domain::shared::payload::require_str;
use crate::domain::thread::entity::parse_entity_date;

/// Placeholder shown in place of a soft-deleted comment's content.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub thread_id: String,
    pub owner: String,
}

impl NewComment {
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        Ok(Self {
            content: require_str(payload, "content")?.to_string(),
            thread_id: require_str(payload, "threadId")?.to_string(),
            owner: require_str(payload, "owner")?.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub fn new(id: String, content: String, owner: String) -> Result<Self, DomainError> {
        if id.is_empty() {
            return Err(DomainError::missing("id"));
        }
        if content.is_empty() {
            return Err(DomainError::missing("content"));
        }
        if owner.is_empty() {
            return Err(DomainError::missing("owner"));
        }
        Ok(Self { id, content, owner })
    }
}

/// Comment row as produced by `get_comments_by_thread_id`: joined with the
/// owner's username and a derived like count, ordered oldest-first.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRow {
    pub id: String,
    pub content: String,
    pub date: String,
    pub username: String,
    pub is_delete: bool,
    pub like_count: i64,
}

/// Read-model projection of a comment inside a thread detail.
///
/// Soft-deleted comments keep their stored content untouched; only the
/// exposed `content` is replaced by the placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailComment {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub like_count: i64,
    pub replies: Vec<DetailReply>,
}

impl DetailComment {
    pub fn new(row: CommentRow, replies: Vec<DetailReply>) -> Result<Self, DomainError> {
        if row.id.is_empty() {
            return Err(DomainError::missing("id"));
        }
        if row.username.is_empty() {
            return Err(DomainError::missing("username"));
        }
        if row.content.is_empty() {
            return Err(DomainError::missing("content"));
        }
        let date = parse_entity_date(&row.date)?;
        let content = if row.is_delete {
            DELETED_COMMENT_CONTENT.to_string()
        } else {
            row.content
        };
        Ok(Self {
            id: row.id,
            username: row.username,
            date,
            content,
            like_count: row.like_count.max(0),
            replies,
        })
    }
}
