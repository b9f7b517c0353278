use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::shared::payload::require_str;
use crate::domain::thread::entity::parse_entity_date;

/// Placeholder shown in place of a soft-deleted reply's content.
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub content: String,
    pub comment_id: String,
    pub owner: String,
}

impl NewReply {
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        Ok(Self {
            content: require_str(payload, "content")?.to_string(),
            comment_id: require_str(payload, "commentId")?.to_string(),
            owner: require_str(payload, "owner")?.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedReply {
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

/// Reply row joined with the owner's username, oldest-first.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReplyRow {
    pub id: String,
    pub content: String,
    pub date: String,
    pub username: String,
    pub is_delete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailReply {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

impl DetailReply {
    pub fn new(row: ReplyRow) -> Result<Self, DomainError> {
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
            DELETED_REPLY_CONTENT.to_string()
        } else {
            row.content
        };
        Ok(Self {
            id: row.id,
            username: row.username,
            date,
            content,
        })
    }
}
