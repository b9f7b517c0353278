use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::comment::entity::DetailComment;
use crate::domain::errors::DomainError;
use crate::domain::shared::payload::require_str;

/// Payload for creating a thread, validated from the raw request mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl NewThread {
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        Ok(Self {
            title: require_str(payload, "title")?.to_string(),
            body: require_str(payload, "body")?.to_string(),
            owner: require_str(payload, "owner")?.to_string(),
        })
    }
}

/// Confirmation of a persisted thread, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub fn new(id: String, title: String, owner: String) -> Result<Self, DomainError> {
        if id.is_empty() {
            return Err(DomainError::missing("id"));
        }
        if title.is_empty() {
            return Err(DomainError::missing("title"));
        }
        if owner.is_empty() {
            return Err(DomainError::missing("owner"));
        }
        Ok(Self { id, title, owner })
    }
}

/// Raw thread row joined with its owner's username, straight from storage.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ThreadRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
}

/// Read model for `GET /threads/{id}`: the thread with its comment tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<DetailComment>,
}

impl DetailThread {
    pub fn new(record: ThreadRecord, comments: Vec<DetailComment>) -> Result<Self, DomainError> {
        if record.id.is_empty() {
            return Err(DomainError::missing("id"));
        }
        if record.title.is_empty() {
            return Err(DomainError::missing("title"));
        }
        if record.body.is_empty() {
            return Err(DomainError::missing("body"));
        }
        if record.username.is_empty() {
            return Err(DomainError::missing("username"));
        }
        let date = parse_entity_date(&record.date)?;
        Ok(Self {
            id: record.id,
            title: record.title,
            body: record.body,
            date,
            username: record.username,
            comments,
        })
    }
}

/// Parse a stored RFC-3339 date string into the internal timestamp type.
///
/// Storage keeps dates as text (the column predates this service), so read
/// models are the normalization point.
pub(crate) fn parse_entity_date(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    if raw.is_empty() {
        return Err(DomainError::missing("date"));
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| DomainError::invalid_date("date"))
}
