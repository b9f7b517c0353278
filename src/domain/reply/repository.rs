use async_trait::async_trait;

use super::entity::{AddedReply, NewReply, ReplyRow};
use crate::domain::errors::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, new_reply: NewReply) -> Result<AddedReply, DomainError>;

    /// Existence plus ownership check. `NotFound` when the reply is absent,
    /// `Forbidden` when `owner` does not match.
    async fn verify_reply(&self, reply_id: &str, owner: &str) -> Result<(), DomainError>;

    /// Soft delete. Already-deleted replies are re-flagged without error.
    async fn delete_reply(&self, reply_id: &str) -> Result<(), DomainError>;

    /// Replies of a comment, oldest-first, with the owner's username.
    async fn get_replies_by_comment_id(
        &self,
        comment_id: &str,
    ) -> Result<Vec<ReplyRow>, DomainError>;
}
