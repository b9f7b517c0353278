use async_trait::async_trait;

use super::entity::{AddedComment, CommentRow, NewComment};
use crate::domain::errors::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, new_comment: NewComment) -> Result<AddedComment, DomainError>;

    /// Existence plus ownership check. `NotFound` when the comment is
    /// absent, `Forbidden` when `owner` does not match the stored owner.
    async fn verify_comment(&self, comment_id: &str, owner: &str) -> Result<(), DomainError>;

    /// Existence-only check; returns the stored owner id.
    async fn verify_comment_availability(&self, comment_id: &str) -> Result<String, DomainError>;

    /// Comments of a thread, oldest-first, each carrying the owner's
    /// username and a derived like count.
    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentRow>, DomainError>;

    /// Soft delete. Already-deleted comments are re-flagged without error.
    async fn delete_comment(&self, comment_id: &str) -> Result<(), DomainError>;

    /// Whether a like row exists for `(comment_id, user_id)`.
    async fn verify_comment_liked(
        &self,
        comment_id: &str,
        user_id: &str,
    ) -> Result<bool, DomainError>;

    async fn like_comment(&self, comment_id: &str, user_id: &str) -> Result<(), DomainError>;

    async fn unlike_comment(&self, comment_id: &str, user_id: &str) -> Result<(), DomainError>;
}
