use std::sync::Arc;

use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::thread::repository::ThreadRepository;

#[derive(Debug, Clone)]
pub struct DeleteCommentInput {
    pub thread_id: String,
    pub comment_id: String,
    pub owner: String,
}

/// Soft-delete a comment after thread-existence and ownership checks.
///
/// Deleting an already-deleted comment re-flags it silently; the flag is a
/// monotonic marker.
pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn execute(&self, input: DeleteCommentInput) -> Result<(), DomainError> {
        self.thread_repository
            .get_thread_by_id(&input.thread_id)
            .await?;
        self.comment_repository
            .verify_comment(&input.comment_id, &input.owner)
            .await?;
        self.comment_repository
            .delete_comment(&input.comment_id)
            .await
    }
}
