use std::sync::Arc;

use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::reply::repository::ReplyRepository;
use crate::domain::thread::repository::ThreadRepository;

#[derive(Debug, Clone)]
pub struct DeleteReplyInput {
    pub thread_id: String,
    pub comment_id: String,
    pub reply_id: String,
    pub owner: String,
}

/// Soft-delete a reply after checking the whole parent chain: thread
/// exists, comment exists, reply exists and belongs to the caller.
pub struct DeleteReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
        }
    }

    pub async fn execute(&self, input: DeleteReplyInput) -> Result<(), DomainError> {
        self.thread_repository
            .get_thread_by_id(&input.thread_id)
            .await?;
        self.comment_repository
            .verify_comment_availability(&input.comment_id)
            .await?;
        self.reply_repository
            .verify_reply(&input.reply_id, &input.owner)
            .await?;
        self.reply_repository.delete_reply(&input.reply_id).await
    }
}
