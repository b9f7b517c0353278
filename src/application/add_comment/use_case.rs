use std::sync::Arc;

use serde_json::Value;

use crate::domain::comment::entity::{AddedComment, NewComment};
use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::shared::payload::require_str;
use crate::domain::thread::repository::ThreadRepository;

/// Create a comment under an existing thread.
pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<AddedComment, DomainError> {
        let thread_id = require_str(payload, "threadId")?;
        self.thread_repository.get_thread_by_id(thread_id).await?;
        let new_comment = NewComment::from_payload(payload)?;
        self.comment_repository.add_comment(new_comment).await
    }
}
