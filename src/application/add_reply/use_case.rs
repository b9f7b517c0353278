use std::sync::Arc;

use serde_json::Value;

use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::reply::entity::{AddedReply, NewReply};
use crate::domain::reply::repository::ReplyRepository;
use crate::domain::shared::payload::require_str;
use crate::domain::thread::repository::ThreadRepository;

/// Create a reply under an existing thread and comment. The comment check
/// is existence-only; replying to someone else's comment is allowed.
pub struct AddReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl AddReplyUseCase {
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

    pub async fn execute(&self, payload: &Value) -> Result<AddedReply, DomainError> {
        let thread_id = require_str(payload, "threadId")?;
        self.thread_repository.get_thread_by_id(thread_id).await?;
        let comment_id = require_str(payload, "commentId")?;
        self.comment_repository
            .verify_comment_availability(comment_id)
            .await?;
        let new_reply = NewReply::from_payload(payload)?;
        self.reply_repository.add_reply(new_reply).await
    }
}
