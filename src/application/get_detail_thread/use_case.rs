use std::sync::Arc;

use futures_util::future::try_join_all;

use crate::domain::comment::entity::DetailComment;
use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::reply::entity::DetailReply;
use crate::domain::reply::repository::ReplyRepository;
use crate::domain::thread::entity::DetailThread;
use crate::domain::thread::repository::ThreadRepository;

/// Assemble the full read model of a thread: the thread itself, its
/// comments, and each comment's replies.
///
/// Repositories return comments and replies oldest-first; assembly keeps
/// that order. Reply lookups are independent per comment, so they run as a
/// fan-out and are joined back to their parent by position in the same
/// comment list they were derived from.
pub struct GetDetailThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl GetDetailThreadUseCase {
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

    pub async fn execute(&self, thread_id: &str) -> Result<DetailThread, DomainError> {
        let thread = self.thread_repository.get_thread_by_id(thread_id).await?;
        let comment_rows = self
            .comment_repository
            .get_comments_by_thread_id(thread_id)
            .await?;

        let reply_rows = try_join_all(
            comment_rows
                .iter()
                .map(|row| self.reply_repository.get_replies_by_comment_id(&row.id)),
        )
        .await?;

        let comments = comment_rows
            .into_iter()
            .zip(reply_rows)
            .map(|(row, replies)| {
                let replies = replies
                    .into_iter()
                    .map(DetailReply::new)
                    .collect::<Result<Vec<_>, _>>()?;
                DetailComment::new(row, replies)
            })
            .collect::<Result<Vec<_>, _>>()?;

        DetailThread::new(thread, comments)
    }
}
