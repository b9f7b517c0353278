use std::sync::Arc;

use serde_json::Value;
use validator::Validate;

use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::shared::payload::require_str;
use crate::domain::thread::repository::ThreadRepository;

/// Stored ids are VARCHAR(50); anything longer can never match a row.
#[derive(Debug, Validate)]
struct LikeCommentIds {
    #[validate(length(max = 50))]
    comment_id: String,
    #[validate(length(max = 50))]
    user_id: String,
}

/// Toggle a user's like on a comment. A single operation flips the
/// relation based on its current state; there are no separate like and
/// unlike endpoints.
pub struct LikeUnlikeCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl LikeUnlikeCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<(), DomainError> {
        let ids = Self::validate_payload(payload)?;
        let thread_id = require_str(payload, "threadId")?;
        self.thread_repository.get_thread_by_id(thread_id).await?;

        let is_liked = self
            .comment_repository
            .verify_comment_liked(&ids.comment_id, &ids.user_id)
            .await?;
        if is_liked {
            self.comment_repository
                .unlike_comment(&ids.comment_id, &ids.user_id)
                .await
        } else {
            self.comment_repository
                .like_comment(&ids.comment_id, &ids.user_id)
                .await
        }
    }

    /// Runs before any repository call.
    fn validate_payload(payload: &Value) -> Result<LikeCommentIds, DomainError> {
        let ids = LikeCommentIds {
            comment_id: require_str(payload, "commentId")?.to_string(),
            user_id: require_str(payload, "userId")?.to_string(),
        };
        ids.validate().map_err(|errors| {
            if errors.field_errors().contains_key("comment_id") {
                DomainError::too_long("commentId")
            } else {
                DomainError::too_long("userId")
            }
        })?;
        Ok(ids)
    }
}
