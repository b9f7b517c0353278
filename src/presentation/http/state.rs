use std::sync::Arc;

use sqlx::PgPool;

use crate::application::{
    add_comment::use_case::AddCommentUseCase, add_reply::use_case::AddReplyUseCase,
    add_thread::use_case::AddThreadUseCase, delete_comment::use_case::DeleteCommentUseCase,
    delete_reply::use_case::DeleteReplyUseCase,
    get_detail_thread::use_case::GetDetailThreadUseCase,
    like_unlike_comment::use_case::LikeUnlikeCommentUseCase,
};
use crate::config::Config;
use crate::domain::comment::repository::CommentRepository;
use crate::domain::reply::repository::ReplyRepository;
use crate::domain::thread::repository::ThreadRepository;

/// Shared handler state. Use cases are assembled once at startup from the
/// repository interfaces; handlers never see concrete adapters.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub add_thread: Arc<AddThreadUseCase>,
    pub get_detail_thread: Arc<GetDetailThreadUseCase>,
    pub add_comment: Arc<AddCommentUseCase>,
    pub delete_comment: Arc<DeleteCommentUseCase>,
    pub like_unlike_comment: Arc<LikeUnlikeCommentUseCase>,
    pub add_reply: Arc<AddReplyUseCase>,
    pub delete_reply: Arc<DeleteReplyUseCase>,
}

impl AppState {
    pub fn new(
        db: PgPool,
        config: Config,
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reply_repo: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            db,
            config,
            add_thread: Arc::new(AddThreadUseCase::new(thread_repo.clone())),
            get_detail_thread: Arc::new(GetDetailThreadUseCase::new(
                thread_repo.clone(),
                comment_repo.clone(),
                reply_repo.clone(),
            )),
            add_comment: Arc::new(AddCommentUseCase::new(
                thread_repo.clone(),
                comment_repo.clone(),
            )),
            delete_comment: Arc::new(DeleteCommentUseCase::new(
                thread_repo.clone(),
                comment_repo.clone(),
            )),
            like_unlike_comment: Arc::new(LikeUnlikeCommentUseCase::new(
                thread_repo.clone(),
                comment_repo.clone(),
            )),
            add_reply: Arc::new(AddReplyUseCase::new(
                thread_repo.clone(),
                comment_repo.clone(),
                reply_repo.clone(),
            )),
            delete_reply: Arc::new(DeleteReplyUseCase::new(thread_repo, comment_repo, reply_repo)),
        }
    }
}
