use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::{
    handlers::{comments, health, replies, threads},
    middleware::request_id::request_id_middleware,
    state::AppState,
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/threads", post(threads::post_thread))
        .route("/threads/{threadId}", get(threads::get_thread))
        .route(
            "/threads/{threadId}/comments",
            post(comments::post_comment),
        )
        .route(
            "/threads/{threadId}/comments/{commentId}",
            delete(comments::delete_comment),
        )
        .route(
            "/threads/{threadId}/comments/{commentId}/likes",
            put(comments::put_comment_like),
        )
        .route(
            "/threads/{threadId}/comments/{commentId}/replies",
            post(replies::post_reply),
        )
        .route(
            "/threads/{threadId}/comments/{commentId}/replies/{replyId}",
            delete(replies::delete_reply),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
