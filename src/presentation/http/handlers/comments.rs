use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde_json::{Value, json};

use super::threads::merge_payload;
use crate::application::delete_comment::use_case::DeleteCommentInput;
use crate::presentation::http::{
    errors::AppError, middleware::user::decode_required_user_claims, state::AppState,
};

pub async fn post_comment(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let payload = merge_payload(
        body,
        &[("threadId", &thread_id), ("owner", &claims.sub)],
    )?;
    let added_comment = state.add_comment.execute(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedComment": added_comment },
        })),
    ))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    state
        .delete_comment
        .execute(DeleteCommentInput {
            thread_id,
            comment_id,
            owner: claims.sub,
        })
        .await?;
    Ok(Json(json!({ "status": "success" })))
}

pub async fn put_comment_like(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let payload = json!({
        "threadId": thread_id,
        "commentId": comment_id,
        "userId": claims.sub,
    });
    state.like_unlike_comment.execute(&payload).await?;
    Ok(Json(json!({ "status": "success" })))
}
