use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde_json::{Value, json};

use super::threads::merge_payload;
use crate::application::delete_reply::use_case::DeleteReplyInput;
use crate::presentation::http::{
    errors::AppError, middleware::user::decode_required_user_claims, state::AppState,
};

pub async fn post_reply(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let payload = merge_payload(
        body,
        &[
            ("threadId", &thread_id),
            ("commentId", &comment_id),
            ("owner", &claims.sub),
        ],
    )?;
    let added_reply = state.add_reply.execute(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedReply": added_reply },
        })),
    ))
}

pub async fn delete_reply(
    State(state): State<AppState>,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    state
        .delete_reply
        .execute(DeleteReplyInput {
            thread_id,
            comment_id,
            reply_id,
            owner: claims.sub,
        })
        .await?;
    Ok(Json(json!({ "status": "success" })))
}
