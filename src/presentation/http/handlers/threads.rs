use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde_json::{Map, Value, json};

use crate::presentation::http::{
    errors::AppError, middleware::user::decode_required_user_claims, state::AppState,
};

/// The use-case payload is the request body plus path params and the
/// authenticated user id, merged the same way for every mutating route.
pub(super) fn merge_payload(
    body: Value,
    extra: &[(&str, &str)],
) -> Result<Value, AppError> {
    let mut payload = match body {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        _ => return Err(AppError::BadRequest("request body must be a JSON object".into())),
    };
    for (key, value) in extra {
        payload.insert((*key).to_string(), Value::String((*value).to_string()));
    }
    Ok(Value::Object(payload))
}

pub async fn post_thread(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let payload = merge_payload(body, &[("owner", &claims.sub)])?;
    let added_thread = state.add_thread.execute(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedThread": added_thread },
        })),
    ))
}

pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let thread = state.get_detail_thread.execute(&thread_id).await?;
    Ok(Json(json!({
        "status": "success",
        "data": { "thread": thread },
    })))
}
