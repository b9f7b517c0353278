use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use super::helpers::{TestApp, send, spawn_app, token_for};

async fn create_thread(app: &TestApp, token: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/threads",
        Some(token),
        Some(json!({ "title": "sebuah thread", "body": "isi thread" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    let id = body["data"]["addedThread"]["id"].as_str().unwrap();
    assert!(id.starts_with("thread-"));
    id.to_string()
}

async fn create_comment(app: &TestApp, token: &str, thread_id: &str, content: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        &format!("/threads/{}/comments", thread_id),
        Some(token),
        Some(json!({ "content": content })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["addedComment"]["id"].as_str().unwrap();
    assert!(id.starts_with("comment-"));
    id.to_string()
}

async fn get_detail(app: &TestApp, thread_id: &str) -> Value {
    let (status, body) = send(
        app,
        Method::GET,
        &format!("/threads/{}", thread_id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["thread"].clone()
}

#[tokio::test]
async fn thread_detail_assembles_comments_and_replies_oldest_first() {
    let app = spawn_app();
    let token = token_for("user-123");

    let thread_id = create_thread(&app, &token).await;
    let first_comment = create_comment(&app, &token, &thread_id, "pertama").await;
    let second_comment = create_comment(&app, &token, &thread_id, "kedua").await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/threads/{}/comments/{}/replies", thread_id, first_comment),
        Some(&token),
        Some(json!({ "content": "sebuah balasan" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(
        body["data"]["addedReply"]["id"]
            .as_str()
            .unwrap()
            .starts_with("reply-")
    );

    let thread = get_detail(&app, &thread_id).await;
    let comments = thread["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["id"], Value::String(first_comment.clone()));
    assert_eq!(comments[1]["id"], Value::String(second_comment));
    assert_eq!(comments[0]["replies"].as_array().unwrap().len(), 1);
    assert_eq!(comments[0]["replies"][0]["content"], "sebuah balasan");
    assert!(comments[1]["replies"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn like_toggles_on_repeated_requests() {
    let app = spawn_app();
    let token = token_for("user-123");
    let thread_id = create_thread(&app, &token).await;
    let comment_id = create_comment(&app, &token, &thread_id, "komentar").await;
    let like_uri = format!("/threads/{}/comments/{}/likes", thread_id, comment_id);

    let (status, _) = send(&app, Method::PUT, &like_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let thread = get_detail(&app, &thread_id).await;
    assert_eq!(thread["comments"][0]["likeCount"], 1);

    let (status, _) = send(&app, Method::PUT, &like_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let thread = get_detail(&app, &thread_id).await;
    assert_eq!(thread["comments"][0]["likeCount"], 0);
}

#[tokio::test]
async fn likes_from_different_users_accumulate() {
    let app = spawn_app();
    let token = token_for("user-123");
    let thread_id = create_thread(&app, &token).await;
    let comment_id = create_comment(&app, &token, &thread_id, "komentar").await;
    let like_uri = format!("/threads/{}/comments/{}/likes", thread_id, comment_id);

    send(&app, Method::PUT, &like_uri, Some(&token), None).await;
    send(&app, Method::PUT, &like_uri, Some(&token_for("user-456")), None).await;

    let thread = get_detail(&app, &thread_id).await;
    assert_eq!(thread["comments"][0]["likeCount"], 2);
}

#[tokio::test]
async fn deleted_comment_is_masked_and_delete_is_idempotent() {
    let app = spawn_app();
    let token = token_for("user-123");
    let thread_id = create_thread(&app, &token).await;
    let comment_id = create_comment(&app, &token, &thread_id, "rahasia").await;
    let delete_uri = format!("/threads/{}/comments/{}", thread_id, comment_id);

    let (status, _) = send(&app, Method::DELETE, &delete_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let thread = get_detail(&app, &thread_id).await;
    assert_eq!(thread["comments"][0]["content"], "**komentar telah dihapus**");

    // Deleting again re-flags silently.
    let (status, _) = send(&app, Method::DELETE, &delete_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn non_owner_cannot_delete_comment() {
    let app = spawn_app();
    let owner = token_for("user-123");
    let intruder = token_for("user-456");
    let thread_id = create_thread(&app, &owner).await;
    let comment_id = create_comment(&app, &owner, &thread_id, "milikku").await;

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/threads/{}/comments/{}", thread_id, comment_id),
        Some(&intruder),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let thread = get_detail(&app, &thread_id).await;
    assert_eq!(thread["comments"][0]["content"], "milikku");
}

#[tokio::test]
async fn deleted_reply_is_masked_for_readers() {
    let app = spawn_app();
    let token = token_for("user-123");
    let thread_id = create_thread(&app, &token).await;
    let comment_id = create_comment(&app, &token, &thread_id, "komentar").await;

    let (_, body) = send(
        &app,
        Method::POST,
        &format!("/threads/{}/comments/{}/replies", thread_id, comment_id),
        Some(&token),
        Some(json!({ "content": "balasan rahasia" })),
    )
    .await;
    let reply_id = body["data"]["addedReply"]["id"].as_str().unwrap().to_string();

    let delete_uri = format!(
        "/threads/{}/comments/{}/replies/{}",
        thread_id, comment_id, reply_id
    );
    let (status, _) = send(&app, Method::DELETE, &delete_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let thread = get_detail(&app, &thread_id).await;
    assert_eq!(
        thread["comments"][0]["replies"][0]["content"],
        "**balasan telah dihapus**"
    );

    // Deleting again re-flags silently, same as comments.
    let (status, _) = send(&app, Method::DELETE, &delete_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_fields_are_rejected_with_a_stable_code() {
    let app = spawn_app();
    let token = token_for("user-123");

    let (status, body) = send(
        &app,
        Method::POST,
        "/threads",
        Some(&token),
        Some(json!({ "title": "tanpa body" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["code"], "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn unknown_thread_yields_not_found() {
    let app = spawn_app();
    let token = token_for("user-123");

    let (status, body) = send(&app, Method::GET, "/threads/thread-404", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, body) = send(
        &app,
        Method::POST,
        "/threads/thread-404/comments",
        Some(&token),
        Some(json!({ "content": "ke mana-mana" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn mutating_routes_require_a_bearer_token() {
    let app = spawn_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/threads",
        None,
        Some(json!({ "title": "t", "body": "b" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], "fail");
}
