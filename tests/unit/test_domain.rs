use forum_api::domain::comment::entity::{
    CommentRow, DELETED_COMMENT_CONTENT, DetailComment, NewComment,
};
use forum_api::domain::errors::{DomainError, ValidationCode};
use forum_api::domain::reply::entity::{DELETED_REPLY_CONTENT, DetailReply, NewReply, ReplyRow};
use forum_api::domain::thread::entity::{AddedThread, DetailThread, NewThread, ThreadRecord};
use serde_json::json;

fn code_of(err: DomainError) -> ValidationCode {
    err.validation_code().expect("expected a validation error")
}

#[test]
fn new_thread_round_trips_recognized_fields() {
    let thread = NewThread::from_payload(&json!({
        "title": "sebuah thread",
        "body": "isi thread",
        "owner": "user-123",
        "extra": "ignored",
    }))
    .unwrap();

    assert_eq!(thread.title, "sebuah thread");
    assert_eq!(thread.body, "isi thread");
    assert_eq!(thread.owner, "user-123");
}

#[test]
fn new_thread_rejects_missing_empty_and_falsy_fields() {
    let missing = NewThread::from_payload(&json!({ "title": "t", "owner": "user-123" }));
    assert_eq!(code_of(missing.unwrap_err()), ValidationCode::MissingRequiredField);

    let empty = NewThread::from_payload(&json!({ "title": "", "body": "b", "owner": "u" }));
    assert_eq!(code_of(empty.unwrap_err()), ValidationCode::MissingRequiredField);

    let falsy = NewThread::from_payload(&json!({ "title": false, "body": "b", "owner": "u" }));
    assert_eq!(code_of(falsy.unwrap_err()), ValidationCode::MissingRequiredField);
}

#[test]
fn new_thread_rejects_wrong_typed_fields() {
    let err = NewThread::from_payload(&json!({ "title": 123, "body": "b", "owner": "u" }));
    assert_eq!(code_of(err.unwrap_err()), ValidationCode::TypeMismatch);

    let err = NewThread::from_payload(&json!({ "title": "t", "body": ["b"], "owner": "u" }));
    assert_eq!(code_of(err.unwrap_err()), ValidationCode::TypeMismatch);
}

#[test]
fn new_comment_requires_all_fields_as_strings() {
    let comment = NewComment::from_payload(&json!({
        "content": "sebuah komentar",
        "threadId": "thread-123",
        "owner": "user-123",
    }))
    .unwrap();
    assert_eq!(comment.thread_id, "thread-123");

    let err = NewComment::from_payload(&json!({ "content": "c", "threadId": "t" }));
    assert_eq!(code_of(err.unwrap_err()), ValidationCode::MissingRequiredField);

    let err = NewComment::from_payload(&json!({ "content": "c", "threadId": 7, "owner": "u" }));
    assert_eq!(code_of(err.unwrap_err()), ValidationCode::TypeMismatch);
}

#[test]
fn new_reply_requires_all_fields_as_strings() {
    let reply = NewReply::from_payload(&json!({
        "content": "sebuah balasan",
        "commentId": "comment-123",
        "owner": "user-123",
    }))
    .unwrap();
    assert_eq!(reply.comment_id, "comment-123");

    let err = NewReply::from_payload(&json!({ "commentId": "c", "owner": "u" }));
    assert_eq!(code_of(err.unwrap_err()), ValidationCode::MissingRequiredField);
}

#[test]
fn added_thread_rejects_empty_fields() {
    let added = AddedThread::new(
        "thread-123".to_string(),
        "sebuah thread".to_string(),
        "user-123".to_string(),
    )
    .unwrap();
    assert_eq!(added.id, "thread-123");

    let err = AddedThread::new("".to_string(), "t".to_string(), "u".to_string());
    assert_eq!(code_of(err.unwrap_err()), ValidationCode::MissingRequiredField);
}

fn comment_row(date: &str, is_delete: bool) -> CommentRow {
    CommentRow {
        id: "comment-123".to_string(),
        content: "sebuah komentar".to_string(),
        date: date.to_string(),
        username: "johndoe".to_string(),
        is_delete,
        like_count: 2,
    }
}

#[test]
fn detail_comment_keeps_content_when_not_deleted() {
    let detail = DetailComment::new(comment_row("2021-09-10T11:00:00+00:00", false), vec![]).unwrap();
    assert_eq!(detail.content, "sebuah komentar");
    assert_eq!(detail.like_count, 2);
    assert!(detail.replies.is_empty());
}

#[test]
fn detail_comment_masks_deleted_content() {
    let detail = DetailComment::new(comment_row("2021-09-10T11:00:00+00:00", true), vec![]).unwrap();
    assert_eq!(detail.content, DELETED_COMMENT_CONTENT);
}

#[test]
fn detail_comment_rejects_unparsable_date() {
    let err = DetailComment::new(comment_row("asd", false), vec![]);
    assert_eq!(code_of(err.unwrap_err()), ValidationCode::InvalidDate);
}

fn reply_row(is_delete: bool) -> ReplyRow {
    ReplyRow {
        id: "reply-123".to_string(),
        content: "sebuah balasan".to_string(),
        date: "2021-09-10T11:30:00+00:00".to_string(),
        username: "dicoding".to_string(),
        is_delete,
    }
}

#[test]
fn detail_reply_masks_deleted_content() {
    assert_eq!(DetailReply::new(reply_row(false)).unwrap().content, "sebuah balasan");
    assert_eq!(
        DetailReply::new(reply_row(true)).unwrap().content,
        DELETED_REPLY_CONTENT
    );
}

#[test]
fn detail_thread_rejects_unparsable_date() {
    let record = ThreadRecord {
        id: "thread-123".to_string(),
        title: "sebuah thread".to_string(),
        body: "isi thread".to_string(),
        date: "asd".to_string(),
        username: "dicoding".to_string(),
    };
    let err = DetailThread::new(record, vec![]);
    assert_eq!(code_of(err.unwrap_err()), ValidationCode::InvalidDate);
}

#[test]
fn detail_thread_serializes_camel_case_with_rfc3339_date() {
    let record = ThreadRecord {
        id: "thread-123".to_string(),
        title: "sebuah thread".to_string(),
        body: "isi thread".to_string(),
        date: "2021-09-10T10:00:00+00:00".to_string(),
        username: "dicoding".to_string(),
    };
    let detail = DetailThread::new(record, vec![]).unwrap();
    let value = serde_json::to_value(&detail).unwrap();

    assert_eq!(value["id"], "thread-123");
    assert_eq!(value["username"], "dicoding");
    assert!(value["date"].as_str().unwrap().starts_with("2021-09-10T10:00:00"));
    assert!(value["comments"].as_array().unwrap().is_empty());
}
