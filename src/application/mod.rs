pub mod add_comment;
pub mod add_reply;
pub mod add_thread;
pub mod delete_comment;
pub mod delete_reply;
pub mod get_detail_thread;
pub mod like_unlike_comment;
