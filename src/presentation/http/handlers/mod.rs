pub mod comments;
pub mod health;
pub mod replies;
pub mod threads;
