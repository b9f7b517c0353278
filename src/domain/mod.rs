pub mod comment;
pub mod errors;
pub mod reply;
pub mod shared;
pub mod thread;
