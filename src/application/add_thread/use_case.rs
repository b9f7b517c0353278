use std::sync::Arc;

use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::thread::entity::{AddedThread, NewThread};
use crate::domain::thread::repository::ThreadRepository;

/// Create a thread. Threads have no parent, so no existence checks run.
pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<AddedThread, DomainError> {
        let new_thread = NewThread::from_payload(payload)?;
        self.thread_repository.add_thread(new_thread).await
    }
}
