use async_trait::async_trait;

use super::entity::{AddedThread, NewThread, ThreadRecord};
use crate::domain::errors::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, new_thread: NewThread) -> Result<AddedThread, DomainError>;

    /// Fetch a thread with its owner's username. `NotFound` when absent.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadRecord, DomainError>;
}
