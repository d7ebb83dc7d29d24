//! In-memory message store.

use std::sync::RwLock;

use async_trait::async_trait;

use grantflow_core::error::AppError;
use grantflow_core::result::AppResult;
use grantflow_core::types::{MessageId, UserId};
use grantflow_entity::message::Message;

use crate::traits::MessageStore;

/// In-memory [`MessageStore`] backed by an insertion-ordered log.
///
/// The log order is what breaks ties between messages with equal
/// `created_at` timestamps in the conversation aggregation.
#[derive(Debug, Default)]
pub struct MemoryMessageStore {
    log: RwLock<Vec<Message>>,
}

impl MemoryMessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Vec<Message>>> {
        self.log
            .read()
            .map_err(|_| AppError::internal("Message store lock poisoned"))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Vec<Message>>> {
        self.log
            .write()
            .map_err(|_| AppError::internal("Message store lock poisoned"))
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn create(&self, message: Message) -> AppResult<Message> {
        let mut log = self.write()?;
        if log.iter().any(|m| m.id == message.id) {
            return Err(AppError::conflict(format!(
                "Message {} already exists",
                message.id
            )));
        }
        log.push(message.clone());
        Ok(message)
    }

    async fn find_by_id(&self, id: MessageId) -> AppResult<Option<Message>> {
        Ok(self.read()?.iter().find(|m| m.id == id).cloned())
    }

    async fn update(&self, message: Message) -> AppResult<Message> {
        let mut log = self.write()?;
        match log.iter_mut().find(|m| m.id == message.id) {
            Some(row) => {
                *row = message.clone();
                Ok(message)
            }
            None => Err(AppError::not_found(format!(
                "Message {} does not exist",
                message.id
            ))),
        }
    }

    async fn find_by_participant(&self, user_id: UserId) -> AppResult<Vec<Message>> {
        Ok(self
            .read()?
            .iter()
            .filter(|m| m.sender_id == user_id || m.receiver_id == user_id)
            .cloned()
            .collect())
    }
}
