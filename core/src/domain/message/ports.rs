use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    common::{CoreError, GetPaginated, TotalPaginatedElements},
    message::entities::{InsertMessageInput, Message, MessageId, UpdateMessageInput},
};

/// Persistence port for messages.
///
/// `list` returns records in insertion order together with the total number of
/// stored records.
pub trait MessageRepository: Send + Sync {
    fn insert(&self, message: Message) -> impl Future<Output = Result<Message, CoreError>> + Send;
    fn find_by_id(
        &self,
        id: &MessageId,
    ) -> impl Future<Output = Result<Option<Message>, CoreError>> + Send;
    /// Overwrites the stored record carrying `message.id`.
    fn save(&self, message: Message) -> impl Future<Output = Result<Message, CoreError>> + Send;
    fn delete(&self, id: &MessageId) -> impl Future<Output = Result<(), CoreError>> + Send;
    fn list(
        &self,
        pagination: &GetPaginated,
    ) -> impl Future<Output = Result<(Vec<Message>, TotalPaginatedElements), CoreError>> + Send;
}

/// A service for managing message operations in the application.
///
/// This trait is the port the HTTP layer talks to. It owns the business rules
/// around messages: creation defaults, not-found semantics and the identity
/// check performed on update.
///
/// # Thread Safety
///
/// All implementations must be thread-safe (`Send + Sync`) to support concurrent access
/// in multi-threaded environments.
pub trait MessageService: Send + Sync {
    /// Creates a new message from the provided input.
    ///
    /// A fresh id and creation timestamp are assigned and the like counter
    /// starts at zero.
    ///
    /// # Returns
    ///
    /// - `Ok(Message)` - The stored message
    /// - `Err(CoreError::InvalidMessageAuthor)` / `Err(CoreError::InvalidMessageContent)` -
    ///   A required field is empty
    /// - `Err(CoreError)` - The repository operation failed
    fn create_message(
        &self,
        input: InsertMessageInput,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;

    /// Retrieves a message by its unique identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Message)` - The message was found
    /// - `Err(CoreError::MessageNotFound)` - No message exists with the given ID
    /// - `Err(CoreError)` - The repository operation failed
    fn get_message(
        &self,
        message_id: &MessageId,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;

    /// Lists messages in insertion order.
    ///
    /// # Arguments
    ///
    /// * `pagination` - Zero-based page and page size, or unpaged
    fn list_messages(
        &self,
        pagination: &GetPaginated,
    ) -> impl Future<Output = Result<(Vec<Message>, TotalPaginatedElements), CoreError>> + Send;

    /// Replaces the content of an existing message.
    ///
    /// The message is looked up by `input.id`, and `input.payload_id` must be
    /// that same id. Only the content is taken from the input; author, creation
    /// timestamp and like counter are kept from the stored message.
    ///
    /// # Returns
    ///
    /// - `Ok(Message)` - The updated message
    /// - `Err(CoreError::MessageNotFound)` - No message exists with the given ID
    /// - `Err(CoreError::MessageIdMismatch)` - The payload carries another id, or none
    /// - `Err(CoreError::InvalidMessageContent)` - The new content is empty
    fn update_message(
        &self,
        input: UpdateMessageInput,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;

    /// Deletes a message by its unique identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The message was deleted
    /// - `Err(CoreError::MessageNotFound)` - No message exists with the given ID
    fn delete_message(
        &self,
        message_id: &MessageId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// In-memory repository keeping messages in insertion order.
#[derive(Clone, Default)]
pub struct MockMessageRepository {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl MockMessageRepository {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MessageRepository for MockMessageRepository {
    async fn insert(&self, message: Message) -> Result<Message, CoreError> {
        let mut messages = self.messages.lock().await;

        if messages.iter().any(|m| m.id == message.id) {
            return Err(CoreError::DatabaseError {
                msg: format!("duplicate key: message {} already exists", message.id),
            });
        }

        messages.push(message.clone());

        Ok(message)
    }

    async fn find_by_id(&self, id: &MessageId) -> Result<Option<Message>, CoreError> {
        let messages = self.messages.lock().await;

        Ok(messages.iter().find(|m| &m.id == id).cloned())
    }

    async fn save(&self, message: Message) -> Result<Message, CoreError> {
        let mut messages = self.messages.lock().await;

        let stored = messages
            .iter_mut()
            .find(|m| m.id == message.id)
            .ok_or(CoreError::MessageNotFound { id: message.id })?;
        *stored = message.clone();

        Ok(message)
    }

    async fn delete(&self, id: &MessageId) -> Result<(), CoreError> {
        let mut messages = self.messages.lock().await;

        let index = messages
            .iter()
            .position(|m| &m.id == id)
            .ok_or(CoreError::MessageNotFound { id: *id })?;

        messages.remove(index);

        Ok(())
    }

    async fn list(
        &self,
        pagination: &GetPaginated,
    ) -> Result<(Vec<Message>, TotalPaginatedElements), CoreError> {
        let messages = self.messages.lock().await;
        let total = messages.len() as u64;

        let page = match pagination.bounds() {
            Some((offset, limit)) => messages
                .iter()
                .skip(offset as usize)
                .take(limit as usize)
                .cloned()
                .collect(),
            None => messages.clone(),
        };

        Ok((page, total))
    }
}
