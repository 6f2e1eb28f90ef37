use tracing::debug;

use crate::domain::{
    common::{CoreError, GetPaginated, TotalPaginatedElements, services::Service},
    health::port::HealthRepository,
    message::{
        entities::{InsertMessageInput, Message, MessageId, UpdateMessageInput},
        ports::{MessageRepository, MessageService},
    },
};

impl<M, H> MessageService for Service<M, H>
where
    M: MessageRepository,
    H: HealthRepository,
{
    async fn create_message(&self, input: InsertMessageInput) -> Result<Message, CoreError> {
        if input.author.trim().is_empty() {
            return Err(CoreError::InvalidMessageAuthor);
        }
        if input.content.trim().is_empty() {
            return Err(CoreError::InvalidMessageContent);
        }

        let message = Message::new(input.author, input.content);
        debug!(id = %message.id, "creating message");

        self.message_repository.insert(message).await
    }

    async fn get_message(&self, message_id: &MessageId) -> Result<Message, CoreError> {
        self.message_repository
            .find_by_id(message_id)
            .await?
            .ok_or(CoreError::MessageNotFound { id: *message_id })
    }

    async fn list_messages(
        &self,
        pagination: &GetPaginated,
    ) -> Result<(Vec<Message>, TotalPaginatedElements), CoreError> {
        self.message_repository.list(pagination).await
    }

    async fn update_message(&self, input: UpdateMessageInput) -> Result<Message, CoreError> {
        let mut message = self.get_message(&input.id).await?;

        // Compared against the id the message was looked up by
        if input.payload_id != Some(input.id) {
            debug!(id = %input.id, payload_id = ?input.payload_id, "update payload id mismatch");
            return Err(CoreError::MessageIdMismatch { id: input.id });
        }

        if input.content.trim().is_empty() {
            return Err(CoreError::InvalidMessageContent);
        }

        message.content = input.content;

        self.message_repository.save(message).await
    }

    async fn delete_message(&self, message_id: &MessageId) -> Result<(), CoreError> {
        self.get_message(message_id).await?;

        self.message_repository.delete(message_id).await
    }
}
