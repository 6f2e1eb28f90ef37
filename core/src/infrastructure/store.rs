//! Runtime selection between the PostgreSQL and in-memory backends.

use crate::{
    domain::{
        common::{CoreError, GetPaginated, TotalPaginatedElements},
        health::{
            entities::IsHealthy,
            port::{HealthRepository, MockHealthRepository},
        },
        message::{
            entities::{Message, MessageId},
            ports::{MessageRepository, MockMessageRepository},
        },
    },
    infrastructure::{
        health::repositories::postgres::PostgresHealthRepository,
        message::repositories::postgres::PostgresMessageRepository,
    },
};

#[derive(Clone)]
pub enum MessageStore {
    Postgres(PostgresMessageRepository),
    InMemory(MockMessageRepository),
}

impl MessageRepository for MessageStore {
    async fn insert(&self, message: Message) -> Result<Message, CoreError> {
        match self {
            MessageStore::Postgres(repository) => repository.insert(message).await,
            MessageStore::InMemory(repository) => repository.insert(message).await,
        }
    }

    async fn find_by_id(&self, id: &MessageId) -> Result<Option<Message>, CoreError> {
        match self {
            MessageStore::Postgres(repository) => repository.find_by_id(id).await,
            MessageStore::InMemory(repository) => repository.find_by_id(id).await,
        }
    }

    async fn save(&self, message: Message) -> Result<Message, CoreError> {
        match self {
            MessageStore::Postgres(repository) => repository.save(message).await,
            MessageStore::InMemory(repository) => repository.save(message).await,
        }
    }

    async fn delete(&self, id: &MessageId) -> Result<(), CoreError> {
        match self {
            MessageStore::Postgres(repository) => repository.delete(id).await,
            MessageStore::InMemory(repository) => repository.delete(id).await,
        }
    }

    async fn list(
        &self,
        pagination: &GetPaginated,
    ) -> Result<(Vec<Message>, TotalPaginatedElements), CoreError> {
        match self {
            MessageStore::Postgres(repository) => repository.list(pagination).await,
            MessageStore::InMemory(repository) => repository.list(pagination).await,
        }
    }
}

#[derive(Clone)]
pub enum HealthStore {
    Postgres(PostgresHealthRepository),
    InMemory(MockHealthRepository),
}

impl HealthRepository for HealthStore {
    async fn ping(&self) -> IsHealthy {
        match self {
            HealthStore::Postgres(repository) => repository.ping().await,
            HealthStore::InMemory(repository) => repository.ping().await,
        }
    }
}
