use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use tracing::info;

use crate::{
    domain::{
        common::{CoreError, services::Service},
        health::port::MockHealthRepository,
        message::ports::MockMessageRepository,
    },
    infrastructure::{
        HealthStore, MessageStore, health::repositories::postgres::PostgresHealthRepository,
        message::repositories::postgres::PostgresMessageRepository,
    },
};

/// Concrete service type wired against whichever backend was configured
pub type MessagesService = Service<MessageStore, HealthStore>;

#[derive(Clone)]
pub struct MessageRepositories {
    pub message_repository: MessageStore,
    pub health_repository: HealthStore,
}

/// Connects to PostgreSQL, applies pending migrations and builds the
/// repositories on top of the pool.
pub async fn create_repositories(
    pg_connection_options: PgConnectOptions,
) -> Result<MessageRepositories, CoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(pg_connection_options)
        .await
        .map_err(|e| CoreError::ServiceUnavailable(e.to_string()))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;
    info!("database migrations applied");

    Ok(MessageRepositories::from_pool(pool))
}

impl MessageRepositories {
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            message_repository: MessageStore::Postgres(PostgresMessageRepository::new(
                pool.clone(),
            )),
            health_repository: HealthStore::Postgres(PostgresHealthRepository::new(pool)),
        }
    }

    /// Repositories that keep everything in process memory. Nothing survives a
    /// restart.
    pub fn in_memory() -> Self {
        Self {
            message_repository: MessageStore::InMemory(MockMessageRepository::new()),
            health_repository: HealthStore::InMemory(MockHealthRepository::new()),
        }
    }
}

impl From<MessageRepositories> for MessagesService {
    fn from(repositories: MessageRepositories) -> Self {
        Service::new(
            repositories.message_repository,
            repositories.health_repository,
        )
    }
}

impl MessagesService {
    /// Closes the PostgreSQL pool, if any. The in-memory backend holds nothing
    /// to release.
    pub async fn shutdown(&self) {
        if let MessageStore::Postgres(repository) = &self.message_repository {
            repository.pool.close().await;
        }
    }
}
