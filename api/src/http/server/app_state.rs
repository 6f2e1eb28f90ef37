use messages_core::{MessagesService, application::MessageRepositories};

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub service: MessagesService,
}

impl AppState {
    pub fn new(service: MessagesService) -> Self {
        Self { service }
    }

    /// Shutdown the underlying database pool
    pub async fn shutdown(&self) {
        self.service.shutdown().await
    }
}

impl From<MessageRepositories> for AppState {
    fn from(repositories: MessageRepositories) -> Self {
        AppState::new(repositories.into())
    }
}
