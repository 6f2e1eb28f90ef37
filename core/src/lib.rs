pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{MessageRepositories, MessagesService, create_repositories};
pub use domain::common::services::Service;
pub use infrastructure::health::repositories::postgres::PostgresHealthRepository;
pub use infrastructure::message::repositories::postgres::PostgresMessageRepository;
