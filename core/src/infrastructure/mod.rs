pub mod health;
pub mod message;
pub mod store;

pub use store::{HealthStore, MessageStore};
