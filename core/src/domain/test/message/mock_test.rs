use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use uuid::Uuid;

use crate::{
    Service,
    domain::{
        common::{CoreError, GetPaginated, TotalPaginatedElements},
        health::port::MockHealthRepository,
        message::{
            entities::{InsertMessageInput, Message, MessageId, UpdateMessageInput},
            ports::{MessageRepository, MessageService, MockMessageRepository},
        },
    },
};

fn service_with(
    repository: MockMessageRepository,
) -> Service<MockMessageRepository, MockHealthRepository> {
    Service::new(repository, MockHealthRepository::new())
}

fn jose_says(content: &str) -> InsertMessageInput {
    InsertMessageInput {
        author: "Jose".to_string(),
        content: content.to_string(),
    }
}

/// Store whose every operation fails, to check errors are passed through.
#[derive(Clone)]
struct FailingMessageRepository;

fn storage_down() -> CoreError {
    CoreError::DatabaseError {
        msg: "connection refused".to_string(),
    }
}

impl MessageRepository for FailingMessageRepository {
    async fn insert(&self, _message: Message) -> Result<Message, CoreError> {
        Err(storage_down())
    }

    async fn find_by_id(&self, _id: &MessageId) -> Result<Option<Message>, CoreError> {
        Err(storage_down())
    }

    async fn save(&self, _message: Message) -> Result<Message, CoreError> {
        Err(storage_down())
    }

    async fn delete(&self, _id: &MessageId) -> Result<(), CoreError> {
        Err(storage_down())
    }

    async fn list(
        &self,
        _pagination: &GetPaginated,
    ) -> Result<(Vec<Message>, TotalPaginatedElements), CoreError> {
        Err(storage_down())
    }
}

/// In-memory store that counts writes made through `save`.
#[derive(Clone, Default)]
struct CountingMessageRepository {
    inner: MockMessageRepository,
    saves: Arc<AtomicUsize>,
}

impl MessageRepository for CountingMessageRepository {
    async fn insert(&self, message: Message) -> Result<Message, CoreError> {
        self.inner.insert(message).await
    }

    async fn find_by_id(&self, id: &MessageId) -> Result<Option<Message>, CoreError> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, message: Message) -> Result<Message, CoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(message).await
    }

    async fn delete(&self, id: &MessageId) -> Result<(), CoreError> {
        self.inner.delete(id).await
    }

    async fn list(
        &self,
        pagination: &GetPaginated,
    ) -> Result<(Vec<Message>, TotalPaginatedElements), CoreError> {
        self.inner.list(pagination).await
    }
}

// == Create Message Tests ==

#[tokio::test]
async fn test_create_message_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = service_with(MockMessageRepository::new());

    let message = service
        .create_message(jose_says("hello"))
        .await
        .expect("create_message returned an error");

    assert_eq!(message.author, "Jose", "Expected correct author");
    assert_eq!(message.content, "hello", "Expected correct content");
    assert_eq!(message.like_count, 0, "Expected no likes on a new message");
    assert!(!message.id.0.is_nil(), "Expected a generated id");

    Ok(())
}

#[tokio::test]
async fn test_create_message_is_persisted() -> Result<(), Box<dyn std::error::Error>> {
    let repository = MockMessageRepository::new();
    let service = service_with(repository.clone());

    let message = service.create_message(jose_says("hello")).await?;

    let stored = repository.find_by_id(&message.id).await?;
    assert_eq!(stored, Some(message), "Expected the created message in the store");

    Ok(())
}

#[tokio::test]
async fn test_create_message_assigns_distinct_ids() -> Result<(), Box<dyn std::error::Error>> {
    let service = service_with(MockMessageRepository::new());

    let first = service.create_message(jose_says("one")).await?;
    let second = service.create_message(jose_says("two")).await?;

    assert_ne!(first.id, second.id, "Expected each message to get its own id");

    Ok(())
}

#[tokio::test]
async fn test_create_message_fail_empty_author() -> Result<(), Box<dyn std::error::Error>> {
    let service = service_with(MockMessageRepository::new());

    let input = InsertMessageInput {
        author: "   ".to_string(),
        content: "hello".to_string(),
    };
    let error = service
        .create_message(input)
        .await
        .expect_err("create_message should have returned an error");

    assert_eq!(error.to_string(), "Message author cannot be empty");

    Ok(())
}

#[tokio::test]
async fn test_create_message_fail_empty_content() -> Result<(), Box<dyn std::error::Error>> {
    let repository = MockMessageRepository::new();
    let service = service_with(repository.clone());

    let error = service
        .create_message(jose_says(""))
        .await
        .expect_err("create_message should have returned an error");

    assert_eq!(error.to_string(), "Message content cannot be empty");

    let (messages, total) = repository.list(&GetPaginated::unpaged()).await?;
    assert!(messages.is_empty());
    assert_eq!(total, 0, "Expected nothing stored");

    Ok(())
}

// == Get Message Tests ==

#[tokio::test]
async fn test_get_message_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = service_with(MockMessageRepository::new());
    let created = service.create_message(jose_says("hello")).await?;

    let message = service
        .get_message(&created.id)
        .await
        .expect("get_message returned an error");

    assert_eq!(message, created, "Expected the exact created message");

    Ok(())
}

#[tokio::test]
async fn test_get_message_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = service_with(MockMessageRepository::new());

    let missing = MessageId::from(Uuid::new_v4());
    let error = service
        .get_message(&missing)
        .await
        .expect_err("get_message should have returned an error");

    assert!(error.is_not_found(), "Expected a not found error");
    assert_eq!(error.to_string(), "Message not found");

    Ok(())
}

// == Update Message Tests ==

#[tokio::test]
async fn test_update_message_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = service_with(MockMessageRepository::new());
    let created = service.create_message(jose_says("hello")).await?;

    let updated = service
        .update_message(UpdateMessageInput {
            id: created.id,
            payload_id: Some(created.id),
            content: "ABC 123".to_string(),
        })
        .await
        .expect("update_message returned an error");

    assert_eq!(updated.id, created.id, "Expected the id to be kept");
    assert_eq!(updated.author, created.author, "Expected the author to be kept");
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.like_count, created.like_count);
    assert_eq!(updated.content, "ABC 123", "Expected the new content");

    let fetched = service.get_message(&created.id).await?;
    assert_eq!(fetched, updated, "Expected the update to be persisted");

    Ok(())
}

#[tokio::test]
async fn test_update_message_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let repository = CountingMessageRepository::default();
    let service = Service::new(repository.clone(), MockHealthRepository::new());

    let missing = MessageId::from(Uuid::new_v4());
    let error = service
        .update_message(UpdateMessageInput {
            id: missing,
            payload_id: Some(missing),
            content: "ABC 123".to_string(),
        })
        .await
        .expect_err("update_message should have returned an error");

    assert!(matches!(error, CoreError::MessageNotFound { id } if id == missing));
    assert_eq!(repository.saves.load(Ordering::SeqCst), 0, "Expected no write");

    Ok(())
}

#[tokio::test]
async fn test_update_message_fail_id_mismatch() -> Result<(), Box<dyn std::error::Error>> {
    let repository = CountingMessageRepository::default();
    let service = Service::new(repository.clone(), MockHealthRepository::new());
    let created = service.create_message(jose_says("hello")).await?;

    let error = service
        .update_message(UpdateMessageInput {
            id: created.id,
            payload_id: Some(MessageId::from(Uuid::new_v4())),
            content: "ABC 123".to_string(),
        })
        .await
        .expect_err("update_message should have returned an error");

    assert!(error.is_not_found(), "Expected a not found family error");
    assert_eq!(
        error.to_string(),
        "Updated message does not carry the correct id"
    );
    assert_eq!(repository.saves.load(Ordering::SeqCst), 0, "Expected no write");

    let unchanged = service.get_message(&created.id).await?;
    assert_eq!(unchanged.content, "hello", "Expected content to be untouched");

    Ok(())
}

#[tokio::test]
async fn test_update_message_fail_missing_payload_id() -> Result<(), Box<dyn std::error::Error>> {
    let service = service_with(MockMessageRepository::new());
    let created = service.create_message(jose_says("hello")).await?;

    let error = service
        .update_message(UpdateMessageInput {
            id: created.id,
            payload_id: None,
            content: "ABC 123".to_string(),
        })
        .await
        .expect_err("update_message should have returned an error");

    assert!(matches!(error, CoreError::MessageIdMismatch { id } if id == created.id));

    Ok(())
}

#[tokio::test]
async fn test_update_message_fail_empty_content() -> Result<(), Box<dyn std::error::Error>> {
    let service = service_with(MockMessageRepository::new());
    let created = service.create_message(jose_says("hello")).await?;

    let error = service
        .update_message(UpdateMessageInput {
            id: created.id,
            payload_id: Some(created.id),
            content: " ".to_string(),
        })
        .await
        .expect_err("update_message should have returned an error");

    assert!(matches!(error, CoreError::InvalidMessageContent));

    Ok(())
}

// == Delete Message Tests ==

#[tokio::test]
async fn test_delete_message_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = service_with(MockMessageRepository::new());
    let created = service.create_message(jose_says("hello")).await?;

    service
        .delete_message(&created.id)
        .await
        .expect("delete_message returned an error");

    let error = service
        .get_message(&created.id)
        .await
        .expect_err("deleted message should not be found");
    assert!(matches!(error, CoreError::MessageNotFound { .. }));

    Ok(())
}

#[tokio::test]
async fn test_delete_message_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = service_with(MockMessageRepository::new());

    let missing = MessageId::from(Uuid::new_v4());
    let error = service
        .delete_message(&missing)
        .await
        .expect_err("delete_message should have returned an error");

    assert!(matches!(error, CoreError::MessageNotFound { id } if id == missing));

    Ok(())
}

// == List Messages Tests ==

#[tokio::test]
async fn test_list_messages_with_pagination() -> Result<(), Box<dyn std::error::Error>> {
    let service = service_with(MockMessageRepository::new());

    for i in 1..=25 {
        service.create_message(jose_says(&format!("Message {}", i))).await?;
    }

    let (first, total) = service.list_messages(&GetPaginated::default()).await?;
    assert_eq!(first.len(), 10, "Expected 10 messages on the first page");
    assert_eq!(total, 25, "Expected total count to be 25");
    assert_eq!(first[0].content, "Message 1", "Expected insertion order");

    let (last, total) = service.list_messages(&GetPaginated::new(2, 10)).await?;
    assert_eq!(last.len(), 5, "Expected 5 messages on the last page");
    assert_eq!(total, 25);
    assert_eq!(last[4].content, "Message 25");

    let (beyond, _) = service.list_messages(&GetPaginated::new(3, 10)).await?;
    assert!(beyond.is_empty(), "Expected an empty page past the end");

    Ok(())
}

#[tokio::test]
async fn test_list_messages_unpaged() -> Result<(), Box<dyn std::error::Error>> {
    let service = service_with(MockMessageRepository::new());

    for i in 1..=12 {
        service.create_message(jose_says(&format!("Message {}", i))).await?;
    }

    let (messages, total) = service.list_messages(&GetPaginated::unpaged()).await?;

    assert_eq!(messages.len(), 12, "Expected every message");
    assert_eq!(total, 12);

    Ok(())
}

#[tokio::test]
async fn test_list_messages_empty() -> Result<(), Box<dyn std::error::Error>> {
    let service = service_with(MockMessageRepository::new());

    let (messages, total) = service.list_messages(&GetPaginated::default()).await?;

    assert!(messages.is_empty(), "Expected empty message list");
    assert_eq!(total, 0, "Expected total count to be 0");

    Ok(())
}

// == Storage Failure Tests ==

#[tokio::test]
async fn test_storage_errors_are_propagated() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(FailingMessageRepository, MockHealthRepository::new());
    let id = MessageId::from(Uuid::new_v4());

    let errors = [
        service.create_message(jose_says("hello")).await.err(),
        service.get_message(&id).await.err(),
        service
            .update_message(UpdateMessageInput {
                id,
                payload_id: Some(id),
                content: "ABC 123".to_string(),
            })
            .await
            .err(),
        service.delete_message(&id).await.err(),
        service.list_messages(&GetPaginated::default()).await.err(),
    ];

    for error in errors {
        assert!(
            matches!(error, Some(CoreError::DatabaseError { ref msg }) if msg == "connection refused"),
            "Expected the storage error unchanged, got {:?}",
            error
        );
    }

    Ok(())
}
