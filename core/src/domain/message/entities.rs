use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[sqlx(transparent)]
pub struct MessageId(pub Uuid);

impl MessageId {
    pub fn new() -> Self {
        MessageId(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for MessageId {
    fn from(uuid: Uuid) -> Self {
        MessageId(uuid)
    }
}

impl From<MessageId> for Uuid {
    fn from(message_id: MessageId) -> Self {
        message_id.0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i32,
}

impl Message {
    /// Builds a brand new message: fresh id, current timestamp, no likes.
    ///
    /// The timestamp is truncated to microseconds, the resolution PostgreSQL
    /// stores, so a persisted message reads back identical.
    pub fn new(author: String, content: String) -> Self {
        Self {
            id: MessageId::new(),
            author,
            content,
            created_at: Utc::now().trunc_subsecs(6),
            like_count: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct InsertMessageInput {
    pub author: String,
    pub content: String,
}

/// Body of `POST /messages`. Any other field the caller sends, an `id`
/// included, is ignored.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateMessageRequest {
    pub author: String,
    pub content: String,
}

impl CreateMessageRequest {
    pub fn into_input(self) -> InsertMessageInput {
        InsertMessageInput {
            author: self.author,
            content: self.content,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateMessageInput {
    /// Id the message is looked up by
    pub id: MessageId,
    /// Id carried by the new version of the message
    pub payload_id: Option<MessageId>,
    pub content: String,
}

/// Body of `PUT /messages/{id}`. It must repeat the id of the message it
/// replaces; only `content` is applied.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateMessageRequest {
    #[serde(default)]
    pub id: Option<MessageId>,
    pub content: String,
}

impl UpdateMessageRequest {
    pub fn into_input(self, id: MessageId) -> UpdateMessageInput {
        UpdateMessageInput {
            id,
            payload_id: self.id,
            content: self.content,
        }
    }
}
