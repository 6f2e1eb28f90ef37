use sqlx::{PgPool, query_as};

use crate::domain::{
    common::{CoreError, GetPaginated, TotalPaginatedElements},
    message::{
        entities::{Message, MessageId},
        ports::MessageRepository,
    },
};

#[derive(Clone)]
pub struct PostgresMessageRepository {
    pub(crate) pool: PgPool,
}

impl PostgresMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl MessageRepository for PostgresMessageRepository {
    async fn insert(&self, message: Message) -> Result<Message, CoreError> {
        let message = query_as::<_, Message>(
            r#"
            INSERT INTO messages (id, author, content, created_at, like_count)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, author, content, created_at, like_count
            "#,
        )
        .bind(message.id)
        .bind(&message.author)
        .bind(&message.content)
        .bind(message.created_at)
        .bind(message.like_count)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    async fn find_by_id(&self, id: &MessageId) -> Result<Option<Message>, CoreError> {
        let message = query_as::<_, Message>(
            r#"
            SELECT id, author, content, created_at, like_count
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(message)
    }

    async fn save(&self, message: Message) -> Result<Message, CoreError> {
        let id = message.id;

        // Identity columns are never rewritten
        let message = query_as::<_, Message>(
            r#"
            UPDATE messages
            SET content = $1, like_count = $2
            WHERE id = $3
            RETURNING id, author, content, created_at, like_count
            "#,
        )
        .bind(&message.content)
        .bind(message.like_count)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CoreError::MessageNotFound { id })?;

        Ok(message)
    }

    async fn delete(&self, id: &MessageId) -> Result<(), CoreError> {
        let result = sqlx::query(r#"DELETE FROM messages WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::MessageNotFound { id: *id });
        }

        Ok(())
    }

    async fn list(
        &self,
        pagination: &GetPaginated,
    ) -> Result<(Vec<Message>, TotalPaginatedElements), CoreError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await?;

        // A NULL limit means no limit in PostgreSQL
        let (offset, limit) = match pagination.bounds() {
            Some((offset, limit)) => (
                i64::try_from(offset).unwrap_or(i64::MAX),
                Some(i64::try_from(limit).unwrap_or(i64::MAX)),
            ),
            None => (0, None),
        };

        let messages = query_as::<_, Message>(
            r#"
            SELECT id, author, content, created_at, like_count
            FROM messages
            ORDER BY created_at ASC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((messages, total as u64))
    }
}
