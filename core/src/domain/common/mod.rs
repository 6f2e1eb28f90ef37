use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

use crate::domain::message::entities::MessageId;

pub mod services;

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("Service is currently unavailable")]
    ServiceUnavailable(String),

    #[error("Message not found")]
    MessageNotFound { id: MessageId },

    /// The update payload does not carry the id it is being stored under
    #[error("Updated message does not carry the correct id")]
    MessageIdMismatch { id: MessageId },

    #[error("Message author cannot be empty")]
    InvalidMessageAuthor,

    #[error("Message content cannot be empty")]
    InvalidMessageContent,

    #[error("Health check failed")]
    Unhealthy,

    #[error("Database error: {msg}")]
    DatabaseError { msg: String },
}

impl CoreError {
    /// True for the errors a client sees as "not found": a missing record, or an
    /// update whose payload id does not match the record it targets.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::MessageNotFound { .. } | CoreError::MessageIdMismatch { .. }
        )
    }
}

impl From<sqlx::Error> for CoreError {
    fn from(error: sqlx::Error) -> Self {
        CoreError::DatabaseError {
            msg: error.to_string(),
        }
    }
}

const DEFAULT_PAGE_SIZE: u32 = 10;

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Zero-based pagination request.
///
/// `unpaged` overrides `page` and `size` and asks for every record at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetPaginated {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
    #[serde(default)]
    pub unpaged: bool,
}

impl Default for GetPaginated {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            unpaged: false,
        }
    }
}

impl GetPaginated {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            unpaged: false,
        }
    }

    pub fn unpaged() -> Self {
        Self {
            unpaged: true,
            ..Self::default()
        }
    }

    /// `(offset, limit)` to apply to the store, or `None` when unpaged.
    ///
    /// The offset saturates at `i64::MAX`, the largest offset SQL stores accept.
    pub fn bounds(&self) -> Option<(u64, u64)> {
        if self.unpaged {
            return None;
        }
        let size = u64::from(self.size.max(1));
        let offset = (u64::from(self.page) * size).min(i64::MAX as u64);
        Some((offset, size))
    }
}

pub type TotalPaginatedElements = u64;

/// A bounded slice of a listing plus the totals needed to walk the rest of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: TotalPaginatedElements,
    pub total_pages: u64,
    pub number: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn new(
        content: Vec<T>,
        total_elements: TotalPaginatedElements,
        pagination: &GetPaginated,
    ) -> Self {
        match pagination.bounds() {
            Some((_, size)) => Self {
                content,
                total_elements,
                total_pages: total_elements.div_ceil(size),
                number: pagination.page,
                size: size as u32,
            },
            None => Self {
                size: content.len() as u32,
                content,
                total_elements,
                total_pages: u64::from(total_elements > 0),
                number: 0,
            },
        }
    }
}
