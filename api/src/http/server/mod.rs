use axum::{
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use messages_core::domain::common::CoreError;
use thiserror::Error;

pub mod app_state;
pub mod response;

pub use app_state::AppState;
pub use response::Response;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-side failure; the text is returned to the caller as is
    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    InternalServerError,

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Startup error: {0}")]
    StartupError(String),
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::MessageNotFound { .. }
            | CoreError::MessageIdMismatch { .. }
            | CoreError::InvalidMessageAuthor
            | CoreError::InvalidMessageContent => ApiError::BadRequest(error.to_string()),
            CoreError::Unhealthy | CoreError::ServiceUnavailable(_) => {
                tracing::warn!(error = %error, "service unavailable");
                ApiError::ServiceUnavailable
            }
            CoreError::DatabaseError { ref msg } => {
                tracing::error!(error = %msg, "storage failure");
                ApiError::InternalServerError
            }
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError | ApiError::StartupError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> AxumResponse {
        (self.status_code(), self.to_string()).into_response()
    }
}
