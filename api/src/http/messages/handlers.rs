use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use messages_core::domain::{
    common::{GetPaginated, Page},
    message::{
        entities::{CreateMessageRequest, Message, MessageId, UpdateMessageRequest},
        ports::MessageService,
    },
};
use uuid::Uuid;

use crate::http::server::{ApiError, AppState, Response};

pub const MESSAGE_REMOVED: &str = "message removed";

#[utoipa::path(
    post,
    path = "/messages",
    tag = "messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message created successfully", body = Message),
        (status = 400, description = "Bad request - Empty author or content", body = String),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_message(
    State(state): State<AppState>,
    Json(request): Json<CreateMessageRequest>,
) -> Result<Response<Message>, ApiError> {
    let message = state.service.create_message(request.into_input()).await?;
    tracing::info!(id = %message.id, "message created");
    Ok(Response::created(message))
}

#[utoipa::path(
    get,
    path = "/messages/{id}",
    tag = "messages",
    params(
        ("id" = String, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message retrieved successfully", body = Message),
        (status = 400, description = "Message not found", body = String),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_message(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Message>, ApiError> {
    let message = state.service.get_message(&MessageId::from(id)).await?;
    Ok(Response::ok(message))
}

#[utoipa::path(
    get,
    path = "/messages",
    tag = "messages",
    params(
        GetPaginated
    ),
    responses(
        (status = 200, description = "Page of messages retrieved successfully", body = Page<Message>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_messages(
    State(state): State<AppState>,
    Query(pagination): Query<GetPaginated>,
) -> Result<Response<Page<Message>>, ApiError> {
    let (messages, total) = state.service.list_messages(&pagination).await?;
    Ok(Response::ok(Page::new(messages, total, &pagination)))
}

#[utoipa::path(
    put,
    path = "/messages/{id}",
    tag = "messages",
    params(
        ("id" = String, Path, description = "Message ID")
    ),
    request_body = UpdateMessageRequest,
    responses(
        (status = 202, description = "Message updated successfully", body = Message),
        (status = 400, description = "Message not found, id mismatch or empty content", body = String),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_message(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<UpdateMessageRequest>,
) -> Result<Response<Message>, ApiError> {
    let input = request.into_input(MessageId::from(id));
    let message = state.service.update_message(input).await?;
    Ok(Response::accepted(message))
}

#[utoipa::path(
    delete,
    path = "/messages/{id}",
    tag = "messages",
    params(
        ("id" = String, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message deleted successfully", body = String),
        (status = 400, description = "Message not found", body = String),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_message(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.service.delete_message(&MessageId::from(id)).await?;
    tracing::info!(%id, "message deleted");
    Ok((StatusCode::OK, MESSAGE_REMOVED))
}
