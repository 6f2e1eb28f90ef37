use axum::{Json, extract::State};
use messages_core::domain::health::port::HealthService;
use serde::Serialize;

use crate::http::server::{ApiError, AppState};

pub mod routes;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.service.check_health().await?;
    Ok(Json(HealthResponse { status: "ok" }))
}
