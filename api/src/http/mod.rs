use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

use crate::http::{health::routes::health_routes, messages::routes::message_routes};

pub mod health;
pub mod messages;
pub mod server;

pub use server::{ApiError, AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Messages API", description = "Message board CRUD service"),
    tags((name = "messages", description = "Post, read, edit and remove messages"))
)]
pub struct ApiDoc;

/// Public API: message routes plus the OpenAPI UI under `/scalar`.
pub fn api_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(message_routes())
        .split_for_parts();

    router
        .merge(Scalar::with_url("/scalar", api))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub fn health_router(state: AppState) -> Router {
    health_routes().with_state(state)
}
