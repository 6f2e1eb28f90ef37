use std::net::SocketAddr;

use axum::Router;
use messages_core::{application::MessageRepositories, create_repositories};
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::{Config, StorageBackend},
    http::{ApiError, AppState, api_router, health_router},
};

pub struct App {
    config: Config,
    state: AppState,
    api_router: Router,
    health_router: Router,
}

impl App {
    pub async fn new(config: Config) -> Result<Self, ApiError> {
        let repositories = match config.storage {
            StorageBackend::Postgres => create_repositories(config.database.clone().into())
                .await
                .map_err(|e| ApiError::StartupError(e.to_string()))?,
            StorageBackend::Memory => {
                info!("using in-memory storage, messages will not survive a restart");
                MessageRepositories::in_memory()
            }
        };

        let state = AppState::from(repositories);

        Ok(Self {
            api_router: api_router(state.clone()),
            health_router: health_router(state.clone()),
            state,
            config,
        })
    }

    pub async fn start(&self) -> Result<(), ApiError> {
        let api_addr = SocketAddr::from(([0, 0, 0, 0], self.config.server.api_port));
        let health_addr = SocketAddr::from(([0, 0, 0, 0], self.config.server.health_port));

        let api_listener = bind(api_addr).await?;
        let health_listener = bind(health_addr).await?;

        info!(%api_addr, environment = ?self.config.environment, "API server listening");
        info!(%health_addr, "health server listening");

        let api_server = axum::serve(api_listener, self.api_router.clone())
            .with_graceful_shutdown(shutdown_signal())
            .into_future();
        let health_server = axum::serve(health_listener, self.health_router.clone())
            .with_graceful_shutdown(shutdown_signal())
            .into_future();

        let result = tokio::try_join!(api_server, health_server);

        info!("shutting down, closing storage");
        self.state.shutdown().await;

        result
            .map(|_| ())
            .map_err(|e| ApiError::StartupError(e.to_string()))
    }
}

async fn bind(addr: SocketAddr) -> Result<TcpListener, ApiError> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::StartupError(format!("failed to bind {addr}: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
