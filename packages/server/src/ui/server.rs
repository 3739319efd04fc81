//! Server execution logic.

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::usecase::CloseBarUseCase;

use super::{
    handler::{bar_status, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
    sweeper,
};

/// Build the axum router: the WebSocket hub plus the small HTTP API.
///
/// CORS is allow-all by design; the HTTP surface carries nothing
/// sensitive.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/status", get(bar_status))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// The virtual bar server.
///
/// Owns the wired-up application state and the closing sweep; `run`
/// blocks until a shutdown signal arrives.
pub struct Server {
    state: Arc<AppState>,
    close_bar_usecase: Arc<CloseBarUseCase>,
    sweep_interval: Duration,
}

impl Server {
    pub fn new(
        state: Arc<AppState>,
        close_bar_usecase: Arc<CloseBarUseCase>,
        sweep_interval: Duration,
    ) -> Self {
        Self {
            state,
            close_bar_usecase,
            sweep_interval,
        }
    }

    /// Run the server on the given host and port.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server
    /// fails while running.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = app(self.state);

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("meimei-tei listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // The sweeper runs for the life of the server and is aborted
        // on shutdown
        let sweeper_handle = sweeper::spawn(self.close_bar_usecase, self.sweep_interval);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        sweeper_handle.abort();
        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
