//! Continuum - Sensor Continuum dashboard server
//!
//! Renders the dashboard routes on the server with data fetched from the
//! Sensor Continuum API, serves the browser bundle that takes over after the
//! first paint, and exposes health and client configuration endpoints.
#![recursion_limit = "256"]

pub mod backend;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod io;
pub mod render;

pub use config::{load_config, Config};
pub use error::{ContinuumError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::dashboard::AppState;
use crate::io::ReqwestHttpClient;

/// Run the continuum server with the given configuration until ctrl-c
pub async fn run(config: Config) -> Result<()> {
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutdown signal received"),
            Err(e) => tracing::error!("Failed to listen for ctrl-c: {}", e),
        }
        cancel_for_signal.cancel();
    });

    serve(config, cancel).await
}

/// Serve the dashboard until `cancel` fires
pub async fn serve(config: Config, cancel: CancellationToken) -> Result<()> {
    config.validate()?;

    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::new());
    let state = AppState::new(http, config.client_config());
    let router = dashboard::build_router(state, &config.server.site_root);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Dashboard listening on http://{}", listener.local_addr()?);
    tracing::debug!("Serving bundle from {:?}", config.server.site_root.join("pkg"));

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Dashboard stopped");
    Ok(())
}
