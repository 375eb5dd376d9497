//! HTTP routes: server-rendered dashboard pages, static bundle, health and
//! config endpoints

use std::path::Path;
use std::sync::Arc;

use axum::extract::{Path as RoutePath, State};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use continuum_app::state::Screen;
use continuum_app::ClientConfig;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::Backend;
use crate::io::HttpClient;
use crate::render;

/// Dashboard application state
#[derive(Clone)]
pub struct AppState {
    pub backend: Backend,
    pub client: Arc<ClientConfig>,
}

impl AppState {
    pub fn new(http: Arc<dyn HttpClient>, client: ClientConfig) -> Self {
        Self {
            backend: Backend::new(http, client.api.clone()),
            client: Arc::new(client),
        }
    }
}

/// Build the dashboard axum router; `site_root` holds the wasm bundle
/// under `pkg/`
pub fn build_router(state: AppState, site_root: &Path) -> Router {
    Router::new()
        .route("/", get(regions_handler))
        .route("/region/{name}", get(region_handler))
        .route(
            "/macrozone/{region_name}/{macrozone_name}",
            get(macrozone_handler),
        )
        .route("/api/config", get(config_handler))
        .route("/health", get(health_handler))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn regions_handler(State(state): State<AppState>) -> impl IntoResponse {
    let screen = match state.backend.region_list().await {
        Ok(regions) => Screen::Ready(regions),
        Err(_) => Screen::Ready(Vec::new()),
    };
    Html(render::regions_page(&state.client, screen))
}

async fn region_handler(
    State(state): State<AppState>,
    RoutePath(name): RoutePath<String>,
) -> impl IntoResponse {
    tracing::debug!("rendering region {}", name);
    let screen = Screen::from_fetch(state.backend.region(&name).await);
    Html(render::region_page(&state.client, &name, screen))
}

async fn macrozone_handler(
    State(state): State<AppState>,
    RoutePath((region, macrozone)): RoutePath<(String, String)>,
) -> impl IntoResponse {
    tracing::debug!("rendering macrozone {}/{}", region, macrozone);
    let screen = Screen::from_fetch(state.backend.macrozone(&region, &macrozone).await);
    Html(render::macrozone_page(
        &state.client,
        &region,
        &macrozone,
        screen,
    ))
}

async fn config_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.client.as_ref().clone())
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
