//! BDD test world for the continuum server

use std::sync::Arc;

use continuum::config::Config;
use continuum::io::{HttpClient, HttpResponse};
use continuum_app::api::TimeSeriesPoint;
use continuum_app::state::{DetailModal, Ticket};
use cucumber::World;
use tokio::sync::RwLock;

use crate::steps::display_steps::Classification;

/// A canned backend response, matched by URL suffix
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub path: String,
    pub status: u16,
    pub body: String,
}

/// An HTTP client that records requested URLs and answers from canned
/// responses; unknown URLs get a 404
#[derive(Debug, Default)]
pub struct StubHttpClient {
    pub responses: RwLock<Vec<CannedResponse>>,
    pub requests: RwLock<Vec<String>>,
}

impl StubHttpClient {
    pub async fn respond(&self, path: &str, status: u16, body: impl Into<String>) {
        self.responses.write().await.push(CannedResponse {
            path: path.to_string(),
            status,
            body: body.into(),
        });
    }
}

#[async_trait::async_trait]
impl HttpClient for StubHttpClient {
    async fn get(&self, url: &str) -> continuum::Result<HttpResponse> {
        self.requests.write().await.push(url.to_string());
        let responses = self.responses.read().await;
        let response = responses
            .iter()
            .rev()
            .find(|r| url.ends_with(&r.path))
            .map(|r| HttpResponse {
                status: r.status,
                body: r.body.clone(),
            })
            .unwrap_or(HttpResponse {
                status: 404,
                body: String::new(),
            });
        Ok(response)
    }
}

pub type SensorModal = DetailModal<String, Vec<TimeSeriesPoint>>;

#[derive(Debug, Default, World)]
pub struct ContinuumWorld {
    // Page rendering
    pub backend: Arc<StubHttpClient>,
    pub response_status: Option<u16>,
    pub response_body: Option<String>,

    // Configuration
    pub config_dir: Option<tempfile::TempDir>,
    pub config_result: Option<continuum::Result<Config>>,

    // Detail modal
    pub modal: SensorModal,
    pub tickets: Vec<Ticket>,

    // Display rules
    pub display: Classification,
}
