//! Backend API access for server rendering
//!
//! Fetches the entry entity of each route through the injected
//! [`HttpClient`]. Results use the frontend's [`FetchError`] so they feed
//! straight into [`Screen::from_fetch`](continuum_app::state::Screen::from_fetch).

use std::sync::Arc;

use continuum_app::api::{Macrozone, Region};
use continuum_app::endpoints::{Endpoints, TemplateError};
use continuum_app::fetch::{decode_response, FetchError};
use serde::de::DeserializeOwned;

use crate::io::HttpClient;

#[derive(Clone)]
pub struct Backend {
    http: Arc<dyn HttpClient>,
    endpoints: Endpoints,
}

impl Backend {
    pub fn new(http: Arc<dyn HttpClient>, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    pub async fn region_list(&self) -> Result<Vec<Region>, FetchError> {
        self.fetch(self.endpoints.region_list_url()).await
    }

    pub async fn region(&self, name: &str) -> Result<Region, FetchError> {
        self.fetch(self.endpoints.region_url(name)).await
    }

    pub async fn macrozone(&self, region: &str, name: &str) -> Result<Macrozone, FetchError> {
        self.fetch(self.endpoints.macrozone_url(region, name)).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: Result<String, TemplateError>,
    ) -> Result<T, FetchError> {
        let url = url?;
        let response = self
            .http
            .get(&url)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let result = decode_response(response.status, &response.body);
        if let Err(e) = &result {
            tracing::warn!("backend request {} degraded to empty state: {}", url, e);
        }
        result
    }
}
