//! Backend fetch helpers
//!
//! Every backend call is a GET returning JSON. Non-2xx statuses and bodies
//! that fail to decode are errors like a network failure; callers turn all
//! of them into empty or "not found" views.

use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Template(#[from] crate::endpoints::TemplateError),
}

/// Check the status and decode a response body
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// GET `url` and decode its JSON body
#[cfg(feature = "csr")]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
    decode_response(status, &body)
}

/// Outside the browser build there is no client-side fetch; the server
/// renders entry data itself
#[cfg(not(feature = "csr"))]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    Err(FetchError::Network(format!("no client transport for {url}")))
}

/// GET a URL built from a template; a template error fails like a request
pub async fn get_templated<T: DeserializeOwned>(
    url: Result<String, crate::endpoints::TemplateError>,
) -> Result<T, FetchError> {
    get_json(&url?).await
}
