//! HTTP client for the BridgeFinder API

use crate::config::BridgectlConfig;
use bridgefinder_core::errors::CoreError;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// API client for a BridgeFinder server
pub struct BridgeClient {
    client: Client,
    config: BridgectlConfig,
}

impl BridgeClient {
    /// Create a new API client
    pub fn new(config: BridgectlConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| CoreError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub async fn get(&self, path: &str) -> Result<Response, CoreError> {
        self.send(Method::GET, path, |request| request).await
    }

    /// POST `body` as JSON
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response, CoreError> {
        self.send(Method::POST, path, |request| request.json(body)).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response, CoreError> {
        let url = self.config.api_url(path);
        debug!("{} {}", method, url);

        build(self.client.request(method.clone(), &url))
            .send()
            .await
            .map_err(|e| CoreError::Internal(format!("{} {} failed: {}", method, url, e)))
    }

    /// Handle API response, checking status and parsing JSON
    pub async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, CoreError> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| CoreError::Internal(format!("Failed to parse JSON response: {}", e)))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = error_message(&error_text);

            error!("API error {}: {}", status, message);

            match status.as_u16() {
                400 | 422 => Err(CoreError::Internal(format!("Rejected graph: {}", message))),
                404 => Err(CoreError::Internal("Resource not found".to_string())),
                408 => Err(CoreError::Internal("Request timed out on the server".to_string())),
                413 => Err(CoreError::Internal(format!("Graph too large: {}", message))),
                500..=599 => Err(CoreError::Internal(format!("Server error: {}", message))),
                _ => Err(CoreError::Internal(format!("HTTP error {}: {}", status, message))),
            }
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &BridgectlConfig {
        &self.config
    }
}

/// Error body returned by the server
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

/// Extract the server's error message, falling back to the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = BridgectlConfig::default();
        let client = BridgeClient::new(config).unwrap();
        assert_eq!(client.config().endpoint, "http://localhost:8000");
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"success": false, "data": null, "error": "Invalid graph: bad", "timestamp": "now"}"#;
        assert_eq!(error_message(body), "Invalid graph: bad");
        assert_eq!(error_message("plain failure"), "plain failure");
    }
}
