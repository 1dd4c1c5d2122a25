//! Data models for the HTTP server

use serde::{Deserialize, Serialize};

/// Re-export core wire types for convenience
pub use bridgefinder_core::types::{BridgeReport, BridgeResponse, Edge, GraphRequest};

/// Body of the bare liveness route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liveness {
    pub status: String,
}

impl Liveness {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liveness_body() {
        let body = serde_json::to_value(Liveness::ok()).unwrap();
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }

    #[test]
    fn test_health_status_creation() {
        let health = HealthStatus::healthy();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
        assert!(!health.timestamp.is_empty());
    }
}
