//! HTTP presentation layer for BridgeFinder
//!
//! Exposes the bridge analysis over a small axum server: a liveness route,
//! a health route, and the `/bridges` endpoints. Requests are validated by
//! the core service; this crate only maps inputs, outputs and errors.

use async_trait::async_trait;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware as axum_middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use bridgefinder_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

mod handlers;
mod middleware;
mod models;

pub use models::*;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    /// Server bind address
    pub bind_address: SocketAddr,
    /// Enable permissive CORS
    pub enable_cors: bool,
    /// Request timeout in seconds
    pub request_timeout: u64,
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8000)),
            enable_cors: true,
            request_timeout: 30,
            max_body_bytes: 64 * 1024 * 1024,
        }
    }
}

/// axum-based presentation adapter
pub struct HttpServer {
    config: HttpServerConfig,
    shutdown: Arc<Notify>,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig) -> Self {
        Self {
            config,
            shutdown: Arc::new(Notify::new()),
        }
    }

    pub fn config(&self) -> &HttpServerConfig {
        &self.config
    }

    /// Build the axum router with all routes and middleware
    pub fn router(&self, core_service: Arc<dyn BridgeService>) -> Router {
        let app_state = AppState {
            core_service,
            config: self.config.clone(),
        };
        let timeout = Duration::from_secs(self.config.request_timeout);

        let mut router = Router::new()
            // Liveness and health
            .route("/", get(handlers::health::liveness))
            .route("/health", get(handlers::health::health_check))
            .route("/v1/health", get(handlers::health::health_check))
            // Bridge analysis
            .route("/bridges", post(handlers::bridges::list_bridges))
            .route("/v1/bridges", post(handlers::bridges::analyze_graph))
            .with_state(app_state)
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes))
            .layer(axum_middleware::from_fn_with_state(
                timeout,
                middleware::request_timeout,
            ))
            .layer(axum_middleware::from_fn(middleware::request_logging));

        if self.config.enable_cors {
            router = router.layer(CorsLayer::permissive());
        }

        router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }
}

#[async_trait]
impl PresentationAdapter for HttpServer {
    async fn start(&self, core_service: Arc<dyn BridgeService>) -> Result<(), PresentationError> {
        info!("Starting HTTP server on {}", self.config.bind_address);

        let router = self.router(core_service);

        let listener = tokio::net::TcpListener::bind(&self.config.bind_address)
            .await
            .map_err(|e| {
                PresentationError::StartupFailed(format!(
                    "Failed to bind to {}: {}",
                    self.config.bind_address, e
                ))
            })?;

        info!("HTTP server listening on {}", self.config.bind_address);

        let shutdown = self.shutdown.clone();
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.notified().await })
            .await
            .map_err(|e| PresentationError::StartupFailed(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    async fn stop(&self) -> Result<(), PresentationError> {
        info!("Stopping HTTP server");
        // notify_one keeps a permit, so a stop issued before the server is
        // awaiting shutdown still takes effect
        self.shutdown.notify_one();
        Ok(())
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub core_service: Arc<dyn BridgeService>,
    pub config: HttpServerConfig,
}

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error half of every handler's return type
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Convert core errors to HTTP status codes and responses
pub fn handle_core_error(error: CoreError) -> ApiError {
    let (status, message) = match error {
        CoreError::Graph(e) if e.is_validation() => {
            (StatusCode::UNPROCESSABLE_ENTITY, format!("Invalid graph: {}", e))
        }
        CoreError::Graph(e) => (StatusCode::PAYLOAD_TOO_LARGE, format!("Graph too large: {}", e)),
        CoreError::Serialization(_) => (StatusCode::BAD_REQUEST, "Invalid request format".to_string()),
        CoreError::Configuration(msg) => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Configuration error: {}", msg))
        }
        CoreError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Internal error: {}", msg)),
    };

    if status.is_server_error() {
        error!("API error: {} - {}", status, message);
    } else {
        warn!("API error: {} - {}", status, message);
    }
    (status, Json(ApiResponse::error(message)))
}
