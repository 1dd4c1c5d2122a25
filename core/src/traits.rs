//! Core traits defining the seams between the analyzer and its transports

use crate::errors::{CoreResult, PresentationError};
use crate::types::{BridgeReport, GraphRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Core service interface that presentation adapters interact with
#[async_trait]
pub trait BridgeService: Send + Sync {
    /// Validate the request, build the graph and compute its bridges
    async fn analyze(&self, request: GraphRequest) -> CoreResult<BridgeReport>;

    /// Get service health status
    async fn health_check(&self) -> CoreResult<()>;
}

/// Trait for presentation adapters (network transport layers)
#[async_trait]
pub trait PresentationAdapter: Send + Sync {
    /// Start the presentation adapter with a reference to the core service
    async fn start(&self, core_service: Arc<dyn BridgeService>) -> Result<(), PresentationError>;

    /// Stop the presentation adapter gracefully
    async fn stop(&self) -> Result<(), PresentationError>;
}
