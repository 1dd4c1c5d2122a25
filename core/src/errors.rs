//! Error types for BridgeFinder core operations

use thiserror::Error;

/// Main error type for BridgeFinder core operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised while building or validating a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node count must be non-negative, got {0}")]
    NegativeNodeCount(i64),

    #[error("edge ({u}, {v}) references a node outside [0, {node_count})")]
    EndpointOutOfRange { u: i64, v: i64, node_count: usize },

    #[error("edge #{index} must have exactly two endpoints, got {len}")]
    MalformedEdge { index: usize, len: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}

impl GraphError {
    /// Whether the error was caused by the caller's input rather than a server limit
    pub fn is_validation(&self) -> bool {
        !matches!(self, GraphError::LimitExceeded(_))
    }
}

/// Errors related to presentation adapters
#[derive(Error, Debug)]
pub enum PresentationError {
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type alias for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
