//! # BridgeFinder Core
//!
//! Graph storage and bridge detection for the BridgeFinder service.
//! Transport layers build a [`GraphRequest`], hand it to a [`BridgeService`]
//! and relay the resulting bridge list; nothing in this crate knows about them.

pub mod bridges;
pub mod errors;
pub mod graph;
pub mod service;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use bridges::{find_bridges, BridgeFinder, Bridges};
pub use errors::{CoreError, GraphError, PresentationError};
pub use graph::Graph;
pub use service::{analyze_request, build_graph, LocalBridgeService};
pub use traits::{BridgeService, PresentationAdapter};
pub use types::{AnalysisLimits, BridgeReport, BridgeResponse, Edge, GraphRequest, Node};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bridges::*;
    pub use crate::errors::*;
    pub use crate::graph::*;
    pub use crate::service::*;
    pub use crate::traits::*;
    pub use crate::types::*;
    pub use async_trait::async_trait;
}
