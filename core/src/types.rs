//! Core data types for BridgeFinder

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Nodes are numbered `0..node_count`
pub type Node = usize;

/// An ordered pair of nodes.
///
/// For bridges the pair is oriented `(parent, child)` along the DFS tree.
/// Serializes as a two-element array `[u, v]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge(pub Node, pub Node);

impl Edge {
    /// Returns the edge with its smaller endpoint first
    pub fn normalized(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            Edge(self.1, self.0)
        }
    }

    /// Whether this edge connects the same pair of nodes as `other`, ignoring orientation
    pub fn same_endpoints(&self, other: &Edge) -> bool {
        self.normalized() == other.normalized()
    }
}

impl From<(Node, Node)> for Edge {
    fn from((u, v): (Node, Node)) -> Self {
        Edge(u, v)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Graph description as it arrives over the wire.
///
/// Values are kept signed and edges are kept as loose arrays so that negative
/// counts and malformed edges reach validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRequest {
    /// Number of nodes in the graph
    pub nodes: i64,
    /// Undirected edges as `[u, v]` pairs
    #[serde(default)]
    pub edges: Vec<Vec<i64>>,
}

impl GraphRequest {
    /// Create a request from a node count and a list of pairs
    pub fn new(nodes: i64, edges: impl IntoIterator<Item = (i64, i64)>) -> Self {
        Self {
            nodes,
            edges: edges.into_iter().map(|(u, v)| vec![u, v]).collect(),
        }
    }
}

/// Plain bridge list returned by the `/bridges` route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeResponse {
    pub bridges: Vec<Edge>,
}

/// Full result of a single analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeReport {
    /// Identifier assigned to this analysis
    pub request_id: Uuid,
    pub node_count: usize,
    pub edge_count: usize,
    /// Number of connected components, isolated nodes included
    pub component_count: usize,
    /// Bridges in discovery order
    pub bridges: Vec<Edge>,
    pub elapsed_ms: u64,
    pub analyzed_at: DateTime<Utc>,
}

impl From<BridgeReport> for BridgeResponse {
    fn from(report: BridgeReport) -> Self {
        Self { bridges: report.bridges }
    }
}

/// Size limits applied to incoming graphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisLimits {
    /// Maximum number of nodes accepted
    pub max_nodes: Option<usize>,
    /// Maximum number of edges accepted
    pub max_edges: Option<usize>,
}

impl Default for AnalysisLimits {
    fn default() -> Self {
        Self {
            max_nodes: Some(1_000_000),
            max_edges: Some(5_000_000),
        }
    }
}
