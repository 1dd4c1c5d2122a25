//! Request-level analysis: validation, limits, and the in-process service

use crate::bridges::BridgeFinder;
use crate::errors::{CoreError, CoreResult, GraphError, GraphResult};
use crate::graph::Graph;
use crate::traits::BridgeService;
use crate::types::{AnalysisLimits, BridgeReport, GraphRequest};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Instant;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Build a graph from a wire request, enforcing edge arity and `limits`
pub fn build_graph(request: &GraphRequest, limits: &AnalysisLimits) -> GraphResult<Graph> {
    if request.nodes < 0 {
        return Err(GraphError::NegativeNodeCount(request.nodes));
    }

    if let Some(max_nodes) = limits.max_nodes {
        if request.nodes as u64 > max_nodes as u64 {
            return Err(GraphError::LimitExceeded(format!(
                "{} nodes requested, at most {} allowed",
                request.nodes, max_nodes
            )));
        }
    }

    if let Some(max_edges) = limits.max_edges {
        if request.edges.len() > max_edges {
            return Err(GraphError::LimitExceeded(format!(
                "{} edges requested, at most {} allowed",
                request.edges.len(),
                max_edges
            )));
        }
    }

    let pairs = request
        .edges
        .iter()
        .enumerate()
        .map(|(index, edge)| match edge.as_slice() {
            &[u, v] => Ok((u, v)),
            other => Err(GraphError::MalformedEdge { index, len: other.len() }),
        })
        .collect::<GraphResult<Vec<_>>>()?;

    Graph::from_edge_list(request.nodes, pairs)
}

/// Run a complete analysis synchronously
pub fn analyze_request(request: &GraphRequest, limits: &AnalysisLimits) -> CoreResult<BridgeReport> {
    let request_id = Uuid::new_v4();
    let start = Instant::now();

    let graph = build_graph(request, limits).map_err(|e| {
        warn!(%request_id, "rejected graph: {}", e);
        e
    })?;

    debug!(
        %request_id,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "searching for bridges"
    );

    let mut finder = BridgeFinder::new(&graph);
    finder.search();
    let component_count = finder.component_count();
    let bridges = finder.into_bridges();

    let elapsed = start.elapsed();
    info!(
        %request_id,
        bridges = bridges.len(),
        components = component_count,
        "analysis finished in {:?}",
        elapsed
    );

    Ok(BridgeReport {
        request_id,
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        component_count,
        bridges,
        elapsed_ms: elapsed.as_millis() as u64,
        analyzed_at: Utc::now(),
    })
}

/// In-process [`BridgeService`] backed by tokio's blocking pool
#[derive(Debug, Clone, Default)]
pub struct LocalBridgeService {
    limits: AnalysisLimits,
}

impl LocalBridgeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: AnalysisLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &AnalysisLimits {
        &self.limits
    }
}

#[async_trait]
impl BridgeService for LocalBridgeService {
    async fn analyze(&self, request: GraphRequest) -> CoreResult<BridgeReport> {
        let limits = self.limits.clone();
        let (tx, rx) = oneshot::channel();

        // the blocking task cannot be cancelled; a caller that gave up only drops the result
        tokio::task::spawn_blocking(move || {
            let result = analyze_request(&request, &limits);
            if tx.send(result).is_err() {
                warn!("analysis finished after its caller went away, result dropped");
            }
        });

        rx.await
            .map_err(|e| CoreError::Internal(format!("analysis task failed: {}", e)))?
    }

    async fn health_check(&self) -> CoreResult<()> {
        Ok(())
    }
}
