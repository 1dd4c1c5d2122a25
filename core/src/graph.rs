//! Adjacency-list storage for undirected graphs with a fixed node count

use crate::errors::{GraphError, GraphResult};
use crate::types::{Edge, Node};

/// Undirected graph over nodes `0..node_count`.
///
/// Every edge `(u, v)` is stored in both directions, so `v` appears in the
/// neighbourhood of `u` and `u` in the neighbourhood of `v`. Self-loops and
/// parallel edges are kept as given; a self-loop `(u, u)` lists `u` twice in
/// its own neighbourhood.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Node>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph with `node_count` isolated nodes
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edges: Vec::new(),
        }
    }

    /// Create a graph from a signed node count, rejecting negative values
    pub fn try_new(node_count: i64) -> GraphResult<Self> {
        let node_count =
            usize::try_from(node_count).map_err(|_| GraphError::NegativeNodeCount(node_count))?;
        Ok(Self::new(node_count))
    }

    /// Build a graph from a signed node count and signed endpoint pairs.
    ///
    /// Fails on the first invalid endpoint; negative endpoints are out of range.
    pub fn from_edge_list<I>(node_count: i64, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut graph = Self::try_new(node_count)?;
        for (u, v) in edges {
            let (iu, iv) = graph.checked_endpoints(u, v)?;
            graph.push_edge(iu, iv);
        }
        Ok(graph)
    }

    /// Add the undirected edge `(u, v)`.
    ///
    /// Both endpoints are checked before anything is written, so a rejected
    /// edge leaves the graph untouched.
    pub fn add_edge(&mut self, u: Node, v: Node) -> GraphResult<()> {
        let n = self.node_count();
        if u >= n || v >= n {
            return Err(GraphError::EndpointOutOfRange {
                u: saturating_signed(u),
                v: saturating_signed(v),
                node_count: n,
            });
        }
        self.push_edge(u, v);
        Ok(())
    }

    /// Add several edges, stopping at the first invalid one
    pub fn add_edges<I, E>(&mut self, edges: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        for edge in edges {
            let Edge(u, v) = edge.into();
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges inserted, counting parallel edges and self-loops individually
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Neighbours of `u` in insertion order.
    ///
    /// # Panics
    /// Panics if `u >= node_count()`.
    pub fn neighbors(&self, u: Node) -> &[Node] {
        &self.adjacency[u]
    }

    /// Iterate over all node indices
    pub fn nodes(&self) -> std::ops::Range<Node> {
        0..self.node_count()
    }

    /// Each inserted edge once, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    fn checked_endpoints(&self, u: i64, v: i64) -> GraphResult<(Node, Node)> {
        let n = self.node_count();
        let in_range = |x: i64| usize::try_from(x).ok().filter(|&x| x < n);
        match (in_range(u), in_range(v)) {
            (Some(iu), Some(iv)) => Ok((iu, iv)),
            _ => Err(GraphError::EndpointOutOfRange { u, v, node_count: n }),
        }
    }

    fn push_edge(&mut self, u: Node, v: Node) {
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.edges.push(Edge(u, v));
    }
}

fn saturating_signed(x: usize) -> i64 {
    i64::try_from(x).unwrap_or(i64::MAX)
}
