//! Bridge detection via depth-first search with discovery times and low-links.
//!
//! An edge `(u, v)` of the DFS tree, with `u` the parent, is a bridge iff no
//! node in the subtree of `v` has a back edge to `u` or above it, i.e.
//! `low[v] > disc[u]`.
//!
//! The search is iterative. Each stack frame stores the node, its DFS parent
//! and the index of the next neighbour to scan, so descending into a child
//! and resuming the parent afterwards mirrors the recursive formulation
//! exactly, including the order in which bridges are reported. Path-shaped
//! graphs with hundreds of thousands of nodes therefore do not touch the
//! call stack limit.

use crate::graph::Graph;
use crate::types::{Edge, Node};
use tracing::trace;

const UNVISITED: usize = usize::MAX;

/// Computes bridges on graphs
pub trait Bridges {
    /// Returns every bridge once as `(parent, child)` in discovery order
    fn compute_bridges(&self) -> Vec<Edge>;
}

impl Bridges for Graph {
    fn compute_bridges(&self) -> Vec<Edge> {
        find_bridges(self)
    }
}

/// Returns every bridge of `graph` once, oriented `(parent, child)` along the
/// DFS tree, in the order the traversal discovers them.
pub fn find_bridges(graph: &Graph) -> Vec<Edge> {
    let mut finder = BridgeFinder::new(graph);
    finder.search();
    finder.into_bridges()
}

/// State of a single bridge search over a borrowed graph.
///
/// Roots are tried in increasing node order, so every connected component is
/// searched. Once [`search`](Self::search) has run, every node holds its final
/// discovery time and low-link value.
#[derive(Debug)]
pub struct BridgeFinder<'a> {
    graph: &'a Graph,
    time: usize,
    disc: Vec<usize>,
    low: Vec<usize>,
    bridges: Vec<Edge>,
    roots: usize,
    stack: Vec<Frame>,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: Node,
    parent: Option<Node>,
    next_neighbor: usize,
    // Only the first occurrence of the parent is the tree edge itself; any
    // further occurrence is a parallel edge and counts as a back edge.
    parent_edge_skipped: bool,
}

impl Frame {
    fn new(node: Node, parent: Option<Node>) -> Self {
        Self {
            node,
            parent,
            next_neighbor: 0,
            parent_edge_skipped: false,
        }
    }
}

impl<'a> BridgeFinder<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            time: 0,
            disc: vec![UNVISITED; n],
            low: vec![UNVISITED; n],
            bridges: Vec::new(),
            roots: 0,
            stack: Vec::new(),
        }
    }

    /// Runs the search over all components and returns the bridges found.
    ///
    /// Nodes visited by an earlier call are not searched again, so calling
    /// this twice returns the same list.
    pub fn search(&mut self) -> &[Edge] {
        for root in self.graph.nodes() {
            if self.disc[root] == UNVISITED {
                self.roots += 1;
                self.search_from(root);
            }
        }
        &self.bridges
    }

    pub fn into_bridges(self) -> Vec<Edge> {
        self.bridges
    }

    pub fn is_visited(&self, u: Node) -> bool {
        self.disc.get(u).is_some_and(|&d| d != UNVISITED)
    }

    pub fn discovery_time(&self, u: Node) -> Option<usize> {
        self.disc.get(u).copied().filter(|&d| d != UNVISITED)
    }

    pub fn low_link(&self, u: Node) -> Option<usize> {
        self.low.get(u).copied().filter(|&l| l != UNVISITED)
    }

    pub fn visited_count(&self) -> usize {
        self.disc.iter().filter(|&&d| d != UNVISITED).count()
    }

    /// Number of DFS roots, i.e. connected components searched so far
    pub fn component_count(&self) -> usize {
        self.roots
    }

    fn discover(&mut self, u: Node) {
        self.disc[u] = self.time;
        self.low[u] = self.time;
        self.time += 1;
    }

    fn search_from(&mut self, root: Node) {
        let graph = self.graph;

        self.discover(root);
        self.stack.push(Frame::new(root, None));

        while let Some(frame) = self.stack.last_mut() {
            let u = frame.node;

            if let Some(&v) = graph.neighbors(u).get(frame.next_neighbor) {
                frame.next_neighbor += 1;

                if frame.parent == Some(v) && !frame.parent_edge_skipped {
                    frame.parent_edge_skipped = true;
                    continue;
                }

                if self.disc[v] == UNVISITED {
                    // tree edge: descend, the parent resumes at `next_neighbor`
                    self.discover(v);
                    self.stack.push(Frame::new(v, Some(u)));
                } else {
                    self.low[u] = self.low[u].min(self.disc[v]);
                }
                continue;
            }

            let parent = frame.parent;
            self.stack.pop();

            if let Some(p) = parent {
                self.low[p] = self.low[p].min(self.low[u]);

                if self.low[u] > self.disc[p] {
                    trace!(parent = p, child = u, "bridge found");
                    self.bridges.push(Edge(p, u));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(n: usize, edges: &[(Node, Node)]) -> Graph {
        let mut graph = Graph::new(n);
        graph.add_edges(edges.iter().copied()).unwrap();
        graph
    }

    #[test]
    fn test_empty_graph() {
        assert!(find_bridges(&Graph::new(0)).is_empty());
    }

    #[test]
    fn test_single_isolated_node() {
        let graph = Graph::new(1);
        let mut finder = BridgeFinder::new(&graph);

        assert!(finder.search().is_empty());
        assert_eq!(finder.discovery_time(0), Some(0));
        assert_eq!(finder.low_link(0), Some(0));
        assert_eq!(finder.component_count(), 1);
    }

    #[test]
    fn test_single_edge_is_bridge() {
        let graph = graph_with(2, &[(0, 1)]);
        assert_eq!(find_bridges(&graph), vec![Edge(0, 1)]);
    }

    #[test]
    fn test_triangle_has_no_bridges() {
        let graph = graph_with(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(find_bridges(&graph).is_empty());
    }

    #[test]
    fn test_triangle_with_pendant() {
        let graph = graph_with(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        assert_eq!(graph.compute_bridges(), vec![Edge(2, 3)]);
    }

    #[test]
    fn test_two_triangles_visit_every_node() {
        let graph = graph_with(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        let mut finder = BridgeFinder::new(&graph);

        assert!(finder.search().is_empty());
        assert_eq!(finder.visited_count(), 6);
        assert!(graph.nodes().all(|u| finder.is_visited(u)));
        assert_eq!(finder.component_count(), 2);
    }

    #[test]
    fn test_bridge_between_cycles() {
        let graph = graph_with(6, &[(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)]);
        assert_eq!(find_bridges(&graph), vec![Edge(1, 3)]);
    }

    #[test]
    fn test_bridges_reported_in_discovery_order() {
        // two triangles joined by the path 2 - 3 - 4
        let graph = graph_with(
            7,
            &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 6), (6, 4)],
        );
        assert_eq!(find_bridges(&graph), vec![Edge(3, 4), Edge(2, 3)]);
    }

    #[test]
    fn test_star_bridges_follow_adjacency_order() {
        let graph = graph_with(5, &[(0, 3), (0, 1), (0, 4), (0, 2)]);
        assert_eq!(
            find_bridges(&graph),
            vec![Edge(0, 3), Edge(0, 1), Edge(0, 4), Edge(0, 2)]
        );
    }

    #[test]
    fn test_bridges_oriented_parent_to_child() {
        // node 0 is isolated, so the DFS tree of the edge is rooted at 1
        let graph = graph_with(3, &[(2, 1)]);
        assert_eq!(find_bridges(&graph), vec![Edge(1, 2)]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let graph = graph_with(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]);
        let mut finder = BridgeFinder::new(&graph);

        let first = finder.search().to_vec();
        let second = finder.search().to_vec();
        assert_eq!(first, second);
        assert_eq!(first, find_bridges(&graph));
        assert_eq!(first, vec![Edge(3, 4), Edge(2, 3)]);
    }

    #[test]
    fn test_self_loop_is_never_a_bridge() {
        let graph = graph_with(2, &[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(find_bridges(&graph), vec![Edge(0, 1)]);

        let graph = graph_with(1, &[(0, 0)]);
        assert!(find_bridges(&graph).is_empty());
    }

    #[test]
    fn test_parallel_edges_are_not_bridges() {
        let graph = graph_with(2, &[(0, 1), (0, 1)]);
        assert!(find_bridges(&graph).is_empty());

        let graph = graph_with(3, &[(0, 1), (1, 0), (1, 2)]);
        assert_eq!(find_bridges(&graph), vec![Edge(1, 2)]);
    }

    #[test]
    fn test_low_links_on_cycle_with_tail() {
        let graph = graph_with(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        let mut finder = BridgeFinder::new(&graph);
        finder.search();

        for u in 0..3 {
            assert_eq!(finder.low_link(u), Some(0), "node {u} lies on the cycle through 0");
        }
        assert_eq!(finder.discovery_time(3), Some(3));
        assert_eq!(finder.low_link(3), Some(3));
        assert_eq!(finder.discovery_time(4), None);
    }

    #[test]
    fn test_deep_path_does_not_overflow() {
        let n = 200_000;
        let mut graph = Graph::new(n);
        for u in 0..(n - 1) {
            graph.add_edge(u, u + 1).unwrap();
        }

        let bridges = find_bridges(&graph);
        assert_eq!(bridges.len(), n - 1);
        // the deepest tree edge finishes first
        assert_eq!(bridges.first(), Some(&Edge(n - 2, n - 1)));
        assert_eq!(bridges.last(), Some(&Edge(0, 1)));
    }

    #[test]
    fn test_path_bridges_match_edges() {
        for n in [2usize, 5, 10, 15] {
            let mut graph = Graph::new(n);
            for u in 0..(n - 1) {
                graph.add_edge(u, u + 1).unwrap();
            }

            let mut bridges = graph.compute_bridges();
            bridges.sort();
            assert_eq!(bridges, graph.edges().collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_long_cycle_has_no_bridges() {
        let n = 50_000;
        let mut graph = Graph::new(n);
        for u in 0..n {
            graph.add_edge(u, (u + 1) % n).unwrap();
        }
        assert!(find_bridges(&graph).is_empty());
    }
}
