//! `Graph` — a weighted directed graph whose nodes live in an arena.
//!
//! Nodes are stored contiguously in a `Vec` and addressed by [`NodeIdx`]
//! handles. Outgoing edges are kept on the source node only, as an
//! insertion-ordered list of `(target_index, weight)` pairs.
//!
//! Every graph draws a process-unique id at construction and stamps it into
//! each handle it mints, so a handle from another graph is rejected with
//! [`GraphError::InvalidNode`] instead of silently aliasing an unrelated node.
//!
//! # Performance
//! - `add_node`: O(1) amortized
//! - `add_edge`: O(out-degree) (overwrites an existing weight in place)
//! - `weight`: O(out-degree)
//! - `bfs` / `dfs`: O(n + m)
//! - `shortest_path`: O((n + m) log n)

use core::ops::Index;
use core::sync::atomic::{AtomicU64, Ordering};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use super::algorithms::{self, Bfs, Dfs};
use crate::error::{GraphError, Result};
use crate::trace::trace_event;

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of one `Graph` instance.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
struct GraphId(u64);

impl GraphId {
    fn fresh() -> Self {
        Self(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A handle to a node of one specific graph.
///
/// Handles are `Copy` and cheap to pass around; they stay valid for the
/// lifetime of the graph that created them because nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIdx {
    graph: GraphId,
    index: usize,
}

impl NodeIdx {
    #[inline(always)]
    fn new(graph: GraphId, index: usize) -> Self {
        Self { graph, index }
    }

    /// Position of the node in its graph's arena (insertion order).
    #[inline(always)]
    pub fn index(self) -> usize {
        self.index
    }
}

/// A node: its value and its outgoing edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node<T, W> {
    value: T,
    edges: Vec<(usize, W)>,
}

impl<T, W> Node<T, W> {
    fn new(value: T) -> Self {
        Self {
            value,
            edges: Vec::new(),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}

/// A weighted directed graph.
///
/// `T` is the node value, `W` the edge weight. Weights are expected to be
/// non-negative; shortest paths over negative weights are unspecified.
///
/// ```rust
/// use arbor::Graph;
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_weighted_edge(a, b, 4.0).unwrap();
/// graph.add_weighted_edge(b, c, 3.0).unwrap();
/// graph.add_weighted_edge(a, c, 8.0).unwrap();
///
/// let path = graph.shortest_path(a, c).unwrap().unwrap();
/// assert_eq!(path, vec![a, b, c]);
/// ```
///
/// Deserialization checks every edge target against the node list and fails
/// with [`GraphError::InvalidNode`] on the first dangling one. A deserialized
/// graph gets a fresh identity.
#[derive(Debug, Serialize, Deserialize)]
#[serde(try_from = "RawGraph<T, W>")]
pub struct Graph<T, W = f64> {
    #[serde(skip, default = "GraphId::fresh")]
    id: GraphId,
    nodes: Vec<Node<T, W>>,
}

/// Unchecked wire form of a [`Graph`].
#[derive(Deserialize)]
struct RawGraph<T, W> {
    nodes: Vec<Node<T, W>>,
}

impl<T, W> TryFrom<RawGraph<T, W>> for Graph<T, W> {
    type Error = GraphError;

    fn try_from(raw: RawGraph<T, W>) -> Result<Self> {
        let len = raw.nodes.len();
        let dangling = raw
            .nodes
            .iter()
            .flat_map(|node| node.edges.iter())
            .find(|&&(to, _)| to >= len);
        if let Some(&(index, _)) = dangling {
            return Err(GraphError::InvalidNode { index });
        }

        let graph = Self {
            id: GraphId::fresh(),
            nodes: raw.nodes,
        };
        trace_event!(debug, graph = graph.id.0, nodes = len, "loaded graph");
        Ok(graph)
    }
}

impl<T, W> Default for Graph<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> Graph<T, W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            id: GraphId::fresh(),
            nodes: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: GraphId::fresh(),
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::out_degree).sum()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a node holding `value` and returns its handle.
    pub fn add_node(&mut self, value: T) -> NodeIdx {
        let index = self.nodes.len();
        self.nodes.push(Node::new(value));
        trace_event!(trace, graph = self.id.0, index, "added node");
        NodeIdx::new(self.id, index)
    }

    /// Returns true if `node` was created by this graph.
    pub fn contains(&self, node: NodeIdx) -> bool {
        self.resolve(node).is_ok()
    }

    /// Handles of all nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        (0..self.nodes.len()).map(move |index| NodeIdx::new(self.id, index))
    }

    /// The node behind `node`, if it belongs to this graph.
    pub fn node(&self, node: NodeIdx) -> Option<&Node<T, W>> {
        self.resolve(node).ok().map(|index| &self.nodes[index])
    }

    /// The value stored at `node`.
    pub fn value(&self, node: NodeIdx) -> Option<&T> {
        self.node(node).map(Node::value)
    }

    /// Mutable access to the value stored at `node`.
    pub fn value_mut(&mut self, node: NodeIdx) -> Option<&mut T> {
        let index = self.resolve(node).ok()?;
        Some(&mut self.nodes[index].value)
    }

    /// Validates a handle and returns its arena index.
    #[inline]
    pub(crate) fn resolve(&self, node: NodeIdx) -> Result<usize> {
        if node.graph == self.id && node.index < self.nodes.len() {
            Ok(node.index)
        } else {
            trace_event!(debug, graph = self.id.0, index = node.index, "rejected foreign node handle");
            Err(GraphError::InvalidNode { index: node.index })
        }
    }

    #[inline(always)]
    pub(crate) fn handle(&self, index: usize) -> NodeIdx {
        NodeIdx::new(self.id, index)
    }

    /// Outgoing edges of the node at arena position `index`; empty if out of range.
    #[inline]
    pub(crate) fn edges_of(&self, index: usize) -> &[(usize, W)] {
        self.nodes.get(index).map_or(&[], |node| node.edges.as_slice())
    }

    /// Adds or overwrites the directed edge `source -> target` with `weight`.
    ///
    /// Fails with [`GraphError::InvalidNode`] if either endpoint was not
    /// created by this graph. An existing edge keeps its position in the
    /// neighbor order; only its weight changes.
    pub fn add_weighted_edge(&mut self, source: NodeIdx, target: NodeIdx, weight: W) -> Result<()> {
        let u = self.resolve(source)?;
        let v = self.resolve(target)?;

        let edges = &mut self.nodes[u].edges;
        match edges.iter_mut().find(|(to, _)| *to == v) {
            Some(edge) => {
                edge.1 = weight;
                trace_event!(trace, graph = self.id.0, source = u, target = v, "overwrote edge weight");
            }
            None => {
                edges.push((v, weight));
                trace_event!(trace, graph = self.id.0, source = u, target = v, "added edge");
            }
        }
        Ok(())
    }

    /// Traverses the nodes reachable from `start` breadth-first.
    pub fn bfs_iter(&self, start: NodeIdx) -> Result<Bfs<'_, T, W>> {
        let start = self.resolve(start)?;
        Ok(Bfs::new(self, start))
    }

    /// Traverses the nodes reachable from `start` depth-first, in pre-order.
    pub fn dfs_iter(&self, start: NodeIdx) -> Result<Dfs<'_, T, W>> {
        let start = self.resolve(start)?;
        Ok(Dfs::new(self, start))
    }

    /// Nodes reachable from `start` in breadth-first order, `start` first.
    ///
    /// Ties between nodes at the same edge distance follow discovery order,
    /// which in turn follows edge insertion order.
    pub fn bfs(&self, start: NodeIdx) -> Result<Vec<NodeIdx>> {
        let order: Vec<NodeIdx> = self.bfs_iter(start)?.collect();
        trace_event!(debug, graph = self.id.0, visited = order.len(), "bfs complete");
        Ok(order)
    }

    /// Nodes reachable from `start` in depth-first pre-order, `start` first.
    ///
    /// One neighbor's subtree is exhausted before the next neighbor (in edge
    /// insertion order) is entered.
    pub fn dfs(&self, start: NodeIdx) -> Result<Vec<NodeIdx>> {
        let order: Vec<NodeIdx> = self.dfs_iter(start)?.collect();
        trace_event!(debug, graph = self.id.0, visited = order.len(), "dfs complete");
        Ok(order)
    }
}

impl<T, W> Graph<T, W>
where
    W: Copy,
{
    /// Weight of the edge `source -> target`, if present.
    pub fn weight(&self, source: NodeIdx, target: NodeIdx) -> Option<W> {
        let u = self.resolve(source).ok()?;
        let v = self.resolve(target).ok()?;
        self.nodes[u]
            .edges
            .iter()
            .find(|(to, _)| *to == v)
            .map(|&(_, w)| w)
    }

    /// Outgoing edges of `node` as `(neighbor, weight)`, in insertion order.
    pub fn neighbors(&self, node: NodeIdx) -> Result<impl Iterator<Item = (NodeIdx, W)> + '_> {
        let index = self.resolve(node)?;
        Ok(self.nodes[index]
            .edges
            .iter()
            .map(move |&(to, w)| (self.handle(to), w)))
    }
}

impl<T, W> Graph<T, W>
where
    W: Copy + One,
{
    /// Adds or overwrites the edge `source -> target` with unit weight.
    pub fn add_edge(&mut self, source: NodeIdx, target: NodeIdx) -> Result<()> {
        self.add_weighted_edge(source, target, W::one())
    }
}

impl<T, W> Graph<T, W>
where
    W: Copy + PartialOrd + Zero,
{
    /// Minimum-weight path from `start` to `end` using Dijkstra's algorithm.
    ///
    /// Returns `Ok(None)` when `end` is unreachable. `shortest_path(a, a)` is
    /// `Some(vec![a])`. Among equally short tentative distances, the node
    /// added to the graph first is settled first.
    pub fn shortest_path(&self, start: NodeIdx, end: NodeIdx) -> Result<Option<Vec<NodeIdx>>> {
        Ok(self.shortest_path_with_cost(start, end)?.map(|(path, _)| path))
    }

    /// Like [`shortest_path`](Self::shortest_path), also returning the total weight.
    pub fn shortest_path_with_cost(&self, start: NodeIdx, end: NodeIdx) -> Result<Option<(Vec<NodeIdx>, W)>> {
        let s = self.resolve(start)?;
        let t = self.resolve(end)?;
        let found = algorithms::dijkstra(self, s, t)
            .map(|(path, cost)| (path.into_iter().map(|i| self.handle(i)).collect(), cost));
        Ok(found)
    }

    /// Sum of the edge weights along `path`.
    ///
    /// Returns `None` for an empty path or when two consecutive nodes are not
    /// joined by an edge. A single-node path weighs zero.
    pub fn path_weight(&self, path: &[NodeIdx]) -> Option<W> {
        let (first, _) = path.split_first()?;
        self.resolve(*first).ok()?;
        path.windows(2)
            .try_fold(W::zero(), |acc, pair| Some(acc + self.weight(pair[0], pair[1])?))
    }
}

impl<T, W> Index<NodeIdx> for Graph<T, W> {
    type Output = T;

    /// # Panics
    /// Panics if `node` does not belong to this graph.
    fn index(&self, node: NodeIdx) -> &T {
        match self.value(node) {
            Some(value) => value,
            None => panic!("node {} does not belong to this graph", node.index),
        }
    }
}
