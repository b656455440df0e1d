//! Weighted directed graphs and their traversals.
//!
//! - `weighted_graph`: the arena-backed [`Graph`] and its [`NodeIdx`] handles
//! - `algorithms`: BFS/DFS iterators and Dijkstra shortest path

pub mod algorithms;
pub mod weighted_graph;

pub use algorithms::{Bfs, Dfs};
pub use weighted_graph::{Graph, Node, NodeIdx};
