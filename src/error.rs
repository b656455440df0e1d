//! Error types for graph operations.
//!
//! Trie operations are total and never fail; the only fallible surface is a
//! graph call that receives a node handle the graph did not create.

use thiserror::Error;

/// Error returned by [`Graph`](crate::graph::Graph) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The handle was minted by a different graph, or points past its arena.
    #[error("node {index} does not belong to this graph")]
    InvalidNode {
        /// Arena index carried by the rejected handle.
        index: usize,
    },
}

/// Result alias for graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
