//! # `arbor` - Graphs and Tries
//!
//! Two independent in-memory data structures:
//!
//! - [`Graph`]: a weighted directed graph with breadth-first and depth-first
//!   traversal and Dijkstra shortest paths.
//! - [`Trie`]: a prefix tree over `char` sequences with exact and prefix
//!   lookup, prefix enumeration and deletion with pruning.
//!
//! ## Node identity
//!
//! Graph nodes live in an arena owned by their graph and are addressed by
//! [`NodeIdx`] handles. Each graph stamps its own id into the handles it
//! creates; passing a handle to a different graph yields
//! [`GraphError::InvalidNode`] rather than touching an unrelated node.
//!
//! ## Concurrency
//!
//! Both structures are synchronous and mutate through `&mut self`. Share them
//! across threads behind a lock.
//!
//! ## Features
//!
//! - `tracing` (default): emits `trace!`/`debug!` events for insertions,
//!   removals, rejected handles and traversal summaries.
//!
//! ## Example
//!
//! ```rust
//! use arbor::{Graph, Trie};
//!
//! let mut graph: Graph<&str, u32> = Graph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_weighted_edge(a, b, 0).unwrap();
//! graph.add_weighted_edge(b, c, 0).unwrap();
//! graph.add_weighted_edge(a, c, 5).unwrap();
//! assert_eq!(graph.shortest_path(a, c).unwrap(), Some(vec![a, b, c]));
//!
//! let trie: Trie = ["hello", "help", "world"].into_iter().collect();
//! assert_eq!(trie.words_with_prefix("hel"), vec!["hello", "help"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{Trie, TrieNode};
pub use error::{GraphError, Result};
pub use graph::{Graph, NodeIdx};
