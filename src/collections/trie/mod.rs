//! Prefix tree (trie) over Unicode scalar values.
//!
//! One node per `char` along each stored word. Children are owned by their
//! parent and kept in a sorted vector, which makes every enumeration
//! lexicographic and lets lookups binary-search the edge labels.

pub mod iter;
pub mod node;
pub mod set;

pub use iter::Words;
pub use node::TrieNode;
pub use set::Trie;
