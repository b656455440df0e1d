//! Collections.
//!
//! - `trie`: prefix tree storing a set of words

pub mod trie;

pub use trie::{Trie, TrieNode};
