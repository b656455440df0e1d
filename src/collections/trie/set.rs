//! The [`Trie`] word set.

use serde::{Deserialize, Serialize};

use super::iter::Words;
use super::node::TrieNode;
use crate::trace::trace_event;

/// A prefix tree storing a set of words.
///
/// Words are sequences of Unicode scalar values; each `char` is one edge.
/// Children are kept sorted, so every enumeration is lexicographic by code
/// point.
///
/// ```rust
/// use arbor::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("hello");
/// trie.insert("help");
///
/// assert!(trie.contains("hello"));
/// assert!(!trie.contains("hel"));
/// assert!(trie.starts_with("hel"));
/// assert_eq!(trie.words_with_prefix("hel"), vec!["hello", "help"]);
///
/// assert!(trie.remove("hello"));
/// assert!(trie.contains("help"));
/// ```
///
/// Serializes as its word list. Deserializing rebuilds the tree by inserting
/// each word, so a trie read from untrusted input still has sorted children
/// and an accurate [`len`](Self::len).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Inserts `word`, creating missing nodes along its path.
    ///
    /// Returns whether the word was newly inserted. The empty string is stored
    /// by marking the root.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.child_or_insert(ch);
        }

        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.len += 1;
        trace_event!(trace, word, len = self.len, "inserted word");
        true
    }

    /// Walks the path spelled by `key`.
    fn find(&self, key: &str) -> Option<&TrieNode> {
        key.chars().try_fold(&self.root, |node, ch| node.child(ch))
    }

    /// Returns true if `word` was inserted (and not since removed).
    ///
    /// A word that is only a prefix of stored words is not contained.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(TrieNode::is_terminal)
    }

    /// Alias for [`contains`](Self::contains).
    pub fn search(&self, word: &str) -> bool {
        self.contains(word)
    }

    /// Returns true if `prefix` is a prefix of some path in the trie.
    ///
    /// The empty prefix always matches.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Lazily iterates the stored words beginning with `prefix`.
    pub fn prefixed(&self, prefix: &str) -> Words<'_> {
        Words::new(self.find(prefix), prefix)
    }

    /// All stored words beginning with `prefix`, in lexicographic order.
    ///
    /// Empty when no stored path matches `prefix`.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.prefixed(prefix).collect()
    }

    /// Iterates every stored word in lexicographic order.
    pub fn iter(&self) -> Words<'_> {
        Words::new(Some(&self.root), "")
    }

    /// The longest stored word that is a prefix of `text`.
    pub fn longest_prefix_of<'t>(&self, text: &'t str) -> Option<&'t str> {
        let mut node = &self.root;
        let mut best = node.terminal.then_some(0);

        for (offset, ch) in text.char_indices() {
            match node.child(ch) {
                Some(child) => node = child,
                None => break,
            }
            if node.terminal {
                best = Some(offset + ch.len_utf8());
            }
        }

        best.map(|end| &text[..end])
    }

    /// Removes `word`, pruning nodes that no longer lead to any word.
    ///
    /// Returns false and leaves the trie untouched if `word` is not stored.
    /// Nodes shared with other words, and endpoints of other words, are kept.
    pub fn remove(&mut self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let mut pruned = 0usize;

        if Self::remove_from(&mut self.root, &chars, &mut pruned).is_none() {
            return false;
        }
        self.len -= 1;
        trace_event!(trace, word, pruned, len = self.len, "removed word");
        true
    }

    /// Unmarks the end of `rest` below `node` and unlinks emptied children on
    /// the way back up.
    ///
    /// Returns `None` if the word is absent (nothing has been touched),
    /// otherwise whether `node` itself is now prunable.
    fn remove_from(node: &mut TrieNode, rest: &[char], pruned: &mut usize) -> Option<bool> {
        match rest.split_first() {
            None => {
                if !node.terminal {
                    return None;
                }
                node.terminal = false;
            }
            Some((&ch, tail)) => {
                let child = node.child_mut(ch)?;
                if Self::remove_from(child, tail, pruned)? {
                    node.remove_child(ch);
                    *pruned += 1;
                }
            }
        }
        Some(node.is_prunable())
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl From<Vec<String>> for Trie {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<Trie> for Vec<String> {
    fn from(trie: Trie) -> Self {
        trie.iter().collect()
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
