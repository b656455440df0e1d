//! Trie nodes and their sorted child lists.

/// A node in the [`Trie`](super::Trie).
///
/// Each node contains:
/// - A flag marking whether the path from the root to this node spells a stored word.
/// - Its children, sorted by the `char` on the edge leading to them.
///
/// Children are owned directly; the tree has no shared or cyclic links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Children sorted by edge label. Maps `char` -> child.
    pub(crate) children: Vec<(char, TrieNode)>,
    /// True if a stored word ends at this node.
    pub(crate) terminal: bool,
}

impl TrieNode {
    /// Creates a new empty node.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            terminal: false,
        }
    }

    /// Returns true if a stored word ends here.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Children in ascending `char` order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(ch, child)| (*ch, child))
    }

    /// Finds the child reached through `ch`.
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|pos| &self.children[pos].1)
    }

    pub(crate) fn child_mut(&mut self, ch: char) -> Option<&mut TrieNode> {
        match self.children.binary_search_by_key(&ch, |&(c, _)| c) {
            Ok(pos) => Some(&mut self.children[pos].1),
            Err(_) => None,
        }
    }

    /// Returns the child for `ch`, creating it at its sorted position if missing.
    pub(crate) fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        let pos = match self.children.binary_search_by_key(&ch, |&(c, _)| c) {
            Ok(pos) => pos,
            Err(pos) => {
                self.children.insert(pos, (ch, TrieNode::new()));
                pos
            }
        };
        &mut self.children[pos].1
    }

    /// Unlinks the child for `ch`.
    pub(crate) fn remove_child(&mut self, ch: char) -> Option<TrieNode> {
        self.children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|pos| self.children.remove(pos).1)
    }

    /// A node that ends no word and leads nowhere carries no information.
    pub(crate) fn is_prunable(&self) -> bool {
        !self.terminal && self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub(crate) fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.subtree_size())
            .sum::<usize>()
    }
}
