//! Word enumeration over a trie subtree.

use super::node::TrieNode;

/// Iterator over the words stored below a trie node, in lexicographic order.
///
/// Produced by [`Trie::iter`](super::Trie::iter) and
/// [`Trie::prefixed`](super::Trie::prefixed). Each yielded word includes the
/// prefix used to reach the starting node.
pub struct Words<'a> {
    // Stack of (node, action): action 0 = visit the node itself,
    // action k > 0 = descend into child k - 1.
    stack: Vec<(&'a TrieNode, usize)>,
    // Prefix plus one char per frame below the start node.
    key_buf: String,
}

impl<'a> Words<'a> {
    pub(crate) fn new(start: Option<&'a TrieNode>, prefix: &str) -> Self {
        Self {
            stack: start.map(|node| (node, 0)).into_iter().collect(),
            key_buf: prefix.to_owned(),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len();
            let frame = self.stack.last_mut()?;
            let node = frame.0;

            if frame.1 == 0 {
                frame.1 = 1;
                if node.terminal {
                    return Some(self.key_buf.clone());
                }
                continue;
            }

            match node.children.get(frame.1 - 1) {
                Some((ch, child)) => {
                    // Resume at the following sibling once this child is exhausted.
                    frame.1 += 1;
                    self.key_buf.push(*ch);
                    self.stack.push((child, 0));
                }
                None => {
                    // Subtree exhausted; the start node has no char of its own to pop.
                    self.stack.pop();
                    if depth > 1 {
                        self.key_buf.pop();
                    }
                }
            }
        }
    }
}

impl core::iter::FusedIterator for Words<'_> {}
