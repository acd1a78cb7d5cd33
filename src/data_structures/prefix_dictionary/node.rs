// Copyright (c) 2025 Wordhoard Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix dictionary.
//!
//! Each node is one character-transition state. A node exclusively owns its
//! children, so dropping the root releases the whole tree.

use std::collections::HashMap;

/// A node in the prefix dictionary.
///
/// A node is terminal exactly when it carries a meaning; there is no way to
/// observe a meaning on a non-terminal node.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Map of characters to child nodes
    pub(crate) children: HashMap<char, TrieNode>,

    /// Meaning stored for the word ending here
    pub(crate) meaning: Option<String>,
}

impl TrieNode {
    /// Creates a new node with no children and no meaning.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether some stored word ends at this node.
    pub(crate) fn is_terminal(&self) -> bool {
        self.meaning.is_some()
    }

    /// Follows `path` from this node, returning the node it ends at.
    pub(crate) fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars()
            .try_fold(self, |node, c| node.children.get(&c))
    }

    /// Mutable counterpart of [`TrieNode::descend`].
    pub(crate) fn descend_mut(&mut self, path: &str) -> Option<&mut TrieNode> {
        let mut node = self;
        for c in path.chars() {
            node = node.children.get_mut(&c)?;
        }
        Some(node)
    }

    /// Children sorted by their transition character.
    pub(crate) fn sorted_children(&self) -> Vec<(char, &TrieNode)> {
        let mut children: Vec<(char, &TrieNode)> =
            self.children.iter().map(|(c, child)| (*c, child)).collect();
        children.sort_unstable_by_key(|(c, _)| *c);
        children
    }

    /// Number of nodes in the subtree rooted here, including this node.
    pub(crate) fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

impl Drop for TrieNode {
    // Tears the subtree down iteratively; the default drop glue would recurse
    // once per character of the longest word.
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_not_terminal() {
        let node = TrieNode::new();
        assert!(!node.is_terminal());
        assert!(node.children.is_empty());
        assert_eq!(node.subtree_size(), 1);
    }

    #[test]
    fn test_descend_follows_children() {
        let mut root = TrieNode::new();
        root.children
            .entry('a')
            .or_default()
            .children
            .entry('b')
            .or_default()
            .meaning = Some("ab".to_string());

        assert!(root.descend("").is_some());
        assert!(root.descend("a").is_some_and(|n| !n.is_terminal()));
        assert!(root.descend("ab").is_some_and(TrieNode::is_terminal));
        assert!(root.descend("abc").is_none());
        assert!(root.descend("b").is_none());
        assert_eq!(root.subtree_size(), 3);
    }

    #[test]
    fn test_sorted_children_ignores_insertion_order() {
        let mut root = TrieNode::new();
        for c in ['z', 'a', 'm', 'b'] {
            root.children.insert(c, TrieNode::new());
        }
        let keys: Vec<char> = root.sorted_children().into_iter().map(|(c, _)| c).collect();
        assert_eq!(keys, vec!['a', 'b', 'm', 'z']);
    }
}
