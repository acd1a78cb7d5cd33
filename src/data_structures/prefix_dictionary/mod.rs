// Copyright (c) 2025 Wordhoard Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Dictionary Implementation
//!
//! A trie mapping words to meanings with exact lookup, prefix suggestions,
//! logical removal and full enumeration. Words are treated as sequences of
//! `char` units; no case folding or normalization is applied.

mod node;

use node::TrieNode;

/// A prefix tree storing word → meaning associations.
///
/// Key properties:
/// * Re-inserting a word overwrites its meaning
/// * Removal clears the word but keeps the nodes along its path
/// * Suggestions and enumeration are returned in lexicographic order
#[derive(Debug, Default)]
pub struct PrefixDictionary {
    /// The root node, labelled by the empty prefix
    root: TrieNode,
}

impl PrefixDictionary {
    /// Creates an empty dictionary holding only the root node.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    /// Inserts `word` with the given meaning.
    ///
    /// Missing nodes along the path are created. An existing meaning for the
    /// same word is replaced. The empty word is stored on the root.
    pub fn insert<W, M>(&mut self, word: W, meaning: M)
    where
        W: AsRef<str>,
        M: Into<String>,
    {
        let word = word.as_ref();
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }

        let previous = node.meaning.replace(meaning.into());
        tracing::trace!(word, replaced = previous.is_some(), "inserted word");
    }

    /// Looks up the meaning of `word`.
    ///
    /// # Returns
    ///
    /// * `Some(&str)` - The stored meaning.
    /// * `None` - The word was never inserted, was removed, or is only a
    ///   prefix of other stored words.
    pub fn search<W>(&self, word: W) -> Option<&str>
    where
        W: AsRef<str>,
    {
        self.root
            .descend(word.as_ref())
            .and_then(|node| node.meaning.as_deref())
    }

    /// Checks whether `word` is currently stored.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.search(word).is_some()
    }

    /// Returns every stored word that starts with `prefix`, in lexicographic
    /// order. The prefix itself is included when it is a stored word.
    pub fn autocomplete<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let mut suggestions = Vec::new();

        if let Some(start) = self.root.descend(prefix) {
            collect_terminals(start, prefix, |word, _| suggestions.push(word));
        }

        suggestions
    }

    /// Removes `word` from the dictionary.
    ///
    /// Only the terminal marker and meaning are cleared; nodes are never
    /// freed here. Removing an absent word does nothing.
    pub fn remove<W>(&mut self, word: W)
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if let Some(node) = self.root.descend_mut(word) {
            let removed = node.is_terminal();
            node.meaning = None;
            tracing::trace!(word, removed, "removed word");
        }
    }

    /// Discards every node and starts over with a fresh root.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        tracing::trace!("cleared dictionary");
    }

    /// Returns every stored `(word, meaning)` pair, ordered by word.
    pub fn enumerate_all(&self) -> Vec<(String, String)> {
        let mut entries = Vec::new();
        collect_terminals(&self.root, "", |word, meaning| {
            entries.push((word, meaning.to_string()))
        });
        entries
    }

    /// Returns the number of stored words.
    ///
    /// This walks the whole tree, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        let mut count = 0;
        collect_terminals(&self.root, "", |_, _| count += 1);
        count
    }

    /// Checks whether no word is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of allocated nodes, root included.
    ///
    /// Removed words keep their nodes, so this only shrinks on [`clear`].
    ///
    /// [`clear`]: PrefixDictionary::clear
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }
}

impl<W, M> Extend<(W, M)> for PrefixDictionary
where
    W: AsRef<str>,
    M: Into<String>,
{
    fn extend<I: IntoIterator<Item = (W, M)>>(&mut self, iter: I) {
        for (word, meaning) in iter {
            self.insert(word, meaning);
        }
    }
}

impl<W, M> FromIterator<(W, M)> for PrefixDictionary
where
    W: AsRef<str>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (W, M)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

/// Visits every terminal node under `start` in lexicographic order.
///
/// `prefix` is the path-label of `start`. Uses an explicit stack so deep
/// words do not grow the call stack.
fn collect_terminals<'a, F>(start: &'a TrieNode, prefix: &str, mut visit: F)
where
    F: FnMut(String, &'a str),
{
    let mut stack: Vec<(&TrieNode, String)> = vec![(start, prefix.to_string())];

    while let Some((node, word)) = stack.pop() {
        // Push in reverse so the smallest character is popped first.
        for (c, child) in node.sorted_children().into_iter().rev() {
            let mut next = String::with_capacity(word.len() + c.len_utf8());
            next.push_str(&word);
            next.push(c);
            stack.push((child, next));
        }

        if let Some(meaning) = node.meaning.as_deref() {
            visit(word, meaning);
        }
    }
}
