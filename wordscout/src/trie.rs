//! Multi-pattern prefix tree used to scan a line for every candidate word
//! in a single pass.
//!
//! Nodes live in a flat arena indexed by `usize`, with each node holding a
//! sparse `char -> child` map. The arena owns every node; the tree itself is
//! just index 0, which keeps ownership trivial and avoids a heap allocation
//! per node beyond its child map.

use std::collections::{HashMap, HashSet};

/// Canonical case-folded form used for matching and keying, never for output.
///
/// Simple normalization only: full internationalized case folding is out of
/// scope for 64-character grid lines.
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase()
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, usize>,
    /// Original-cased literal for words ending at this node.
    word: Option<String>,
}

/// A prefix tree over case-folded candidate words.
///
/// Matching is case-insensitive; the literal reported by [`scan`](Self::scan)
/// is the casing recorded at insertion, never the casing found in the
/// scanned text. Re-inserting a case-insensitive duplicate overwrites the
/// stored literal, so the tree remembers the *last* inserted casing of each
/// word.
#[derive(Debug)]
pub struct WordTrie {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTrie {
    /// Creates an empty tree containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }

    /// Number of distinct (case-insensitive) words inserted.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Inserts a word, walking and creating edges over its case-folded
    /// characters and marking the final node terminal with the literal.
    pub fn insert(&mut self, word: &str) {
        let mut current = 0;
        for ch in fold(word).chars() {
            current = match self.nodes[current].children.get(&ch).copied() {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children.insert(ch, child);
                    child
                }
            };
        }
        if self.nodes[current].word.is_none() {
            self.words += 1;
        }
        // Last insertion wins for the stored literal casing.
        self.nodes[current].word = Some(word.to_string());
    }

    /// Returns every inserted word whose case-folded form occurs as a
    /// contiguous substring of `text`.
    ///
    /// Walks the tree from every start offset, so overlapping occurrences
    /// are all visited; the result is a set, so each word appears once.
    /// O(text length × longest word) per call.
    pub fn scan(&self, text: &str) -> HashSet<String> {
        let folded: Vec<char> = fold(text).chars().collect();
        let mut found = HashSet::new();
        for start in 0..folded.len() {
            let mut current = 0;
            for &ch in &folded[start..] {
                current = match self.nodes[current].children.get(&ch) {
                    Some(&child) => child,
                    None => break,
                };
                if let Some(word) = &self.nodes[current].word {
                    found.insert(word.clone());
                }
            }
        }
        found
    }
}
