//! Prefix tree (trie) with per-node word counts
//!
//! Each node maps characters to child nodes, so a path from the root spells a
//! prefix. A node additionally records whether a stored word ends there and
//! how many stored words pass through it. The counts make prefix counting
//! O(k) and tell deletion exactly which nodes are still needed.
//!
//! ```text
//! insert "cat", "car", "cart"
//!
//! (root) count 3
//!  └── c  count 3
//!       └── a  count 3
//!            ├── t  count 1 (end)
//!            └── r  count 2 (end)
//!                 └── t  count 1 (end)
//! ```
//!
//! # Time Complexity
//!
//! `k` is the length of the word or prefix.
//!
//! | Operation         | Complexity                  |
//! |-------------------|-----------------------------|
//! | `insert`          | O(k)                        |
//! | `contains`        | O(k)                        |
//! | `starts_with`     | O(k)                        |
//! | `prefix_count`    | O(k)                        |
//! | `prefix_count_dfs`| O(k + subtree size)         |
//! | `delete`          | O(k)                        |
//! | `autocomplete`    | O(k + output)               |
//! | `matches`         | O(k), exponential in `.`s   |
//!
//! # Example
//!
//! ```rust
//! use rust_core_structures::trie::Trie;
//!
//! let mut trie = Trie::from_words(["cat", "car", "cart", "carbon"]);
//!
//! let mut completions = trie.autocomplete("car");
//! completions.sort();
//! assert_eq!(completions, vec!["car", "carbon", "cart"]);
//! assert_eq!(trie.prefix_count("ca"), 4);
//!
//! assert!(trie.delete("cart"));
//! assert!(!trie.contains("cart"));
//! assert!(trie.contains("car"));
//! assert_eq!(trie.prefix_count("ca"), 3);
//! ```

use crate::collections::Stack;
use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Wildcard that matches any single character in [`Trie::matches`]
pub const WILDCARD: char = '.';

/// A node of a [`Trie`]
///
/// A node does not store its own character; the edge label lives in the
/// parent's child map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    is_end: bool,
    /// Number of stored words whose path passes through (or ends at) this node
    count: usize,
}

impl TrieNode {
    /// Returns true if a stored word ends at this node
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Returns the number of stored words having this node's path as a prefix
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the child reached through `ch`
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Iterates over the outgoing edges in unspecified order
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }

    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A prefix tree over `char` sequences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    /// The root's count is the number of stored words
    root: TrieNode,
}

impl Trie {
    /// Creates an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a trie holding the given words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    /// Returns the root node
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Returns the number of stored words
    pub fn len(&self) -> usize {
        self.root.count
    }

    /// Returns true if no words are stored
    pub fn is_empty(&self) -> bool {
        self.root.count == 0
    }

    /// Returns the number of nodes, root included
    pub fn node_count(&self) -> usize {
        let mut total = 0;
        let mut stack = Stack::new();
        stack.push(&self.root);
        while let Some(node) = stack.pop() {
            total += 1;
            stack.extend(node.children.values());
        }
        total
    }

    /// Removes every word
    pub fn clear(&mut self) {
        dismantle(std::mem::take(&mut self.root));
    }

    /// Inserts a word, returning false if it was already stored
    ///
    /// Shared prefixes reuse existing nodes; only the missing suffix is created.
    /// Every node on the path, root included, counts the new word.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }

        let mut node = &mut self.root;
        node.count += 1;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
            node.count += 1;
        }
        node.is_end = true;
        true
    }

    /// Returns the node at the end of `prefix`, if that path exists
    pub fn node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    /// Returns true if exactly `word` is stored
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).is_some_and(TrieNode::is_end)
    }

    /// Returns true if the path for `prefix` exists, whether or not a word ends there
    ///
    /// Deletion prunes dead branches, so for a non-empty prefix this means some
    /// stored word starts with it. The empty prefix is the root and always exists.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.node(prefix).is_some()
    }

    /// Counts the stored words starting with `prefix`, using the node counts
    pub fn prefix_count(&self, prefix: &str) -> usize {
        self.node(prefix).map_or(0, TrieNode::count)
    }

    /// Counts the stored words starting with `prefix` by walking the subtree
    ///
    /// Always agrees with [`prefix_count`](Self::prefix_count); kept as the
    /// reference strategy that does not rely on the maintained counts.
    pub fn prefix_count_dfs(&self, prefix: &str) -> usize {
        let Some(start) = self.node(prefix) else {
            return 0;
        };
        let mut words = 0;
        let mut stack = Stack::new();
        stack.push(start);
        while let Some(node) = stack.pop() {
            if node.is_end {
                words += 1;
            }
            stack.extend(node.children.values());
        }
        words
    }

    /// Removes a word, returning false if it was not stored
    ///
    /// A prefix that only exists as part of longer words is not a stored word
    /// and is left alone. On success every node of the word's path loses one
    /// count, and the tail of the path that no other word uses is pruned below
    /// the last node still shared with another word.
    ///
    /// The prune point is found by a read-only walk first, so the trie is
    /// only modified once the word is known to be stored. Cutting the first
    /// unshared edge on the way down removes the same nodes as recording the
    /// path and unlinking empty leaves on the way back up.
    pub fn delete(&mut self, word: &str) -> bool {
        let Some(prune_at) = self.prune_point(word) else {
            return false;
        };

        let mut node = &mut self.root;
        node.count -= 1;
        for (depth, ch) in word.chars().enumerate() {
            if prune_at == Some(depth) {
                if let Some(branch) = node.children.remove(&ch) {
                    dismantle(branch);
                }
                return true;
            }
            // the walk above proved this edge exists, so nothing is created
            node = node.children.entry(ch).or_default();
            node.count -= 1;
        }
        node.is_end = false;
        true
    }

    /// Finds the depth of the first edge of `word` that no other stored word uses
    ///
    /// Returns `None` if `word` is not stored, and `Some(None)` if every edge
    /// of its path is shared so only the end marker goes away.
    fn prune_point(&self, word: &str) -> Option<Option<usize>> {
        let mut node = &self.root;
        let mut prune_at = None;
        for (depth, ch) in word.chars().enumerate() {
            node = node.children.get(&ch)?;
            if prune_at.is_none() && node.count <= 1 {
                prune_at = Some(depth);
            }
        }
        node.is_end.then_some(prune_at)
    }

    /// Replaces `old` with `new`
    ///
    /// Fails with [`Error::WordNotFound`] and leaves the trie unchanged if
    /// `old` is not stored.
    pub fn replace(&mut self, old: &str, new: &str) -> Result<()> {
        if !self.delete(old) {
            return Err(Error::WordNotFound(old.to_owned()));
        }
        self.insert(new);
        Ok(())
    }

    /// Returns every stored word, in unspecified order
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len());
        collect_words(&self.root, String::new(), &mut words);
        words
    }

    /// Returns every stored word starting with `prefix`, in unspecified order
    ///
    /// Returns an empty vector if no word has that prefix.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(start) = self.node(prefix) {
            words.reserve(start.count);
            collect_words(start, prefix.to_owned(), &mut words);
        }
        words
    }

    /// Returns suggestions for every prefix of `search_word`, as it is typed
    ///
    /// Entry `i` holds at most `limit` lexicographically smallest stored words
    /// starting with the first `i + 1` characters of `search_word`.
    pub fn suggestions(&self, search_word: &str, limit: usize) -> Vec<Vec<String>> {
        search_word
            .char_indices()
            .map(|(start, ch)| {
                let mut matches = self.autocomplete(&search_word[..start + ch.len_utf8()]);
                matches.sort_unstable();
                matches.truncate(limit);
                matches
            })
            .collect()
    }

    /// Returns true if a stored word matches `pattern`
    ///
    /// Every [`WILDCARD`] (`.`) in the pattern matches any single character.
    /// Each wildcard tries all children of the current node, stopping at the
    /// first full match, so patterns with many wildcards are exponential in
    /// the worst case.
    pub fn matches(&self, pattern: &str) -> bool {
        let pattern: SmallVec<[char; 32]> = pattern.chars().collect();
        matches_from(&self.root, &pattern)
    }

    /// Returns the shortest stored word that is a prefix of `word`
    ///
    /// The returned slice borrows from `word`. An empty stored word is not
    /// considered a root.
    pub fn shortest_prefix_of<'w>(&self, word: &'w str) -> Option<&'w str> {
        let mut node = &self.root;
        for (start, ch) in word.char_indices() {
            node = node.children.get(&ch)?;
            if node.is_end {
                return Some(&word[..start + ch.len_utf8()]);
            }
        }
        None
    }

    /// Rewrites every space-separated word of `sentence` as its shortest stored prefix
    ///
    /// Words without a stored prefix are kept as they are.
    pub fn replace_with_roots(&self, sentence: &str) -> String {
        sentence
            .split(' ')
            .map(|word| self.shortest_prefix_of(word).unwrap_or(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Frees a subtree one node at a time
///
/// Dropping a node directly recurses once per level, which overflows the
/// stack for very long words.
fn dismantle(node: TrieNode) {
    let mut stack = Stack::new();
    stack.push(node);
    while let Some(mut node) = stack.pop() {
        stack.extend(node.children.drain().map(|(_, child)| child));
    }
}

impl Drop for Trie {
    fn drop(&mut self) {
        dismantle(std::mem::take(&mut self.root));
    }
}

/// Collects every word ending in the subtree of `start`, prefixed with `path`
fn collect_words(start: &TrieNode, path: String, words: &mut Vec<String>) {
    let mut stack = Stack::new();
    stack.push((start, path));
    while let Some((node, path)) = stack.pop() {
        for (&ch, child) in &node.children {
            let mut next = String::with_capacity(path.len() + ch.len_utf8());
            next.push_str(&path);
            next.push(ch);
            stack.push((child, next));
        }
        if node.is_end {
            words.push(path);
        }
    }
}

fn matches_from(node: &TrieNode, pattern: &[char]) -> bool {
    let Some((&ch, rest)) = pattern.split_first() else {
        return node.is_end;
    };
    if ch == WILDCARD {
        node.children
            .values()
            .any(|child| matches_from(child, rest))
    } else {
        node.children
            .get(&ch)
            .is_some_and(|child| matches_from(child, rest))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn test_search() {
        let trie = Trie::from_words(["cat", "car", "cart"]);
        assert!(trie.contains("car"));
        assert!(trie.contains("cart"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("x"));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_starts_with() {
        let trie = Trie::from_words(["cat", "car", "cart"]);
        assert!(!trie.starts_with("x"));
        assert!(trie.starts_with("ca"));
        assert!(trie.starts_with("cart"));
        assert!(!trie.starts_with("dog"));
        assert!(trie.starts_with(""));
        assert!(Trie::new().starts_with(""));
    }

    #[test]
    fn test_node_counts() {
        let trie = Trie::from_words(["cat", "car", "cart"]);
        assert_eq!(trie.root().count(), 3);
        assert_eq!(trie.node("ca").map(TrieNode::count), Some(3));
        assert_eq!(trie.node("car").map(TrieNode::count), Some(2));
        assert_eq!(trie.node("cat").map(TrieNode::count), Some(1));
        assert!(trie.node("car").unwrap().is_end());
        assert!(!trie.node("ca").unwrap().is_end());
        // root + c, a, t, r, t
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn test_duplicate_insert_keeps_counts() {
        let mut trie = Trie::new();
        assert!(trie.insert("car"));
        assert!(!trie.insert("car"));
        assert_eq!(trie.prefix_count("car"), 1);
        assert_eq!(trie.prefix_count_dfs("car"), 1);

        assert!(trie.delete("car"));
        assert!(trie.is_empty());
        assert!(trie.root().is_leaf());
    }

    #[test]
    fn test_prefix_count_strategies_agree() {
        let trie = Trie::from_words(["cat", "car", "cart", "carbon", "dog"]);
        for (prefix, expected) in [("ca", 4), ("z", 0), ("car", 3), ("cart", 1), ("", 5), ("d", 1)] {
            assert_eq!(trie.prefix_count(prefix), expected, "prefix {:?}", prefix);
            assert_eq!(trie.prefix_count_dfs(prefix), expected, "prefix {:?}", prefix);
        }
    }

    #[test]
    fn test_delete() {
        let mut trie = Trie::from_words(["app", "apple", "ape", "bat", "batch"]);

        assert!(trie.delete("apple"));
        assert!(trie.delete("app"));
        assert!(!trie.delete("zoo"));
        assert!(trie.delete("ape"));
        assert!(trie.delete("bat"));
        assert!(trie.delete("batch"));
        assert!(!trie.delete("batch"));

        assert!(trie.is_empty());
        assert!(trie.root().is_leaf());
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_delete_prunes_orphaned_branch() {
        let mut trie = Trie::from_words(["app", "apple", "ape"]);
        assert!(trie.delete("apple"));

        assert_eq!(sorted(trie.words()), vec!["ape", "app"]);
        assert!(trie.node("appl").is_none());
        assert!(trie.node("app").unwrap().is_leaf());
        assert!(trie.node("app").unwrap().is_end());
    }

    #[test]
    fn test_delete_decrements_shared_prefix() {
        let mut trie = Trie::from_words(["app", "apple", "ape"]);
        assert!(trie.delete("apple"));

        // counts above the first shared node are decremented too
        assert_eq!(trie.prefix_count("a"), 2);
        assert_eq!(trie.prefix_count("ap"), 2);
        assert_eq!(trie.prefix_count("app"), 1);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_delete_prefix_only_is_rejected() {
        let mut trie = Trie::from_words(["cart"]);
        assert!(!trie.delete("car"));
        assert!(!trie.delete("carts"));
        assert!(trie.contains("cart"));
        assert_eq!(trie.prefix_count("c"), 1);
    }

    #[test]
    fn test_failed_delete_leaves_trie_unchanged() {
        let mut trie = Trie::from_words(["car", "cart", "cat"]);
        let before = trie.clone();
        for missing in ["ca", "carts", "dog", "cab", ""] {
            assert!(!trie.delete(missing), "word {:?}", missing);
            assert_eq!(trie, before);
        }
        assert_eq!(trie.prefix_count("car"), 2);
        assert_eq!(trie.prefix_count_dfs("ca"), 3);
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut trie = Trie::from_words(["cat", "car"]);
        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.insert("cow"));
        assert_eq!(trie.words(), vec!["cow"]);
    }

    #[test]
    fn test_delete_word_with_extensions() {
        let mut trie = Trie::from_words(["car", "cart"]);
        assert!(trie.delete("car"));
        assert!(!trie.contains("car"));
        assert!(trie.contains("cart"));
        assert!(!trie.node("car").unwrap().is_end());
        assert_eq!(trie.prefix_count("car"), 1);
    }

    #[test]
    fn test_empty_word() {
        let mut trie = Trie::new();
        assert!(!trie.contains(""));
        assert!(trie.insert(""));
        assert!(trie.contains(""));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.prefix_count_dfs(""), 1);
        assert!(trie.delete(""));
        assert!(trie.is_empty());
    }

    #[test]
    fn test_words() {
        let trie = Trie::from_words(["dog", "dot", "dove"]);
        assert_eq!(sorted(trie.words()), vec!["dog", "dot", "dove"]);
        assert!(Trie::new().words().is_empty());
    }

    #[test]
    fn test_autocomplete() {
        let trie = Trie::from_words(["cat", "car", "cart", "carbon", "dog"]);
        assert_eq!(sorted(trie.autocomplete("car")), vec!["car", "carbon", "cart"]);
        assert_eq!(
            sorted(trie.autocomplete("ca")),
            vec!["car", "carbon", "cart", "cat"]
        );
        assert_eq!(trie.autocomplete("do"), vec!["dog"]);
        assert!(trie.autocomplete("z").is_empty());
    }

    #[test]
    fn test_suggestions() {
        let trie = Trie::from_words(["cat", "car", "cart", "carbon", "dog"]);
        let steps = trie.suggestions("cart", 3);
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], vec!["car", "carbon", "cart"]);
        assert_eq!(steps[2], vec!["car", "carbon", "cart"]);
        assert_eq!(steps[3], vec!["cart"]);

        let steps = trie.suggestions("dx", 3);
        assert_eq!(steps, vec![vec!["dog".to_string()], vec![]]);
    }

    #[test]
    fn test_wildcard_matches() {
        let trie = Trie::from_words(["cat", "car", "cart", "carbon", "dog"]);
        assert!(trie.matches("c.t"));
        assert!(trie.matches("c.r"));
        assert!(!trie.matches("c.x"));
        assert!(!trie.matches("a."));
        assert!(!trie.matches("c."));
        assert!(trie.matches("c.r..n"));
        assert!(trie.matches("..."));
        assert!(!trie.matches(""));
    }

    #[test]
    fn test_replace_with_roots() {
        let trie = Trie::from_words(["cat", "bat", "ba", "battle", "rat"]);
        assert_eq!(
            trie.replace_with_roots("the cattle was rattled by the battery"),
            "the cat was rat by the ba"
        );
        assert_eq!(trie.shortest_prefix_of("battery"), Some("ba"));
        assert_eq!(trie.shortest_prefix_of("b"), None);
    }

    #[test]
    fn test_replace() {
        let mut trie = Trie::from_words(["code", "coder"]);
        assert_eq!(trie.replace("code", "cope"), Ok(()));
        assert_eq!(sorted(trie.words()), vec!["coder", "cope"]);

        assert_eq!(
            trie.replace("zoo", "zebra"),
            Err(Error::WordNotFound("zoo".to_string()))
        );
        assert!(!trie.contains("zebra"));
    }

    #[test]
    fn test_unicode_words() {
        let trie = Trie::from_words(["žaba", "žena", "čaj"]);
        assert_eq!(trie.prefix_count("ž"), 2);
        assert_eq!(sorted(trie.autocomplete("že")), vec!["žena"]);
        assert_eq!(trie.shortest_prefix_of("čajnik"), Some("čaj"));
        assert_eq!(trie.suggestions("ža", 5)[1], vec!["žaba"]);
    }
}
