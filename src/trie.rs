use std::fmt;

use tracing::trace;

use crate::config::Config;
use crate::node::{Removal, TrieNode};

// =============================================================================
// Trie
// =============================================================================

/// A set of words stored as a character trie.
///
/// Shared prefixes share nodes. Deleting a word unlinks every trailing node
/// that no longer lies on the path of another stored word, so the tree never
/// holds dangling branches.
#[derive(Clone)]
pub struct Trie {
    root: TrieNode,
    config: Config,
    count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            root: TrieNode::root(),
            config,
            count: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of stored words.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of nodes in the tree, counting the root.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    pub fn clear(&mut self) {
        self.root = TrieNode::root();
        self.count = 0;
    }

    /// Store `word`. Returns `false` if it was already present.
    ///
    /// The empty string is a valid word; it marks the root.
    pub fn insert(&mut self, word: &str) -> bool {
        let node = self.root.descend_or_create(word);
        if node.end_of_word {
            trace!(word, "word already present");
            return false;
        }
        node.end_of_word = true;
        self.count += 1;
        trace!(word, len = self.count, "inserted word");
        true
    }

    /// Whether `word` was inserted as a complete word (not merely a prefix).
    pub fn search(&self, word: &str) -> bool {
        self.root
            .descend(word)
            .is_some_and(TrieNode::is_end_of_word)
    }

    /// Whether any stored word starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        // Pruning keeps every non-root node on some word's path; the root is
        // always reachable, so it counts only while it still serves a word.
        self.root
            .descend(prefix)
            .is_some_and(|node| node.end_of_word || !node.is_leaf())
    }

    /// Remove `word`, pruning nodes that only served it.
    ///
    /// Returns `true` if the word was stored. Deleting a word that is only a
    /// prefix of stored words leaves the tree unchanged.
    pub fn delete(&mut self, word: &str) -> bool {
        let removed = match self.root.remove(word) {
            Removal::NotFound => false,
            // The root is owned by the trie and is never unlinked.
            Removal::Prune | Removal::Retain => true,
        };
        if removed {
            self.count -= 1;
        }
        trace!(word, removed, len = self.count, "delete");
        removed
    }

    /// Every stored word that starts with `prefix`, `prefix` included if it
    /// is itself a word.
    ///
    /// Words come out in depth-first order with children visited by
    /// ascending character, which is lexicographic order over `char`s. The
    /// result is capped by [`Config::max_suggestions`].
    pub fn auto_suggest(&self, prefix: &str) -> Vec<String> {
        let words = self.words_with_prefix(prefix);
        match self.config.max_suggestions {
            Some(limit) => words.take(limit).collect(),
            None => words.collect(),
        }
    }

    /// Corrections for `word`: the longest prefix of `word` that is a stored
    /// word, or nothing if no prefix qualifies.
    ///
    /// `word` counts as its own prefix. Prefixes shorter than
    /// [`Config::min_spelling_prefix`] characters are ignored.
    pub fn spelling_suggestions(&self, word: &str) -> Vec<String> {
        let min = self.config.min_spelling_prefix;
        let mut best = None;
        let mut node = &self.root;

        if min == 0 && node.end_of_word {
            best = Some(0);
        }
        for (depth, (offset, c)) in word.char_indices().enumerate() {
            match node.child(c) {
                Some(child) => node = child,
                None => break,
            }
            if node.end_of_word && depth + 1 >= min {
                best = Some(offset + c.len_utf8());
            }
        }

        best.map(|end| vec![word[..end].to_owned()])
            .unwrap_or_default()
    }

    /// Iterate over all stored words in lexicographic order.
    pub fn words(&self) -> Words<'_> {
        self.words_with_prefix("")
    }

    /// Iterate lazily over the stored words starting with `prefix`.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        let stack = match self.root.descend(prefix) {
            Some(node) => vec![Frame { node, edge: None }],
            None => Vec::new(),
        };
        Words {
            stack,
            buffer: String::from(prefix),
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.words()).finish()
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

// =============================================================================
// Iteration
// =============================================================================

struct Frame<'a> {
    node: &'a TrieNode,
    /// Character leading into `node` and the buffer length before it.
    /// `None` for the starting node, whose path is already in the buffer.
    edge: Option<(char, usize)>,
}

/// Depth-first iterator over stored words, see [`Trie::words_with_prefix`].
pub struct Words<'a> {
    stack: Vec<Frame<'a>>,
    buffer: String,
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(Frame { node, edge }) = self.stack.pop() {
            if let Some((c, parent_len)) = edge {
                self.buffer.truncate(parent_len);
                self.buffer.push(c);
            }

            let len = self.buffer.len();
            for (&c, child) in node.children.iter().rev() {
                self.stack.push(Frame {
                    node: child,
                    edge: Some((c, len)),
                });
            }

            if node.end_of_word {
                return Some(self.buffer.clone());
            }
        }
        None
    }
}
