use std::collections::{btree_map, BTreeMap};
use std::fmt;

/// A single character position in one or more stored words.
///
/// Children are kept in a `BTreeMap` so every walk over the tree visits
/// them in ascending character order. Every walk, including `Clone` and
/// `Drop`, uses an explicit stack, so a single very long word cannot
/// exhaust the call stack.
#[derive(Default)]
pub struct TrieNode {
    pub(crate) character: Option<char>,
    pub(crate) children: BTreeMap<char, Box<TrieNode>>,
    pub(crate) end_of_word: bool,
}

/// Outcome of removing a word below some node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Removal {
    /// The word is not stored; nothing was touched.
    NotFound,
    /// The word was removed and this node no longer serves any word.
    Prune,
    /// The word was removed but this node is still on another word's path.
    Retain,
}

impl TrieNode {
    pub(crate) fn root() -> Self {
        Self::default()
    }

    pub(crate) fn new(character: char) -> Self {
        Self {
            character: Some(character),
            children: BTreeMap::new(),
            end_of_word: false,
        }
    }

    /// Copy of this node's own fields, without its subtree.
    fn detached(&self) -> Self {
        Self {
            character: self.character,
            children: BTreeMap::new(),
            end_of_word: self.end_of_word,
        }
    }

    /// The character on the edge into this node, `None` for the root.
    #[inline]
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Whether the path to this node spells a stored word.
    #[inline]
    pub fn is_end_of_word(&self) -> bool {
        self.end_of_word
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c).map(|b| &**b)
    }

    /// Children in ascending character order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &TrieNode> + '_ {
        self.children.values().map(|b| &**b)
    }

    /// Follow `path` from this node, if every character has a child.
    pub(crate) fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(self, |node, c| node.child(c))
    }

    fn descend_mut(&mut self, mut path: impl Iterator<Item = char>) -> Option<&mut TrieNode> {
        path.try_fold(self, |node, c| node.children.get_mut(&c).map(|b| &mut **b))
    }

    /// Follow `path`, creating missing nodes on the way.
    pub(crate) fn descend_or_create(&mut self, path: &str) -> &mut TrieNode {
        path.chars().fold(self, |node, c| {
            node.children
                .entry(c)
                .or_insert_with(|| Box::new(TrieNode::new(c)))
                .as_mut()
        })
    }

    /// Remove `word` below this node.
    ///
    /// The path is walked once to find the deepest node that must stay (this
    /// node, an end-of-word node, or a branch point); the single chain below
    /// it is then unlinked in one step. `Prune` asks the caller to unlink this
    /// node as well. `NotFound` leaves the tree untouched.
    pub(crate) fn remove(&mut self, word: &str) -> Removal {
        let mut cut: Option<(usize, char)> = None;
        let mut node: &TrieNode = self;
        for (depth, c) in word.chars().enumerate() {
            let Some(child) = node.child(c) else {
                return Removal::NotFound;
            };
            if depth == 0 || node.end_of_word || node.children.len() > 1 {
                cut = Some((depth, c));
            }
            node = child;
        }
        if !node.end_of_word {
            return Removal::NotFound;
        }
        let unlink_chain = node.is_leaf();

        match cut {
            Some((depth, c)) if unlink_chain => {
                if let Some(keep) = self.descend_mut(word.chars().take(depth)) {
                    keep.children.remove(&c);
                }
            }
            _ => {
                if let Some(target) = self.descend_mut(word.chars()) {
                    target.end_of_word = false;
                }
            }
        }

        if self.children.is_empty() && !self.end_of_word {
            Removal::Prune
        } else {
            Removal::Retain
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub(crate) fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        // Post-order: a copy is attached to its parent once all of its own
        // children have been copied.
        type Frame<'a> = (char, btree_map::Iter<'a, char, Box<TrieNode>>, TrieNode);

        let mut stack: Vec<Frame<'_>> =
            vec![('\0', self.children.iter(), self.detached())];
        let mut finished = None;
        while let Some((key, mut children, copy)) = stack.pop() {
            if let Some((&c, child)) = children.next() {
                stack.push((key, children, copy));
                stack.push((c, child.children.iter(), child.detached()));
                continue;
            }
            match stack.last_mut() {
                Some((_, _, parent)) => {
                    parent.children.insert(key, Box::new(copy));
                }
                None => finished = Some(copy),
            }
        }
        finished.unwrap_or_default()
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode>> =
            std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("character", &self.character)
            .field("end_of_word", &self.end_of_word)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
