// Copyright (c) 2025 Lau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node storage for the Lau Trie.
//!
//! Nodes live in an arena and link to their children by arena index. The
//! arena owns every node for the lifetime of the trie: nothing is freed on
//! delete. Handles given out to callers are [`NodeId`]s, which also carry the
//! arena they came from, so an id from another trie (or from before a
//! `clear`) is told apart from a live one.

use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use super::alphabet::{index_symbol, ALPHABET_SIZE};

/// Source of arena owner tags. Starts at 1 so tags fit `NonZeroU64`.
static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

fn next_owner() -> NonZeroU64 {
    NonZeroU64::new(NEXT_OWNER.fetch_add(1, Ordering::Relaxed)).unwrap_or(NonZeroU64::MIN)
}

/// Arena index of the root node.
pub(crate) const ROOT_INDEX: usize = 0;

/// Handle to a node inside one trie.
///
/// Only valid for the trie that produced it, and only until that trie is
/// cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    owner: NonZeroU64,
    index: usize,
}

impl NodeId {
    /// Position of this node in its trie's arena.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A node in the Lau Trie.
///
/// Each node stands for one symbol position on a key path. Terminal nodes
/// complete an inserted key and carry its value.
#[derive(Debug, Clone)]
pub struct LauNode<T> {
    /// Arena index of the child per alphabet symbol
    children: [Option<usize>; ALPHABET_SIZE],

    /// Whether the path to this node spells an inserted key
    terminal: bool,

    /// Last value stored here; only reported while `terminal` is set
    value: Option<T>,
}

impl<T> LauNode<T> {
    /// Creates a new empty node.
    pub fn new() -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            terminal: false,
            value: None,
        }
    }

    /// Arena index of the child in slot `index`, if any.
    pub(crate) fn child(&self, index: usize) -> Option<usize> {
        self.children.get(index).copied().flatten()
    }

    /// Present children as `(symbol, arena index)`, in alphabet order.
    pub(crate) fn children(&self) -> impl DoubleEndedIterator<Item = (char, usize)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| child.map(|slot| (index_symbol(index), slot)))
    }

    /// Symbols that have a child below this node, in alphabet order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.children().map(|(symbol, _)| symbol)
    }

    /// Whether this node completes an inserted key.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The value of the key ending here, or `None` if the node is not terminal.
    pub fn value(&self) -> Option<&T> {
        if self.terminal {
            self.value.as_ref()
        } else {
            None
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

impl<T> Default for LauNode<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of every node in one trie.
///
/// Index 0 is the root. Indices are only created by `alloc`, so any index
/// `< len()` is reachable from the root. `owner` is fresh for every new,
/// cloned or cleared arena.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    owner: NonZeroU64,
    nodes: Vec<LauNode<T>>,
}

impl<T: Clone> Clone for NodeArena<T> {
    fn clone(&self) -> Self {
        Self {
            owner: next_owner(),
            nodes: self.nodes.clone(),
        }
    }
}

impl<T> NodeArena<T> {
    /// Creates an arena holding just an empty root.
    pub fn new() -> Self {
        Self {
            owner: next_owner(),
            nodes: vec![LauNode::new()],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Public handle for the node at `index`.
    pub fn id(&self, index: usize) -> NodeId {
        NodeId {
            owner: self.owner,
            index,
        }
    }

    /// Arena index behind `id`, if `id` was issued by this arena and is live.
    pub fn resolve(&self, id: NodeId) -> Option<usize> {
        (id.owner == self.owner && id.index < self.nodes.len()).then_some(id.index)
    }

    pub fn get(&self, id: NodeId) -> Option<&LauNode<T>> {
        self.resolve(id).map(|index| &self.nodes[index])
    }

    /// Node lookup for indices this arena produced.
    pub fn node(&self, index: usize) -> &LauNode<T> {
        &self.nodes[index]
    }

    fn alloc(&mut self) -> usize {
        self.nodes.push(LauNode::new());
        self.nodes.len() - 1
    }

    /// Number of symbols on the path from the root to `index`.
    pub fn depth(&self, index: usize) -> usize {
        let mut depth = 0;
        let mut frontier = vec![(ROOT_INDEX, 0usize)];
        while let Some((cur, level)) = frontier.pop() {
            if cur == index {
                depth = level;
                break;
            }
            frontier.extend(self.nodes[cur].children().map(|(_, child)| (child, level + 1)));
        }
        depth
    }

    /// Walks `path` from `start`, allocating missing children, then marks the
    /// final node terminal with `value`.
    ///
    /// Returns `true` if the key was not terminal before.
    pub fn insert(&mut self, start: usize, path: &[usize], value: T) -> bool {
        let mut cur = start;
        for &index in path {
            cur = match self.nodes[cur].children[index] {
                Some(next) => next,
                None => {
                    let next = self.alloc();
                    self.nodes[cur].children[index] = Some(next);
                    next
                }
            };
        }

        let node = &mut self.nodes[cur];
        let is_new = !node.terminal;
        node.terminal = true;
        node.value = Some(value);
        is_new
    }

    /// Follows `path` from `start` without allocating.
    pub fn descend(&self, start: usize, path: &[usize]) -> Option<usize> {
        path.iter()
            .try_fold(start, |cur, &index| self.nodes[cur].children[index])
    }

    /// Clears the terminal flag at the end of `path`.
    ///
    /// Interior nodes are never pruned, so descendants stay reachable. Returns
    /// `true` if a terminal key was removed.
    pub fn delete(&mut self, start: usize, path: &[usize]) -> bool {
        match self.descend(start, path) {
            Some(index) => {
                let node = &mut self.nodes[index];
                let was_terminal = node.terminal;
                node.terminal = false;
                was_terminal
            }
            None => false,
        }
    }

    /// Collects every terminal key in the subtree at `start`, each prefixed by
    /// `prefix`, in alphabet order.
    pub fn collect<'a>(&'a self, start: usize, prefix: &str) -> Vec<(String, &'a T)> {
        let mut found = Vec::new();
        let mut stack = vec![(start, prefix.to_string())];

        while let Some((index, path)) = stack.pop() {
            let node = &self.nodes[index];
            if let Some(value) = node.value() {
                found.push((path.clone(), value));
            }

            // Reverse push so the smallest symbol is popped first.
            for (symbol, child) in node.children().rev() {
                let mut child_path = String::with_capacity(path.len() + 1);
                child_path.push_str(&path);
                child_path.push(symbol);
                stack.push((child, child_path));
            }
        }

        found
    }

    /// Drops every node except a fresh root. Ids issued before are no longer
    /// accepted.
    pub fn clear(&mut self) {
        self.owner = next_owner();
        self.nodes.clear();
        self.nodes.push(LauNode::new());
    }
}
