// Copyright (c) 2025 Lau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lau Trie implementation.
//!
//! A prefix tree over the lowercase ASCII alphabet with a generic value per
//! key. Every node has 26 fixed child slots, so moving one symbol down the
//! tree is a single array lookup.
//!
//! # Features
//!
//! - Batch construction from `(key, value)` pairs.
//! - Incremental stepping that reports whether each position completes a key,
//!   and can continue past complete keys.
//! - Deletion that only unmarks the key, leaving longer keys through it intact.
//! - Sorted prefix completions.
//! - Out-of-alphabet symbols are reported as errors, never mis-indexed.
//!
//! # Example
//!
//! ```
//! use lau_lib::data_structures::lau_trie::LauTrie;
//!
//! let mut trie = LauTrie::build(vec![("cat", 1), ("car", 2), ("cats", 3)]).unwrap();
//!
//! assert!(!trie.step('c').unwrap().is_terminal());
//! assert!(!trie.step('a').unwrap().is_terminal());
//! assert_eq!(trie.step('t').unwrap().value(), Some(&1));
//! assert_eq!(trie.step('s').unwrap().value(), Some(&3));
//!
//! trie.reset();
//! assert_eq!(trie.completions("ca").unwrap(), vec!["car", "cat", "cats"]);
//! ```
//!
//! # Deletion
//!
//! `delete` clears the terminal mark on the key's last node and nothing
//! else. Nodes that no longer lead to any key are kept until the trie is
//! cleared or dropped.

mod alphabet;
mod config;
mod cursor;
mod error;
mod node;

#[cfg(test)]
mod tests;

use tracing::{debug, trace};

pub use alphabet::{is_valid_key, ALPHABET_SIZE};
pub use config::{LauTrieConfig, DEFAULT_MAX_KEY_LEN};
pub use cursor::{LauCursor, StepOutcome};
pub use error::{LauTrieError, LauTrieResult};
pub use node::{LauNode, NodeId};

use alphabet::key_indices;
use cursor::CursorState;
use node::{NodeArena, ROOT_INDEX};

/// An immutable `(key, value)` record used as input to [`LauTrie::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrValuePair<T> {
    /// The key, spelled in the trie alphabet.
    pub key: String,
    /// The value stored for the key.
    pub value: T,
}

impl<T> StrValuePair<T> {
    /// Creates a new pair.
    pub fn new<S: Into<String>>(key: S, value: T) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl<S: Into<String>, T> From<(S, T)> for StrValuePair<T> {
    fn from((key, value): (S, T)) -> Self {
        Self::new(key, value)
    }
}

/// Prefix tree with a built-in traversal cursor.
///
/// Key features:
/// * Fixed 26-way branching, one array lookup per symbol
/// * Stepping through a symbol stream without restarting traversal
/// * Alphabet-ordered completions under any prefix
/// * Independent read-only cursors via [`LauTrie::cursor`]
#[derive(Debug, Clone)]
pub struct LauTrie<T> {
    /// Every node of the tree; the root is the first entry
    arena: NodeArena<T>,

    /// Built-in traversal used by `step` and `reset`
    cursor: CursorState,

    /// Configuration options
    config: LauTrieConfig,

    /// Number of terminal keys
    len: usize,
}

impl<T> LauTrie<T> {
    /// Creates a new empty `LauTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LauTrieConfig::default())
    }

    /// Creates a new empty `LauTrie` with the specified configuration.
    pub fn with_config(config: LauTrieConfig) -> Self {
        Self {
            arena: NodeArena::new(),
            cursor: CursorState::at_root(),
            config,
            len: 0,
        }
    }

    /// Builds a trie from a batch of entries with default configuration.
    ///
    /// Entries are inserted in order, so for duplicate keys the last value
    /// wins. An empty batch yields an empty, usable trie.
    ///
    /// # Errors
    ///
    /// Fails on the first entry whose key is rejected by [`LauTrie::insert`].
    pub fn build<I>(entries: I) -> LauTrieResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<StrValuePair<T>>,
    {
        Self::build_with_config(entries, LauTrieConfig::default())
    }

    /// Builds a trie from a batch of entries with the specified configuration.
    pub fn build_with_config<I>(entries: I, config: LauTrieConfig) -> LauTrieResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<StrValuePair<T>>,
    {
        let mut trie = Self::with_config(config);
        for entry in entries {
            let StrValuePair { key, value } = entry.into();
            trie.insert(&key, value)?;
        }

        debug!(
            keys = trie.len,
            nodes = trie.node_count(),
            "Built trie"
        );
        Ok(trie)
    }

    /// Returns the configuration this trie was created with.
    pub fn config(&self) -> &LauTrieConfig {
        &self.config
    }

    /// Handle to the root node.
    pub fn root(&self) -> NodeId {
        self.arena.id(ROOT_INDEX)
    }

    /// Inserts `key` with `value`, starting at the root.
    ///
    /// Re-inserting an existing key replaces its value without allocating
    /// nodes. The key is checked in full before anything is allocated, so a
    /// rejected key leaves the trie unchanged.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The key was not present before.
    /// * `Ok(false)` - The key was present and its value was replaced.
    /// * `Err(LauTrieError)` - The key has an out-of-alphabet symbol or is too long.
    pub fn insert(&mut self, key: &str, value: T) -> LauTrieResult<bool> {
        self.insert_at(ROOT_INDEX, key, value)
    }

    /// Inserts `key` with `value`, starting at `start` instead of the root.
    ///
    /// The stored key is then the path to `start` followed by `key`, and
    /// that whole path counts against `max_key_len`.
    ///
    /// # Errors
    ///
    /// Returns [`LauTrieError::NodeNotFound`] if `start` was not issued by
    /// this trie, or was issued before the last [`LauTrie::clear`].
    pub fn insert_from(&mut self, start: NodeId, key: &str, value: T) -> LauTrieResult<bool> {
        let start = self.check_node(start)?;
        self.insert_at(start, key, value)
    }

    fn insert_at(&mut self, start: usize, key: &str, value: T) -> LauTrieResult<bool> {
        let depth = if start == ROOT_INDEX {
            0
        } else {
            self.arena.depth(start)
        };
        let length = depth + key.chars().count();
        if length > self.config.max_key_len() {
            return Err(LauTrieError::KeyTooLong {
                key: key.to_string(),
                max_len: self.config.max_key_len(),
            });
        }

        let path = key_indices(key, self.config.fold_case())?;
        let is_new = self.arena.insert(start, &path, value);
        if is_new {
            self.len += 1;
        }

        trace!(key, start, is_new, "Inserted key");
        Ok(is_new)
    }

    /// Removes `key`, starting at the root.
    ///
    /// Only the key itself is unmarked: longer keys running through it stay
    /// reachable, and its nodes are not freed.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The key was present and has been removed.
    /// * `Ok(false)` - The key was not present; nothing changed.
    /// * `Err(LauTrieError)` - The key has an out-of-alphabet symbol.
    pub fn delete(&mut self, key: &str) -> LauTrieResult<bool> {
        self.delete_at(ROOT_INDEX, key)
    }

    /// Removes `key`, starting at `start` instead of the root.
    ///
    /// # Errors
    ///
    /// Returns [`LauTrieError::NodeNotFound`] for an id this trie does not
    /// own, as [`LauTrie::insert_from`] does.
    pub fn delete_from(&mut self, start: NodeId, key: &str) -> LauTrieResult<bool> {
        let start = self.check_node(start)?;
        self.delete_at(start, key)
    }

    fn delete_at(&mut self, start: usize, key: &str) -> LauTrieResult<bool> {
        let path = key_indices(key, self.config.fold_case())?;
        let removed = self.arena.delete(start, &path);
        if removed {
            self.len -= 1;
        }

        trace!(key, start, removed, "Deleted key");
        Ok(removed)
    }

    /// Moves the built-in cursor towards `symbol`.
    ///
    /// If the current node has no child for `symbol`, the cursor stays where
    /// it is and the outcome reports not terminal. Otherwise the cursor moves
    /// and the outcome reports whether the new node completes a key, with its
    /// value if so. Stepping may continue past a complete key.
    ///
    /// # Errors
    ///
    /// Returns [`LauTrieError::InvalidSymbol`] for a symbol outside the
    /// alphabet; the cursor does not move.
    pub fn step(&mut self, symbol: char) -> LauTrieResult<StepOutcome<'_, T>> {
        self.cursor
            .advance(&self.arena, symbol, self.config.fold_case())
    }

    /// Moves the built-in cursor back to the root.
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// The node the built-in cursor stands on.
    pub fn position(&self) -> NodeId {
        self.arena.id(self.cursor.node())
    }

    /// Symbols the built-in cursor has moved through since the last reset.
    pub fn path(&self) -> &str {
        self.cursor.path()
    }

    /// Creates an independent cursor at the root.
    ///
    /// The cursor borrows the trie immutably and does not affect the
    /// built-in cursor.
    pub fn cursor(&self) -> LauCursor<'_, T> {
        LauCursor::new(self)
    }

    /// Retrieves the value stored for `key`.
    pub fn get(&self, key: &str) -> LauTrieResult<Option<&T>> {
        Ok(self
            .locate(key)?
            .and_then(|id| self.arena.get(id))
            .and_then(LauNode::value))
    }

    /// Checks if `key` is present.
    pub fn contains(&self, key: &str) -> LauTrieResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Finds the node at the end of `prefix`, whether or not it completes a key.
    pub fn locate(&self, prefix: &str) -> LauTrieResult<Option<NodeId>> {
        let path = key_indices(prefix, self.config.fold_case())?;
        Ok(self
            .arena
            .descend(ROOT_INDEX, &path)
            .map(|index| self.arena.id(index)))
    }

    /// Returns the node behind `id`, or `None` if `id` belongs to another
    /// trie or predates the last [`LauTrie::clear`].
    pub fn node(&self, id: NodeId) -> Option<&LauNode<T>> {
        self.arena.get(id)
    }

    /// Lists every key starting with `prefix`, in alphabet order.
    ///
    /// The prefix itself is included when it is a key. A prefix that leads
    /// nowhere yields an empty list.
    pub fn completions(&self, prefix: &str) -> LauTrieResult<Vec<String>> {
        Ok(self
            .completions_with_values(prefix)?
            .into_iter()
            .map(|(key, _)| key)
            .collect())
    }

    /// Lists every key starting with `prefix` with its value, in alphabet order.
    pub fn completions_with_values(&self, prefix: &str) -> LauTrieResult<Vec<(String, &T)>> {
        let path = key_indices(prefix, self.config.fold_case())?;
        let Some(start) = self.arena.descend(ROOT_INDEX, &path) else {
            return Ok(Vec::new());
        };

        // Rebuild the prefix from slots so folded input comes back lowercase.
        let normalized: String = path.iter().map(|&i| alphabet::index_symbol(i)).collect();
        Ok(self.arena.collect(start, &normalized))
    }

    /// Returns the number of keys in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated nodes, the root included.
    ///
    /// This never shrinks on delete.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Removes every key and node and resets the built-in cursor.
    ///
    /// Node ids handed out before are rejected afterwards.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.cursor.reset();
        self.len = 0;
    }

    fn check_node(&self, id: NodeId) -> LauTrieResult<usize> {
        self.arena
            .resolve(id)
            .ok_or(LauTrieError::NodeNotFound(id))
    }
}

impl LauTrie<()> {
    /// Builds a trie of plain keys, for when no value is needed.
    pub fn build_keys<I, S>(keys: I, config: LauTrieConfig) -> LauTrieResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::with_config(config);
        for key in keys {
            trie.insert(key.as_ref(), ())?;
        }

        debug!(
            keys = trie.len,
            nodes = trie.node_count(),
            "Built key-only trie"
        );
        Ok(trie)
    }
}

impl<T> Default for LauTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}
