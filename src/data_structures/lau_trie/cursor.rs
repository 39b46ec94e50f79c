// Copyright (c) 2025 Lau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Incremental traversal over a Lau Trie.
//!
//! A traversal moves one symbol at a time and reports, after every move,
//! whether it stands on a complete key. It can keep going past a complete
//! key, so a stream of keystrokes can be matched without restarting.
//!
//! [`LauTrie`] carries one built-in traversal (`step`/`reset`). For several
//! independent readers over the same trie, hand each one a [`LauCursor`].

use super::alphabet::symbol_index;
use super::error::{LauTrieError, LauTrieResult};
use super::node::{NodeArena, NodeId, ROOT_INDEX};
use super::LauTrie;

/// What a single step observed.
///
/// The value is only present when the step landed on a terminal node.
#[derive(Debug, PartialEq, Eq)]
pub struct StepOutcome<'a, T> {
    moved: bool,
    value: Option<&'a T>,
    terminal: bool,
}

impl<'a, T> StepOutcome<'a, T> {
    fn stalled() -> Self {
        Self {
            moved: false,
            value: None,
            terminal: false,
        }
    }

    /// Whether the traversal now stands on a complete key.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Value of the complete key, if the step landed on one.
    pub fn value(&self) -> Option<&'a T> {
        self.value
    }

    /// Whether the symbol had a matching child. A stalled step leaves the
    /// traversal where it was.
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// The `(terminal, value)` pair.
    pub fn into_pair(self) -> (bool, Option<&'a T>) {
        (self.terminal, self.value)
    }
}

impl<T> Clone for StepOutcome<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StepOutcome<'_, T> {}

/// Current node plus the symbols consumed to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CursorState {
    node: usize,
    path: String,
}

impl CursorState {
    pub fn at_root() -> Self {
        Self {
            node: ROOT_INDEX,
            path: String::new(),
        }
    }

    /// Arena index of the current node.
    pub fn node(&self) -> usize {
        self.node
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn reset(&mut self) {
        self.node = ROOT_INDEX;
        self.path.clear();
    }

    /// Moves to the child for `symbol` if there is one.
    ///
    /// An out-of-alphabet symbol is an error and leaves the state untouched.
    pub fn advance<'a, T>(
        &mut self,
        arena: &'a NodeArena<T>,
        symbol: char,
        fold_case: bool,
    ) -> LauTrieResult<StepOutcome<'a, T>> {
        let index = symbol_index(symbol, fold_case).ok_or(LauTrieError::InvalidSymbol(symbol))?;

        let Some(next) = arena.node(self.node).child(index) else {
            return Ok(StepOutcome::stalled());
        };

        self.node = next;
        self.path.push(symbol.to_ascii_lowercase());

        let node = arena.node(next);
        Ok(StepOutcome {
            moved: true,
            value: node.value(),
            terminal: node.is_terminal(),
        })
    }
}

/// An independent traversal over a shared, read-only trie.
///
/// Cursors borrow the trie immutably, so any number of them can walk the same
/// tree while it is not being mutated.
///
/// # Example
///
/// ```
/// use lau_lib::data_structures::lau_trie::LauTrie;
///
/// let trie = LauTrie::build(vec![("cat", 1), ("cats", 2)]).unwrap();
/// let mut cursor = trie.cursor();
///
/// assert!(!cursor.step('c').unwrap().is_terminal());
/// assert!(!cursor.step('a').unwrap().is_terminal());
/// assert_eq!(cursor.step('t').unwrap().value(), Some(&1));
/// assert_eq!(cursor.step('s').unwrap().value(), Some(&2));
/// assert_eq!(cursor.completions(), vec!["cats".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct LauCursor<'a, T> {
    trie: &'a LauTrie<T>,
    state: CursorState,
}

impl<'a, T> LauCursor<'a, T> {
    pub(crate) fn new(trie: &'a LauTrie<T>) -> Self {
        Self {
            trie,
            state: CursorState::at_root(),
        }
    }

    /// Moves towards `symbol`. See [`LauTrie::step`].
    pub fn step(&mut self, symbol: char) -> LauTrieResult<StepOutcome<'a, T>> {
        self.state
            .advance(&self.trie.arena, symbol, self.trie.config.fold_case())
    }

    /// Returns to the root.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// The node the cursor stands on.
    pub fn position(&self) -> NodeId {
        self.trie.arena.id(self.state.node())
    }

    /// Symbols successfully stepped since the last reset.
    pub fn path(&self) -> &str {
        self.state.path()
    }

    /// Whether the cursor stands on a complete key.
    pub fn is_terminal(&self) -> bool {
        self.trie.arena.node(self.state.node()).is_terminal()
    }

    /// Every complete key at or below the cursor, in alphabet order.
    pub fn completions(&self) -> Vec<String> {
        self.trie
            .arena
            .collect(self.state.node(), self.state.path())
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }
}
