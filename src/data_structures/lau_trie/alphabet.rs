// Copyright (c) 2025 Lau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Symbol mapping for the trie alphabet.
//!
//! The alphabet is closed: the lowercase ASCII letters `a` through `z`, mapped
//! to child slots `0..26` by `symbol - 'a'`. Anything else is rejected here so
//! no caller can index a child array with an out-of-range symbol.

use super::error::{LauTrieError, LauTrieResult};

/// Number of symbols in the alphabet, and so the number of child slots per node.
pub const ALPHABET_SIZE: usize = 26;

const FIRST_SYMBOL: u8 = b'a';

/// Maps a symbol to its child slot, or `None` if it is not in the alphabet.
///
/// With `fold_case`, ASCII uppercase letters map to the slot of their
/// lowercase form.
#[inline]
pub fn symbol_index(symbol: char, fold_case: bool) -> Option<usize> {
    let symbol = if fold_case {
        symbol.to_ascii_lowercase()
    } else {
        symbol
    };

    if symbol.is_ascii_lowercase() {
        Some((symbol as u8 - FIRST_SYMBOL) as usize)
    } else {
        None
    }
}

/// Maps a child slot back to its symbol.
///
/// # Panics
///
/// Panics if `index >= ALPHABET_SIZE`; slots only ever come from a child array.
#[inline]
pub fn index_symbol(index: usize) -> char {
    assert!(index < ALPHABET_SIZE, "child slot {index} out of range");
    (FIRST_SYMBOL + index as u8) as char
}

/// Converts a whole key into child slots.
///
/// Fails on the first symbol outside the alphabet, reporting its position.
pub fn key_indices(key: &str, fold_case: bool) -> LauTrieResult<Vec<usize>> {
    key.chars()
        .enumerate()
        .map(|(position, symbol)| {
            symbol_index(symbol, fold_case).ok_or_else(|| LauTrieError::InvalidKey {
                key: key.to_string(),
                symbol,
                position,
            })
        })
        .collect()
}

/// Returns whether every symbol of `key` is in the alphabet.
pub fn is_valid_key(key: &str, fold_case: bool) -> bool {
    key.chars().all(|c| symbol_index(c, fold_case).is_some())
}
