// Copyright (c) 2025 Lau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lau Trie.
//!
//! This module defines the error types that can occur during Lau Trie operations.

use super::node::NodeId;

/// Errors that can occur in Lau Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LauTrieError {
    /// A key contains a symbol outside the trie's alphabet.
    #[error("Key '{key}' contains unsupported symbol {symbol:?} at position {position}")]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// The first offending symbol.
        symbol: char,
        /// Character position of the offending symbol within the key.
        position: usize,
    },

    /// A single stepped symbol is outside the trie's alphabet.
    #[error("Unsupported symbol {0:?}")]
    InvalidSymbol(char),

    /// Error when a key exceeds the maximum length allowed.
    #[error("Key '{key}' exceeds maximum key length of {max_len}")]
    KeyTooLong {
        /// The key that was too long.
        key: String,
        /// The maximum allowed length.
        max_len: usize,
    },

    /// A node handle does not belong to this trie.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),
}

/// Result type for Lau Trie operations
pub type LauTrieResult<T> = Result<T, LauTrieError>;
