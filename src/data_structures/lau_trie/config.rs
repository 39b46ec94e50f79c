// Copyright (c) 2025 Lau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Lau Trie.

/// Default longest key accepted by `insert`.
pub const DEFAULT_MAX_KEY_LEN: usize = 64;

/// Configuration for the Lau Trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauTrieConfig {
    /// Treat ASCII uppercase letters as their lowercase form instead of
    /// rejecting them
    fold_case: bool,

    /// Longest key, in symbols, that `insert` accepts
    max_key_len: usize,
}

impl LauTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - fold_case: false
    /// - max_key_len: 64
    pub fn new() -> Self {
        Self {
            fold_case: false,
            max_key_len: DEFAULT_MAX_KEY_LEN,
        }
    }

    /// Accept uppercase ASCII letters by folding them to lowercase.
    pub fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }

    /// Set the longest key `insert` will accept.
    ///
    /// # Panics
    ///
    /// Panics if `max_key_len` is 0.
    pub fn with_max_key_len(mut self, max_key_len: usize) -> Self {
        if max_key_len == 0 {
            panic!("Maximum key length must be greater than 0");
        }
        self.max_key_len = max_key_len;
        self
    }

    pub fn fold_case(&self) -> bool {
        self.fold_case
    }

    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }
}

impl Default for LauTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
