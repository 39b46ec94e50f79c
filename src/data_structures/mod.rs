//! Data structures for Lau.
//!
//! This module contains the prefix tree that backs word completion.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Explicit, typed errors for every rejected input
//! - No panics on caller-supplied data

pub mod lau_trie;

// Re-export common data structures
pub use lau_trie::{LauCursor, LauTrie, LauTrieConfig, LauTrieError, LauTrieResult, StrValuePair};
