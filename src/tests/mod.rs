//! Test modules for Lau.
//!
//! This module contains crate-level tests that span several modules:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Dictionary loading into a trie
//! - The interactive prompt loop
//!
//! Trie-specific tests live next to the trie in `data_structures::lau_trie`.

pub mod config_tests;
pub mod dictionary_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_strategy, TestFixture};
