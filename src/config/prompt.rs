//! Prompt and trie configuration module.
//!
//! This module defines how the interactive prompt behaves and how the trie
//! treats its keys.

use super::{ConfigResult, Validate};
use crate::data_structures::lau_trie::{LauTrieConfig, DEFAULT_MAX_KEY_LEN};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Interactive prompt configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Text shown before each input line
    pub prompt: String,

    /// Shortest prefix that triggers a lookup; shorter input is ignored
    pub min_prefix_len: usize,

    /// Whether to highlight the prefix and remainder of each completion
    pub color: bool,

    /// Cap on completions printed per prefix (None for all)
    pub max_results: Option<usize>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter a prefix of at least 3 characters: ".to_string(),
            min_prefix_len: 3,
            color: true,
            max_results: None,
        }
    }
}

impl Validate for PromptConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_results == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "prompt.max_results".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }

        Ok(())
    }
}

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieSettings {
    /// Accept uppercase ASCII letters by folding them to lowercase
    pub fold_case: bool,

    /// Longest word the trie accepts
    pub max_key_len: usize,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            fold_case: false,
            max_key_len: DEFAULT_MAX_KEY_LEN,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_len == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_key_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

impl TrieSettings {
    /// Converts validated settings into the trie's own configuration.
    pub fn to_trie_config(&self) -> ConfigResult<LauTrieConfig> {
        self.validate()?;
        Ok(LauTrieConfig::new()
            .with_fold_case(self.fold_case)
            .with_max_key_len(self.max_key_len))
    }
}
