//! Dictionary configuration module.
//!
//! This module defines where the word list comes from and how its lines are
//! filtered before they reach the trie.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default word list, one lowercase word per line.
pub const DEFAULT_DICTIONARY_PATH: &str = "words_alpha.txt";

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Path to the newline-delimited word list
    pub path: PathBuf,

    /// Skip words with symbols outside the trie alphabet instead of failing
    pub skip_invalid_words: bool,

    /// Drop repeated words while loading
    pub dedup: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            skip_invalid_words: true,
            dedup: false,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
