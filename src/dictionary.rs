//! Dictionary loading.
//!
//! Reads a newline-delimited word list, cleans it up according to
//! [`DictionaryConfig`], and builds the trie that serves completions.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use crate::config::dictionary::DictionaryConfig;
use crate::config::prompt::TrieSettings;
use crate::data_structures::lau_trie::{is_valid_key, LauTrie};
use crate::error::{LauError, LauResult};

/// Reads one word per line from `reader`.
///
/// Lines are trimmed and blank lines are skipped. A line that is not valid
/// UTF-8 is kept with its bad bytes replaced by U+FFFD, which no trie key
/// accepts, so [`prepare_words`] can drop it like any other invalid word.
pub fn read_dictionary<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut malformed = 0usize;

    for line in reader.split(b'\n') {
        let line = line?;
        let text = String::from_utf8_lossy(&line);
        if matches!(text, Cow::Owned(_)) {
            malformed += 1;
        }

        let word = text.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    if malformed > 0 {
        warn!(malformed, "Dictionary lines are not valid UTF-8");
    }
    Ok(words)
}

/// Reads a word list from the file at `path`.
pub fn read_dictionary_from_file<P: AsRef<Path>>(path: P) -> LauResult<Vec<String>> {
    let path = path.as_ref();
    let to_error = |source| LauError::Dictionary {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(to_error)?;
    read_dictionary(BufReader::new(file)).map_err(to_error)
}

/// Applies dedup and trie-key filtering to a raw word list.
///
/// With `skip_invalid_words` on, words with unsupported symbols and words
/// longer than the trie's `max_key_len` are dropped. With it off they are
/// kept, so that building the trie reports the first of them.
pub fn prepare_words(words: Vec<String>, config: &DictionaryConfig, settings: &TrieSettings) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut invalid = 0usize;
    let mut too_long = 0usize;

    let prepared: Vec<String> = words
        .into_iter()
        .filter(|word| !config.dedup || seen.insert(word.clone()))
        .filter(|word| {
            if !config.skip_invalid_words {
                return true;
            }
            if !is_valid_key(word, settings.fold_case) {
                invalid += 1;
                false
            } else if word.chars().count() > settings.max_key_len {
                too_long += 1;
                false
            } else {
                true
            }
        })
        .collect();

    if invalid > 0 {
        warn!(skipped = invalid, "Skipped dictionary words with unsupported symbols");
    }
    if too_long > 0 {
        warn!(
            skipped = too_long,
            max_key_len = settings.max_key_len,
            "Skipped dictionary words longer than the key limit"
        );
    }
    prepared
}

/// Reads and prepares the configured dictionary, logging how long it took.
pub fn load_dictionary(config: &DictionaryConfig, settings: &TrieSettings) -> LauResult<Vec<String>> {
    let start = Instant::now();
    let words = read_dictionary_from_file(&config.path)?;
    let words = prepare_words(words, config, settings);

    info!(
        path = %config.path.display(),
        words = words.len(),
        elapsed = ?start.elapsed(),
        "Read dictionary"
    );
    Ok(words)
}

/// Builds a key-only trie from `words`, logging how long it took.
pub fn build_trie<I, S>(words: I, settings: &TrieSettings) -> LauResult<LauTrie<()>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let start = Instant::now();
    let trie = LauTrie::build_keys(words, settings.to_trie_config()?)?;

    info!(
        keys = trie.len(),
        nodes = trie.node_count(),
        elapsed = ?start.elapsed(),
        "Built trie"
    );
    Ok(trie)
}
