//! Tests for dictionary loading.

use crate::config::dictionary::DictionaryConfig;
use crate::config::prompt::TrieSettings;
use crate::data_structures::LauTrieError;
use crate::dictionary::{
    build_trie, load_dictionary, prepare_words, read_dictionary, read_dictionary_from_file,
};
use crate::error::LauError;
use crate::tests::{word_strategy, TestFixture};
use proptest::prelude::*;
use std::io::Cursor;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// Test that lines are trimmed and blank lines skipped.
#[test]
fn test_read_dictionary_trims_lines() {
    let input = Cursor::new("apple\n  banana  \n\n\t\ncherry\r\n");
    let read = read_dictionary(input).unwrap();
    assert_eq!(read, words(&["apple", "banana", "cherry"]));
}

/// Test reading from a file on disk.
#[test]
fn test_read_dictionary_from_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.write_file("words.txt", "cat\ncar\ncats\n").unwrap();

    let read = read_dictionary_from_file(&path).unwrap();
    assert_eq!(read, words(&["cat", "car", "cats"]));
}

/// Test that a missing file names the dictionary in the error.
#[test]
fn test_read_missing_dictionary() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("nope.txt");

    match read_dictionary_from_file(&path) {
        Err(LauError::Dictionary { path: reported, source }) => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected dictionary error, got {other:?}"),
    }
}

/// Test filtering of invalid words and duplicates.
#[test]
fn test_prepare_words() {
    let raw = words(&["cat", "Dog", "cat", "it's", "car"]);

    let strict = TrieSettings::default();
    let folding = TrieSettings {
        fold_case: true,
        ..TrieSettings::default()
    };

    let config = DictionaryConfig::default();
    assert_eq!(
        prepare_words(raw.clone(), &config, &strict),
        words(&["cat", "cat", "car"])
    );

    let config = DictionaryConfig {
        dedup: true,
        ..DictionaryConfig::default()
    };
    assert_eq!(
        prepare_words(raw.clone(), &config, &folding),
        words(&["cat", "Dog", "car"])
    );

    let config = DictionaryConfig {
        skip_invalid_words: false,
        ..DictionaryConfig::default()
    };
    assert_eq!(prepare_words(raw.clone(), &config, &strict), raw);
}

/// Test that words over the key limit are dropped instead of failing the build.
#[test]
fn test_prepare_words_skips_long_words() {
    let long = "a".repeat(65);
    let raw = vec!["cat".to_string(), long.clone(), "car".to_string()];
    let settings = TrieSettings::default();

    let prepared = prepare_words(raw.clone(), &DictionaryConfig::default(), &settings);
    assert_eq!(prepared, words(&["cat", "car"]));
    let trie = build_trie(&prepared, &settings).unwrap();
    assert_eq!(trie.len(), 2);

    // A raised limit keeps it
    let roomy = TrieSettings {
        max_key_len: 65,
        ..TrieSettings::default()
    };
    assert_eq!(prepare_words(raw.clone(), &DictionaryConfig::default(), &roomy), raw);

    // Unfiltered, the build reports it
    let config = DictionaryConfig {
        skip_invalid_words: false,
        ..DictionaryConfig::default()
    };
    let prepared = prepare_words(raw, &config, &settings);
    assert!(matches!(
        build_trie(&prepared, &settings),
        Err(LauError::Trie(LauTrieError::KeyTooLong { max_len: 64, .. }))
    ));
}

/// Test that a line of invalid UTF-8 is read as an invalid word.
#[test]
fn test_read_dictionary_with_malformed_line() {
    let input = Cursor::new(b"cat\n\xff\xfe\ncar\n".to_vec());
    let read = read_dictionary(input).unwrap();
    assert_eq!(read.len(), 3);
    assert_eq!(read[0], "cat");
    assert_eq!(read[2], "car");

    let prepared = prepare_words(read, &DictionaryConfig::default(), &TrieSettings::default());
    assert_eq!(prepared, words(&["cat", "car"]));
}

/// Test that a file with a malformed line still loads.
#[test]
fn test_load_dictionary_with_malformed_line() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("mixed.txt");
    std::fs::write(&path, b"dog\n\xffab\ndoe\n").unwrap();
    let config = DictionaryConfig {
        path,
        ..DictionaryConfig::default()
    };

    let loaded = load_dictionary(&config, &TrieSettings::default()).unwrap();
    assert_eq!(loaded, words(&["dog", "doe"]));
}

/// Test that unfiltered invalid words surface as trie errors on build.
#[test]
fn test_build_trie_reports_invalid_word() {
    let result = build_trie(["cat", "it's"], &TrieSettings::default());
    assert!(matches!(
        result,
        Err(LauError::Trie(LauTrieError::InvalidKey { symbol: '\'', .. }))
    ));
}

/// Test the full load path from configuration to completions.
#[test]
fn test_load_and_build() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .write_file("dict.txt", "cat\ncar\ncats\nCamel\ndog\n")
        .unwrap();
    let config = DictionaryConfig {
        path,
        ..DictionaryConfig::default()
    };

    let loaded = load_dictionary(&config, &TrieSettings::default()).unwrap();
    assert_eq!(loaded, words(&["cat", "car", "cats", "dog"]));

    let trie = build_trie(&loaded, &TrieSettings::default()).unwrap();
    assert_eq!(trie.len(), 4);
    assert_eq!(trie.completions("ca").unwrap(), vec!["car", "cat", "cats"]);
}

proptest! {
    // Property: every loaded word is found by the built trie
    #[test]
    fn prop_loaded_words_are_completable(list in proptest::collection::vec(word_strategy(10), 0..50)) {
        let text = list.join("\n");
        let read = read_dictionary(Cursor::new(text)).unwrap();
        prop_assert_eq!(&read, &list);

        let trie = build_trie(&read, &TrieSettings::default()).unwrap();
        for word in &list {
            prop_assert!(trie.contains(word).unwrap());
            prop_assert!(trie.completions(word).unwrap().contains(word));
        }
    }
}
