//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    dictionary::DictionaryConfig, prompt::PromptConfig, prompt::TrieSettings, ConfigLoader,
    LauConfig, LogConfig, Validate,
};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use std::path::{Path, PathBuf};

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LauConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.prompt.min_prefix_len, 3);
    assert_eq!(config.dictionary.path, PathBuf::from("words_alpha.txt"));
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LauConfig::default();

    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.trie.max_key_len = 0;
    assert!(config.validate().is_err());

    config.trie.max_key_len = 32;
    config.prompt.max_results = Some(0);
    assert!(config.validate().is_err());

    config.prompt.max_results = Some(10);
    assert!(config.validate().is_ok());
}

/// Test that validation fails for each section's own rules.
#[test]
fn test_specific_validation_rules() {
    let dictionary = DictionaryConfig {
        path: PathBuf::new(),
        ..DictionaryConfig::default()
    };
    assert!(matches!(
        dictionary.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    let prompt = PromptConfig {
        max_results: Some(0),
        ..PromptConfig::default()
    };
    assert!(matches!(
        prompt.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    let log = LogConfig {
        level: "verbose".to_string(),
        ..LogConfig::default()
    };
    assert!(log.validate().is_err());
}

/// Test that trie settings map onto the trie configuration.
#[test]
fn test_trie_settings_conversion() {
    let settings = TrieSettings {
        fold_case: true,
        max_key_len: 12,
    };
    let trie_config = settings.to_trie_config().unwrap();
    assert!(trie_config.fold_case());
    assert_eq!(trie_config.max_key_len(), 12);

    let invalid = TrieSettings {
        fold_case: false,
        max_key_len: 0,
    };
    assert!(invalid.to_trie_config().is_err());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_file_test.toml",
            r#"
            [dictionary]
            path = "/usr/share/dict/words"
            dedup = true

            [prompt]
            min_prefix_len = 2
            max_results = 25
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.dictionary.path, Path::new("/usr/share/dict/words"));
    assert!(config.dictionary.dedup);
    assert_eq!(config.prompt.min_prefix_len, 2);
    assert_eq!(config.prompt.max_results, Some(25));

    // Other values should be defaults
    assert!(config.dictionary.skip_invalid_words);
    assert!(config.prompt.color);
    assert_eq!(config.log.level, "warn");
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_json_test.json",
            r#"{ "trie": { "fold_case": true }, "log": { "level": "debug" } }"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();
    assert!(config.trie.fold_case);
    assert_eq!(config.log.level, "debug");
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_env_test.toml",
            r#"
            [prompt]
            min_prefix_len = 2
            "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__PROMPT__MIN_PREFIX_LEN", "5");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "error");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.prompt.min_prefix_len, 5);
    assert_eq!(config.log.level, "error");
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let missing = fixture.temp_dir.path().join("missing.toml");

    let loader = ConfigLoader::new(Some(&missing), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(path)) if path == missing));
}

/// Test that unsupported extensions are rejected.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.write_file("config.ini", "level = info").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "invalid.toml",
            r#"
            [prompt
            min_prefix_len = three"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(loader.load().is_err());
}

/// Test that a file with invalid values fails validation after loading.
#[test]
fn test_load_config_fails_validation() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "bad_level.toml",
            r#"
            [log]
            level = "chatty"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_BAD_LEVEL");
    assert!(matches!(loader.load(), Err(ConfigError::ValidationError(_))));
}

/// Test that the default configuration round-trips through TOML.
#[test]
fn test_default_config_serializes_to_toml() {
    let toml = toml::to_string_pretty(&LauConfig::default()).unwrap();
    assert!(toml.contains("[dictionary]"));
    assert!(toml.contains("min_prefix_len = 3"));

    let parsed: LauConfig = toml::from_str(&toml).unwrap();
    assert!(parsed.validate().is_ok());
    assert_eq!(parsed.prompt.max_results, None);
}
