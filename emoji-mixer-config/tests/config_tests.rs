use emoji_mixer_config::{Config, ConfigError, LogLevel};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.source_path, "emoji.json");
    assert_eq!(config.public_dir, "public");
    assert_eq!(config.emoji_index_file, "emojiIndex.json");
    assert_eq!(config.pair_mixes_file, "pairMixes.json");
    assert_eq!(config.catalog_load_retries, 2);
    assert_eq!(config.primary_suggestions, 3);
    assert_eq!(config.max_suggestions, 5);
    assert_eq!(config.history_limit, 20);
    assert_eq!(config.favorites_limit, 30);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "public_dir: dist\nlog_level: debug\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.public_dir, "dist");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.pair_mixes_file, "pairMixes.json");
    assert_eq!(config.history_limit, 20);
}

#[test]
fn test_empty_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "\n").unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "history_limit: [not a number").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_invalid_values_fail_validation() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "history_limit: 0\n").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.yaml");
    let config = Config {
        max_suggestions: 8,
        log_level: LogLevel::Warn,
        ..Config::default()
    }
    .with_public_dir("dist");

    config.save_to(&path).unwrap();
    assert!(!path.with_extension("yaml.tmp").exists());

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_yaml_serialization() {
    let yaml = serde_yaml_ng::to_string(&Config::default()).unwrap();
    assert!(yaml.contains("public_dir: public"));
    assert!(yaml.contains("log_level: info"));
}

#[test]
fn test_config_path_name() {
    assert!(Config::config_path().ends_with("emoji-mixer/config.yaml"));
}
