use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::application::cli;

#[test]
fn test_config_keys_serialize_kebab_case() {
    assert_eq!(ConfigKey::ConfigFile.to_string(), "config-file");
    assert_eq!(ConfigKey::Format.to_string(), "format");
    assert_eq!(ConfigKey::LogFile.to_string(), "log-file");
}

#[test]
fn test_defaults() {
    assert_eq!(Config::default(ConfigKey::Format), "text");
    assert_eq!(Config::default(ConfigKey::LogFile), "");
    assert!(Config::default(ConfigKey::ConfigFile).ends_with("config.toml"));
}

#[test]
fn test_serialize_default_lists_every_documented_key() {
    let serialized = Config::serialize_default(cli::build());

    assert!(serialized.contains("format = \"text\""));
    assert!(serialized.contains("# log-file = \"\""));
    assert!(!serialized.contains("config-file"));
}

// A single sequential test because Config is process-wide state.
#[tokio::test]
async fn test_load_layers_defaults_file_and_cli() {
    let mut config_file = NamedTempFile::new().unwrap();
    writeln!(config_file, "format = \"json\"").unwrap();
    let config_path = config_file.path().to_string_lossy().to_string();

    // File overrides the default.
    let matches = cli::build().get_matches_from(vec!["starters", "--config-file", &config_path]);
    Config::load(cli::build(), vec![&matches]).await.unwrap();
    assert_eq!(Config::get(ConfigKey::Format), "json");

    // CLI flags override the file.
    let matches = cli::build().get_matches_from(vec![
        "starters",
        "--config-file",
        &config_path,
        "--format",
        "text",
    ]);
    Config::load(cli::build(), vec![&matches]).await.unwrap();
    assert_eq!(Config::get(ConfigKey::Format), "text");

    // Values outside the arg's possible values are rejected.
    let mut bad_file = NamedTempFile::new().unwrap();
    writeln!(bad_file, "format = \"yaml\"").unwrap();
    let bad_path = bad_file.path().to_string_lossy().to_string();
    let matches = cli::build().get_matches_from(vec!["starters", "--config-file", &bad_path]);
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
}
