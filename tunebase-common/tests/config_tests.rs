//! Root folder resolution tests
//!
//! Environment variable tests are serialized since they mutate process state.

use serial_test::serial;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tunebase_common::config::{resolve_root_folder, TomlConfig, ROOT_FOLDER_ENV};

fn toml_with_root(root: &str) -> TomlConfig {
    TomlConfig {
        root_folder: Some(PathBuf::from(root)),
        ..Default::default()
    }
}

#[test]
#[serial]
fn test_cli_argument_wins() {
    std::env::set_var(ROOT_FOLDER_ENV, "/from/env");

    let resolved = resolve_root_folder(
        Some(Path::new("/from/cli")),
        ROOT_FOLDER_ENV,
        &toml_with_root("/from/toml"),
    );

    std::env::remove_var(ROOT_FOLDER_ENV);
    assert_eq!(resolved, PathBuf::from("/from/cli"));
}

#[test]
#[serial]
fn test_env_var_beats_toml() {
    std::env::set_var(ROOT_FOLDER_ENV, "/from/env");

    let resolved = resolve_root_folder(None, ROOT_FOLDER_ENV, &toml_with_root("/from/toml"));

    std::env::remove_var(ROOT_FOLDER_ENV);
    assert_eq!(resolved, PathBuf::from("/from/env"));
}

#[test]
#[serial]
fn test_toml_used_without_cli_or_env() {
    std::env::remove_var(ROOT_FOLDER_ENV);

    let resolved = resolve_root_folder(None, ROOT_FOLDER_ENV, &toml_with_root("/from/toml"));

    assert_eq!(resolved, PathBuf::from("/from/toml"));
}

#[test]
#[serial]
fn test_default_fallback() {
    std::env::remove_var(ROOT_FOLDER_ENV);

    let resolved = resolve_root_folder(None, ROOT_FOLDER_ENV, &TomlConfig::default());

    assert!(
        resolved.to_string_lossy().contains("tunebase"),
        "Default root folder should be tunebase-specific: {}",
        resolved.display()
    );
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "root_folder = \"/srv/music\"").unwrap();
    writeln!(file, "port = 5999").unwrap();

    let config = TomlConfig::load_from(file.path()).unwrap();

    assert_eq!(config.root_folder, Some(PathBuf::from("/srv/music")));
    assert_eq!(config.port, Some(5999));
    assert!(config.bind.is_none());
}

#[test]
fn test_load_from_missing_file_is_io_error() {
    let result = TomlConfig::load_from(Path::new("/nonexistent/tunebase/config.toml"));
    assert!(matches!(result, Err(tunebase_common::Error::Io(_))));
}
