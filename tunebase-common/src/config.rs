//! Configuration loading and root folder resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the root folder
pub const ROOT_FOLDER_ENV: &str = "TUNEBASE_ROOT_FOLDER";

/// Database file name inside the root folder
pub const DATABASE_FILE_NAME: &str = "tunebase.db";

/// Optional settings read from `config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    pub port: Option<u16>,
    pub bind: Option<String>,
}

impl TomlConfig {
    /// Parse a TOML document
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
    }

    /// Load the platform config file, if one exists
    ///
    /// A missing file yields the empty config; an unreadable or malformed
    /// file is an error.
    pub fn load() -> Result<Self> {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    toml_config: &TomlConfig,
) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &toml_config.root_folder {
        return path.clone();
    }

    default_root_folder()
}

/// Database file location for a root folder
pub fn database_path(root_folder: &Path) -> PathBuf {
    root_folder.join(DATABASE_FILE_NAME)
}

/// Config file path for the platform, if it exists
///
/// Linux checks `~/.config/tunebase/config.toml` first, then
/// `/etc/tunebase/config.toml`.
fn config_file_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("tunebase").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/tunebase/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/tunebase (or /var/lib/tunebase for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("tunebase"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/tunebase"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("tunebase"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/tunebase"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("tunebase"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\tunebase"))
    } else {
        PathBuf::from("./tunebase_data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::parse(
            r#"
            root_folder = "/srv/tunebase"
            port = 6000
            bind = "0.0.0.0"
            "#,
        )
        .unwrap();

        assert_eq!(config.root_folder, Some(PathBuf::from("/srv/tunebase")));
        assert_eq!(config.port, Some(6000));
        assert_eq!(config.bind.as_deref(), Some("0.0.0.0"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();
        assert!(config.root_folder.is_none());
        assert!(config.port.is_none());
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = TomlConfig::parse("port = \"not a number\"");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_database_path() {
        let path = database_path(Path::new("/data/music"));
        assert_eq!(path, PathBuf::from("/data/music/tunebase.db"));
    }
}
