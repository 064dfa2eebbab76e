use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildToolsError, Result};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "buildtools.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".buildtools.toml";

/// Represents the complete configuration for the build tools.
///
/// Contains explicit paths for external tools and the repository sync plan.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub sync: SyncConfig,
}

/// Locations of external executables.
///
/// Any path left unset is discovered at runtime for the current platform.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolsConfig {
    #[serde(default)]
    pub git: Option<PathBuf>,

    #[serde(default = "default_python")]
    pub python: String,

    #[serde(default)]
    pub pymake: Option<PathBuf>,

    #[serde(default)]
    pub mozmake: Option<PathBuf>,
}

fn default_python() -> String {
    "python".to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        ToolsConfig {
            git: None,
            python: default_python(),
            pymake: None,
            mozmake: None,
        }
    }
}

/// Configuration for repository synchronization.
///
/// Repositories are paths relative to the sync root and are updated in order,
/// before submodules and the top-level repository.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SyncConfig {
    #[serde(default = "default_repositories")]
    pub repositories: Vec<PathBuf>,

    #[serde(default = "default_true")]
    pub submodules: bool,

    #[serde(default = "default_true")]
    pub top_level: bool,
}

/// Returns the default list of application repositories to update.
fn default_repositories() -> Vec<PathBuf> {
    vec![PathBuf::from("mozilla/application/ambassador")]
}

fn default_true() -> bool {
    true
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            repositories: default_repositories(),
            submodules: true,
            top_level: true,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `buildtools.toml` in current directory
/// 3. `.buildtools.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    log::debug!("loading configuration from {}", path.display());
    let config_str = fs::read_to_string(&path)?;
    parse_config(&config_str)
        .map_err(|e| BuildToolsError::config(format!("{}: {}", path.display(), e)))
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tools.python, "python");
        assert!(config.tools.git.is_none());
        assert_eq!(
            config.sync.repositories,
            vec![PathBuf::from("mozilla/application/ambassador")]
        );
        assert!(config.sync.submodules);
        assert!(config.sync.top_level);
    }

    #[test]
    fn test_empty_text_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = parse_config(
            r#"
[tools]
git = "/opt/git/bin/git"

[sync]
submodules = false
"#,
        )
        .unwrap();

        assert_eq!(config.tools.git, Some(PathBuf::from("/opt/git/bin/git")));
        assert_eq!(config.tools.python, "python");
        assert!(!config.sync.submodules);
        assert!(config.sync.top_level);
        assert_eq!(config.sync.repositories.len(), 1);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(parse_config("[sync\nrepositories = 3").is_err());
        assert!(parse_config("[sync]\nrepositories = 3").is_err());
    }
}
