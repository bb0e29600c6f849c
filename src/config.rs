//! Toolkit configuration (fltkit.toml)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the configuration file looked up in the standard locations
pub const CONFIG_FILE_NAME: &str = "fltkit.toml";

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Defaults used by the uikit layer
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KitConfig {
    /// Width used when a window is created with a non-positive width
    #[serde(default = "default_window_width")]
    pub default_window_width: i32,

    /// Height used when a window is created with a non-positive height
    #[serde(default = "default_window_height")]
    pub default_window_height: i32,

    /// Initial row height of table views
    #[serde(default = "default_row_height")]
    pub default_row_height: i32,

    /// Log file; logging stays off when unset
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Root directory of prebuilt library bundles
    #[serde(default = "default_libs_dir")]
    pub libs_dir: PathBuf,
}

fn default_window_width() -> i32 {
    800
}

fn default_window_height() -> i32 {
    600
}

fn default_row_height() -> i32 {
    24
}

fn default_libs_dir() -> PathBuf {
    PathBuf::from("libs")
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            default_window_width: default_window_width(),
            default_window_height: default_window_height(),
            default_row_height: default_row_height(),
            log_file: None,
            libs_dir: default_libs_dir(),
        }
    }
}

impl KitConfig {
    /// Find fltkit.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("fltkit").join(CONFIG_FILE_NAME)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME))),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ];

        candidates
            .into_iter()
            .flatten()
            .find(|candidate| candidate.exists())
    }

    /// Load configuration, returning defaults if no file is found or it is invalid
    pub fn load() -> Self {
        match Self::find_config_path() {
            Some(path) => Self::load_from_path(&path).unwrap_or_else(|e| {
                crate::log!("Failed to load config {:?}: {}", path, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Start file logging if a log file is configured
    pub fn init_logging(&self) {
        if let Some(path) = &self.log_file {
            crate::log::init(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_defaults() {
        let config = KitConfig::default();
        assert_eq!(config.default_window_width, 800);
        assert_eq!(config.default_window_height, 600);
        assert_eq!(config.default_row_height, 24);
        assert!(config.log_file.is_none());
        assert_eq!(config.libs_dir, PathBuf::from("libs"));
    }

    #[test]
    fn test_config_partial_toml() {
        let config = KitConfig::from_toml("default_row_height = 32\n").unwrap();
        assert_eq!(config.default_row_height, 32);
        assert_eq!(config.default_window_width, 800);
    }

    #[test]
    fn test_config_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_window_width = 1024").unwrap();
        writeln!(file, "libs_dir = \"vendor/libs\"").unwrap();

        let config = KitConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.default_window_width, 1024);
        assert_eq!(config.libs_dir, PathBuf::from("vendor/libs"));
    }

    #[test]
    fn test_config_invalid_toml() {
        let result = KitConfig::from_toml("default_row_height = \"tall\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_missing_file() {
        let result = KitConfig::load_from_path(Path::new("/nonexistent/fltkit.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
