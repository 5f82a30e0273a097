//! Settings configuration
//!
//! User-configurable settings for the input method. Default values are
//! defined in `config/default.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use zizao_engine::{CodeTable, FALLBACK_LIMIT};

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/default.toml");

/// Configuration settings for the input method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Code table settings
    pub table: TableSettings,
    /// Composer settings
    pub engine: EngineSettings,
}

/// Code table settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSettings {
    /// Path to a custom code table JSON file (bundled table if unset)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Composer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Maximum number of candidates gathered by the prefix-fallback search
    #[serde(default = "default_fallback_limit")]
    pub fallback_limit: usize,
}

fn default_fallback_limit() -> usize {
    FALLBACK_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
    }
}

/// Recursively merge `overlay` TOML values on top of `base`.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(key) {
                    merge_toml(base_value, value);
                } else {
                    base_table.insert(key.clone(), value.clone());
                }
            }
        }
        (base, _) => {
            *base = overlay.clone();
        }
    }
}

/// Parse user TOML content merged on top of default.toml.
fn parse_with_defaults(user_content: &str) -> Result<Settings> {
    let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
    let user: toml::Value = toml::from_str(user_content)?;
    merge_toml(&mut base, &user);
    let settings: Settings = base.try_into()?;
    Ok(settings)
}

/// Get the project directories for zizao-im.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "zizao", "zizao-im")
}

impl Settings {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load settings from the default configuration file.
    /// Falls back to embedded default.toml if the config file does not exist.
    pub fn load() -> Result<Self> {
        let Some(config_file) = Self::config_file() else {
            warn!("Could not determine config directory, using defaults");
            return Ok(Self::default());
        };

        if !config_file.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from {:?}", config_file);
        let content = fs::read_to_string(&config_file)?;
        parse_with_defaults(&content)
    }

    /// Load settings from a specific file, merged on top of defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        parse_with_defaults(&content)
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Open the code table named by these settings: the configured path if
    /// set, the bundled table otherwise.
    pub fn open_table(&self) -> Result<CodeTable> {
        match &self.table.path {
            Some(path) => {
                debug!("loading code table from {:?}", path);
                Ok(CodeTable::from_json_file(path)?)
            }
            None => Ok(CodeTable::bundled()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.engine.fallback_limit, 10);
        assert!(settings.table.path.is_none());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let settings = parse_with_defaults("[engine]\nfallback_limit = 5\n").unwrap();
        assert_eq!(settings.engine.fallback_limit, 5);
        assert!(settings.table.path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "[table]\npath = \"/tmp/custom.json\"\n").unwrap();
        let settings = Settings::load_from(f.path()).unwrap();
        assert_eq!(settings.table.path.as_deref(), Some(Path::new("/tmp/custom.json")));
        assert_eq!(settings.engine.fallback_limit, 10);
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.engine.fallback_limit = 7;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.engine.fallback_limit, 7);
    }

    #[test]
    fn test_open_bundled_table() {
        let table = Settings::default().open_table().unwrap();
        assert!(!table.is_empty());
    }
}
