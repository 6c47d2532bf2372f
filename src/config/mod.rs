//! Configuration module for vitrine
//!
//! Settings live in `config.toml` under the user's config directory and can
//! be overridden per invocation with `VITRINE_*` environment variables
//! (`VITRINE_CATALOG`, `VITRINE_QUIET`, ...).

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by [`VitrineConfig::set`] and [`VitrineConfig::get`]
pub const KEYS: [&str; 5] = ["catalog", "presets_path", "quiet", "currency_symbol", "slider_step"];

fn default_currency_symbol() -> String {
    crate::filters::brackets::CURRENCY.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VitrineConfig {
    /// Product catalog used when `--catalog` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Presets file; defaults to `presets.toml` next to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presets_path: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Symbol printed in front of prices
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Slider step override; the catalog-derived step is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider_step: Option<f64>,
}

impl Default for VitrineConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            presets_path: None,
            quiet: false,
            currency_symbol: default_currency_symbol(),
            slider_step: None,
        }
    }
}

impl VitrineConfig {
    /// Directory holding the config and presets files
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("vitrine"))
    }

    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location plus the environment
    ///
    /// A missing file yields the defaults; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path` plus the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed, or an
    /// environment override has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("VITRINE").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        log::debug!("configuration written to {}", path.display());
        Ok(())
    }

    /// Resolved presets file location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the system config
    /// directory cannot be determined.
    pub fn presets_file(&self) -> Result<PathBuf, ConfigError> {
        match &self.presets_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("presets.toml")),
        }
    }

    /// Set a key from its textual value
    ///
    /// An empty value clears optional keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value of the wrong type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "catalog" => self.catalog = optional(value).map(PathBuf::from),
            "presets_path" => self.presets_path = optional(value).map(PathBuf::from),
            "quiet" => {
                self.quiet = value
                    .parse()
                    .map_err(|_| ConfigError::Message(format!("'{value}' is not a boolean (true or false)")))?;
            }
            "currency_symbol" => {
                self.currency_symbol = if value.is_empty() {
                    default_currency_symbol()
                } else {
                    value.to_string()
                };
            }
            "slider_step" => {
                self.slider_step = optional(value)
                    .map(|v| match v.parse::<f64>() {
                        Ok(step) if step.is_finite() && step > 0.0 => Ok(step),
                        _ => Err(ConfigError::Message(format!("'{v}' is not a positive number"))),
                    })
                    .transpose()?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// Textual value of a key; unset optional keys read as an empty string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let path = |p: &Option<PathBuf>| p.as_ref().map(|p| p.display().to_string()).unwrap_or_default();
        Ok(match key {
            "catalog" => path(&self.catalog),
            "presets_path" => path(&self.presets_path),
            "quiet" => self.quiet.to_string(),
            "currency_symbol" => self.currency_symbol.clone(),
            "slider_step" => self.slider_step.map(|s| s.to_string()).unwrap_or_default(),
            other => return Err(unknown_key(other)),
        })
    }
}

fn optional(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!("Unknown config key '{key}' (expected one of: {})", KEYS.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = VitrineConfig::default();
        assert!(config.catalog.is_none());
        assert!(!config.quiet);
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.slider_step, None);
    }

    #[test]
    fn test_set_and_get_keys() {
        let mut config = VitrineConfig::default();
        config.set("catalog", "/srv/products.json").unwrap();
        config.set("quiet", "true").unwrap();
        config.set("slider_step", "100").unwrap();
        config.set("currency_symbol", "Rs.").unwrap();

        assert_eq!(config.get("catalog").unwrap(), "/srv/products.json");
        assert_eq!(config.get("quiet").unwrap(), "true");
        assert_eq!(config.get("slider_step").unwrap(), "100");
        assert_eq!(config.get("currency_symbol").unwrap(), "Rs.");

        config.set("catalog", "").unwrap();
        config.set("slider_step", " ").unwrap();
        assert_eq!(config.catalog, None);
        assert_eq!(config.get("slider_step").unwrap(), "");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = VitrineConfig::default();
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("slider_step", "-5").is_err());
        assert!(config.set("slider_step", "abc").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vitrine").join("config.toml");

        let mut config = VitrineConfig::default();
        config.set("catalog", "/srv/products.json").unwrap();
        config.set("slider_step", "25").unwrap();
        config.save_to(&path).unwrap();

        let loaded = VitrineConfig::load_from(&path).unwrap();
        assert_eq!(loaded.catalog, Some(PathBuf::from("/srv/products.json")));
        assert_eq!(loaded.slider_step, Some(25.0));
        assert_eq!(loaded.currency_symbol, "₹");
    }

    #[test]
    fn test_presets_file_prefers_configured_path() {
        let config = VitrineConfig {
            presets_path: Some(PathBuf::from("/tmp/mine.toml")),
            ..Default::default()
        };
        assert_eq!(config.presets_file().unwrap(), PathBuf::from("/tmp/mine.toml"));
    }
}
