//! Configuration management for Wayfarer.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. Every section implements `Default`, so a missing file or a
//! partial file is fine.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Wayfarer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gemini API settings
    pub gemini: GeminiConfig,

    /// Generation parameters
    pub inference: InferenceConfig,

    /// Time limits
    pub limits: LimitsConfig,

    /// Upload control settings
    pub upload: UploadConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - macOS: ~/Library/Application Support/com.wayfarer.wayfarer/config.toml
    /// - Linux: ~/.config/wayfarer/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\wayfarer\wayfarer\config\config.toml
    ///
    /// Falls back to ~/.wayfarer/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "wayfarer", "wayfarer")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".wayfarer").join("config.toml")
            })
    }

    /// Resolve the API key, following `${ENV_VAR}` indirection.
    ///
    /// Fails with [`ConfigError::MissingApiKey`] when the key is unset or empty.
    pub fn api_key(&self) -> Result<String, ConfigError> {
        resolve_env_var(&self.gemini.api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey {
                var: env_var_name(&self.gemini.api_key)
                    .unwrap_or(API_KEY_ENV_VAR)
                    .to_string(),
            })
    }

    /// A copy safe to print: a literal API key is masked, `${VAR}` references are kept.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if env_var_name(&config.gemini.api_key).is_none() && !config.gemini.api_key.is_empty() {
            config.gemini.api_key = "********".to_string();
        }
        config
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Name of the variable in a `${ENV_VAR}` reference.
fn env_var_name(value: &str) -> Option<&str> {
    value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if let Some(var_name) = env_var_name(value) {
        std::env::var(var_name).ok()
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.limits.llm_timeout_ms, 120_000);
        assert_eq!(config.inference.max_image_dimension, 0);
        assert_eq!(config.upload.allowed_extensions.len(), 3);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[gemini]"));
        assert!(toml.contains("[upload]"));
        assert!(!toml.contains("temperature"));
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[gemini]\nmodel = \"gemini-1.5-pro\"\n\n[inference]\ntemperature = 0.4\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.gemini.api_key, "${GEMINI_API_KEY}");
        assert_eq!(config.inference.temperature, Some(0.4));
        assert_eq!(config.limits.llm_timeout_ms, 120_000);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[limits]\nllm_timeout_ms = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("llm_timeout_ms"));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gemini\nmodel = ").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_resolve_env_var() {
        // Non-env-var strings pass through
        assert_eq!(resolve_env_var("plain-key"), Some("plain-key".to_string()));
        // Empty returns None
        assert_eq!(resolve_env_var(""), None);
        // Unset env var returns None
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), None);
    }

    #[test]
    fn test_api_key_literal() {
        let mut config = Config::default();
        config.gemini.api_key = "literal-key".to_string();
        assert_eq!(config.api_key().unwrap(), "literal-key");
    }

    #[test]
    fn test_api_key_missing_names_variable() {
        let mut config = Config::default();
        config.gemini.api_key = "${WAYFARER_TEST_UNSET_KEY_81}".to_string();
        match config.api_key() {
            Err(ConfigError::MissingApiKey { var }) => {
                assert_eq!(var, "WAYFARER_TEST_UNSET_KEY_81")
            }
            other => panic!("expected MissingApiKey, got {other:?}"),
        }
    }

    #[test]
    fn test_redacted_masks_literal_key_only() {
        let mut config = Config::default();
        assert_eq!(config.redacted().gemini.api_key, "${GEMINI_API_KEY}");

        config.gemini.api_key = "AIzaSecret".to_string();
        let shown = config.redacted().to_toml().unwrap();
        assert!(!shown.contains("AIzaSecret"));
        assert_eq!(config.gemini.api_key, "AIzaSecret");
    }

    #[test]
    fn test_api_key_blank_literal_is_missing() {
        let mut config = Config::default();
        config.gemini.api_key = "   ".to_string();
        assert!(matches!(
            config.api_key(),
            Err(ConfigError::MissingApiKey { .. })
        ));
    }
}
