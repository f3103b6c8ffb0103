//! Configuration loading and validation for Compass.
//!
//! Loads configuration from `~/.compass/config.toml` with environment
//! variable overrides (`GEMINI_API_KEY`, `COMPASS_MODEL`,
//! `COMPASS_BASE_URL`). Validates all settings at load time.
//!
//! An absent API key is not a load error: every AI-backed feature degrades
//! to its deterministic fallback path, and the engine surfaces an
//! explanatory message instead.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The root configuration structure.
///
/// Maps directly to `~/.compass/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini API key. Usually supplied via `GEMINI_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL (overridable for proxies and test servers).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Top-k sampling cutoff.
    #[serde(default = "default_top_k")]
    pub top_k: u32,

    /// Nucleus sampling cutoff.
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-1.5-flash".into()
}
fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_top_k() -> u32 {
    40
}
fn default_top_p() -> f32 {
    0.95
}
fn default_timeout_secs() -> u64 {
    120
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("top_k", &self.top_k)
            .field("top_p", &self.top_p)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl AppConfig {
    /// The default config file location (`~/.compass/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        std::env::home_dir().map(|h| h.join(".compass").join("config.toml"))
    }

    /// Load from the default location (or defaults if the file is absent),
    /// apply environment overrides, and validate.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, without env overrides or validation.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var("GEMINI_API_KEY").ok(),
            std::env::var("COMPASS_MODEL").ok(),
            std::env::var("COMPASS_BASE_URL").ok(),
        );
    }

    /// Apply overrides from explicit values. Empty strings are ignored so
    /// an exported-but-blank variable does not clobber the file setting.
    pub fn apply_overrides(
        &mut self,
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) {
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(model) = model.filter(|m| !m.is_empty()) {
            self.model = model;
        }
        if let Some(url) = base_url.filter(|u| !u.is_empty()) {
            self.base_url = url;
        }
    }

    /// Check ranges that would produce nonsense requests.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Invalid(format!(
                "temperature must be in [0.0, 2.0], got {}",
                self.temperature
            )));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(ConfigError::Invalid(format!(
                "top_p must be in [0.0, 1.0], got {}",
                self.top_p
            )));
        }
        if self.model.is_empty() {
            return Err(ConfigError::Invalid("model must not be empty".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.top_k, 40);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn parse_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            api_key = "test-key"
            temperature = 0.4
            "#,
        )
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert!((config.temperature - 0.4).abs() < f32::EPSILON);
        assert_eq!(config.base_url, default_base_url());
    }

    #[test]
    fn overrides_win_over_file_values() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("env-key".into()), Some("gemini-1.5-pro".into()), None);
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.base_url, default_base_url());
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = AppConfig::default();
        config.api_key = Some("file-key".into());
        config.apply_overrides(Some(String::new()), None, None);
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
    }

    #[test]
    fn out_of_range_temperature_rejected() {
        let config = AppConfig {
            temperature: 3.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = AppConfig {
            api_key: Some("super-secret".into()),
            ..Default::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn load_from_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "model = \"gemini-2.0-flash\"\n").unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
    }
}
