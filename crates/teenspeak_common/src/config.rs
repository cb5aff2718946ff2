//! Configuration management for teenspeak.
//!
//! Loads settings from `$XDG_CONFIG_HOME/teenspeak/config.toml` or uses defaults.
//! Values are handed to adapter constructors at start-up; nothing here is global.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default external slang dictionary endpoint
pub const DEFAULT_EXTERNAL_ENDPOINT: &str = "https://api.urbandictionary.com/v0/define";

/// Default generative chat-completions endpoint
pub const DEFAULT_GENERATIVE_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Local dictionary configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Alternate dataset file. The bundled dataset is used when unset.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
}

/// External slang API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalConfig {
    /// Query the external dictionary when the local one misses
    #[serde(default = "default_external_enabled")]
    pub enabled: bool,

    #[serde(default = "default_external_endpoint")]
    pub endpoint: String,

    /// Request timeout. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_external_enabled() -> bool {
    true
}

fn default_external_endpoint() -> String {
    DEFAULT_EXTERNAL_ENDPOINT.to_string()
}

impl Default for ExternalConfig {
    fn default() -> Self {
        Self {
            enabled: default_external_enabled(),
            endpoint: default_external_endpoint(),
            timeout_secs: None,
        }
    }
}

/// Generative fallback configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerativeConfig {
    #[serde(default = "default_generative_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on generated tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Inline API key. Takes precedence over `api_key_env`.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_generative_endpoint() -> String {
    DEFAULT_GENERATIVE_ENDPOINT.to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    200
}

fn default_temperature() -> f64 {
    0.7
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_generative_endpoint(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            api_key_env: default_api_key_env(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

/// Caller-side history settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Number of translations kept, newest first
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

fn default_history_limit() -> usize {
    10
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: default_history_limit(),
        }
    }
}

/// Full teenspeak configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeenspeakConfig {
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    #[serde(default)]
    pub external: ExternalConfig,

    #[serde(default)]
    pub generative: GenerativeConfig,

    #[serde(default)]
    pub history: HistoryConfig,
}

impl TeenspeakConfig {
    /// Default config location, if a config directory exists for this user
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("teenspeak").join("config.toml"))
    }

    /// Load config from an explicit path, or from the default location.
    ///
    /// An explicit path must exist and parse. A broken default file is
    /// reported and replaced by defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let Some(path) = Self::default_path().filter(|p| p.exists()) else {
            return Ok(Self::default());
        };

        Ok(Self::load_from_path(&path).unwrap_or_else(|e| {
            warn!("Ignoring config at {}: {:#}", path.display(), e);
            Self::default()
        }))
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: TeenspeakConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TeenspeakConfig::default();
        assert!(config.external.enabled);
        assert_eq!(config.external.endpoint, DEFAULT_EXTERNAL_ENDPOINT);
        assert!(config.external.timeout_secs.is_none());
        assert_eq!(config.generative.model, "gpt-4o-mini");
        assert_eq!(config.generative.max_tokens, 200);
        assert!((config.generative.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.generative.api_key_env, "OPENAI_API_KEY");
        assert!(config.generative.api_key.is_none());
        assert_eq!(config.history.limit, 10);
        assert!(config.dictionary.dataset_path.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[external]\nenabled = false\n\n[generative]\nmodel = \"tiny\"").unwrap();

        let config = TeenspeakConfig::load(Some(file.path())).unwrap();
        assert!(!config.external.enabled);
        assert_eq!(config.external.endpoint, DEFAULT_EXTERNAL_ENDPOINT);
        assert_eq!(config.generative.model, "tiny");
        assert_eq!(config.generative.max_tokens, 200);
        assert_eq!(config.history.limit, 10);
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = TeenspeakConfig::load(Some(&dir.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_api_key_not_serialized() {
        let mut config = TeenspeakConfig::default();
        config.generative.api_key = Some("secret".to_string());
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(!text.contains("secret"));
    }
}
