//! Global configuration.
//!
//! Loaded from ~/.config/translatr/translatr.yml or .translatr.yml

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TranslatrError;
use crate::translate::Language;

/// Global configuration for translatr.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Model provider settings.
    pub llm: LlmConfig,

    /// Translation defaults.
    pub translation: TranslationConfig,
}

impl GlobalConfig {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .translatr.yml in current directory
    /// 3. ~/.config/translatr/translatr.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit path takes precedence
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project config
        let project_config = PathBuf::from(super::PROJECT_CONFIG_FILE);
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from {}", super::PROJECT_CONFIG_FILE);
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load {}: {}", super::PROJECT_CONFIG_FILE, e);
                }
            }
        }

        // Try user config
        if let Some(user_config) = super::user_config_path()
            && user_config.exists()
        {
            match Self::load_from_file(&user_config) {
                Ok(config) => {
                    log::info!("Loaded config from {}", user_config.display());
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load {}: {}", user_config.display(), e);
                }
            }
        }

        // Use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.llm.model.trim().is_empty() {
            eyre::bail!("llm.model must not be empty");
        }
        if self.llm.base_url.trim().is_empty() {
            eyre::bail!("llm.base-url must not be empty");
        }
        if self.llm.api_key_env.trim().is_empty() {
            eyre::bail!("llm.api-key-env must not be empty");
        }
        if self.llm.timeout_ms == 0 {
            eyre::bail!("llm.timeout-ms must be > 0");
        }
        if let Some(temperature) = self.llm.temperature
            && !(0.0..=2.0).contains(&temperature)
        {
            eyre::bail!("llm.temperature must be between 0 and 2, got {}", temperature);
        }
        if self.llm.max_tokens == Some(0) {
            eyre::bail!("llm.max-tokens must be > 0");
        }
        if self.translation.default_language.trim().is_empty() {
            eyre::bail!("translation.default-language must not be empty");
        }
        if self.translation.strict_languages
            && self.translation.default_language.parse::<Language>().is_err()
        {
            eyre::bail!(
                "translation.default-language '{}' is not a supported language",
                self.translation.default_language
            );
        }
        Ok(())
    }
}

/// Model provider settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model identifier sent with each request.
    pub model: String,

    /// OpenAI-compatible API base URL.
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Environment variable holding the API key.
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// Timeout per model call in milliseconds.
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Sampling temperature; provider default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Output token cap; provider default when unset.
    #[serde(rename = "max-tokens", skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: super::DEFAULT_MODEL.to_string(),
            base_url: super::DEFAULT_BASE_URL.to_string(),
            api_key_env: super::DEFAULT_API_KEY_ENV.to_string(),
            timeout_ms: 60_000,
            temperature: None,
            max_tokens: None,
        }
    }
}

impl LlmConfig {
    /// Resolve the API key from the configured environment variable.
    pub fn api_key(&self) -> std::result::Result<String, TranslatrError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            Ok(_) => Err(TranslatrError::Config(format!(
                "environment variable {} is empty",
                self.api_key_env
            ))),
            Err(_) => Err(TranslatrError::Config(format!(
                "environment variable {} not set",
                self.api_key_env
            ))),
        }
    }
}

/// Translation defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Language used when none is given.
    #[serde(rename = "default-language")]
    pub default_language: String,

    /// Reject languages outside the supported list.
    #[serde(rename = "strict-languages")]
    pub strict_languages: bool,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            default_language: Language::French.to_string(),
            strict_languages: false,
        }
    }
}
