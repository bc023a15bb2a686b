//! Configuration system for translatr.
//!
//! A single YAML file, first match wins:
//! 1. Explicit --config path
//! 2. .translatr.yml in current directory (project config)
//! 3. ~/.config/translatr/translatr.yml (user config)
//! 4. Default values

use eyre::Result;
use std::path::PathBuf;

pub use self::global::{GlobalConfig, LlmConfig, TranslationConfig};

mod global;

/// Config alias used by the binary.
pub type Config = GlobalConfig;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Project config file name, relative to the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".translatr.yml";

/// Path of the per-user config file, if a config dir exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("translatr").join("translatr.yml"))
}

/// Load configuration from the standard search paths.
pub fn load_config(explicit_path: Option<&PathBuf>) -> Result<GlobalConfig> {
    GlobalConfig::load(explicit_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_config_path_shape() {
        if let Some(path) = user_config_path() {
            assert!(path.ends_with("translatr/translatr.yml"));
        }
    }

    #[test]
    fn test_load_config_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translatr.yml");
        std::fs::write(&path, "translation:\n  default-language: Hindi\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.translation.default_language, "Hindi");
        assert_eq!(config.llm.model, DEFAULT_MODEL);
        assert_eq!(config.llm.api_key_env, DEFAULT_API_KEY_ENV);
    }
}
