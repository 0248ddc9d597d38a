//! Configuration system for vitae.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{VitaeError, VitaeResult};
use crate::traits::LlmConfig;

/// Parsing-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Maximum stored raw-text snippet length, in characters.
    pub snippet_max_chars: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            snippet_max_chars: 500,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// LLM configuration.
    pub llm: LlmConfig,
    /// Parsing configuration.
    pub parse: ParseConfig,
}

impl AppConfig {
    /// Load configuration from a file (TOML or JSON, by extension).
    pub fn from_file(path: impl AsRef<Path>) -> VitaeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension {
            "toml" => toml::from_str(&content)
                .map_err(|e| VitaeError::configuration(format!("invalid TOML config: {}", e))),
            "json" => serde_json::from_str(&content)
                .map_err(|e| VitaeError::configuration(format!("invalid JSON config: {}", e))),
            other => Err(VitaeError::configuration(format!(
                "unsupported config format: {:?} (expected .toml or .json)",
                other
            ))),
        }
    }

    /// Build configuration from the environment.
    ///
    /// Loads a `.env` file if present (via dotenvy), then applies
    /// `OPENAI_API_KEY` and `VITAE_MODEL` on top of the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                config.llm.api_key = Some(key);
            }
        }
        if let Ok(model) = std::env::var("VITAE_MODEL") {
            if !model.is_empty() {
                config.llm.model = model;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.parse.snippet_max_chars, 500);
        assert!(config.llm.model.is_empty());
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vitae.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[llm]\nmodel = \"gpt-4o-mini\"\n").unwrap();
        writeln!(file, "[parse]\nsnippet_max_chars = 200\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.parse.snippet_max_chars, 200);
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vitae.yaml");
        std::fs::write(&path, "llm: {}").unwrap();

        let result = AppConfig::from_file(&path);
        assert!(matches!(result, Err(VitaeError::Configuration(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vitae.toml");
        std::fs::write(&path, "[llm]\nmodel = \"gpt-4o\"\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.parse.snippet_max_chars, 500);
    }
}
