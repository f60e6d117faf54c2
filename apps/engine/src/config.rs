use anyhow::Result;

use crate::provider::ProviderKind;

/// Default Ollama generation endpoint, matching a stock local install.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
/// Default local model name.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

/// Engine configuration loaded from environment variables.
///
/// Every field has a working default: a missing `GEMINI_API_KEY` leaves the
/// cloud provider unconfigured rather than failing startup, since the engine
/// degrades to heuristic analysis on its own.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub gemini_api_key: String,
    pub ollama_api_url: String,
    pub ollama_model: String,
    pub active_provider: ProviderKind,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(EngineConfig {
            gemini_api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            ollama_api_url: std::env::var("OLLAMA_API_URL")
                .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string()),
            ollama_model: std::env::var("OLLAMA_MODEL")
                .unwrap_or_else(|_| DEFAULT_OLLAMA_MODEL.to_string()),
            active_provider: match std::env::var("LLM_PROVIDER") {
                Ok(name) => name.parse()?,
                Err(_) => ProviderKind::Gemini,
            },
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            gemini_api_key: String::new(),
            ollama_api_url: DEFAULT_OLLAMA_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            active_provider: ProviderKind::Gemini,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_ollama_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.ollama_api_url, DEFAULT_OLLAMA_URL);
        assert_eq!(config.ollama_model, DEFAULT_OLLAMA_MODEL);
        assert_eq!(config.active_provider, ProviderKind::Gemini);
    }

    #[test]
    fn test_default_config_leaves_gemini_unconfigured() {
        let config = EngineConfig::default();
        assert!(config.gemini_api_key.is_empty());
    }
}
