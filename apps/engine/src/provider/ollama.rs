//! Local provider backed by an Ollama generate endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::prompts::FRENCH_ONLY_SUFFIX;
use crate::provider::{build_http_client, AccessState, LlmProvider, ProviderError, ProviderKind};

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: Option<String>,
}

/// Remote-model provider for a locally hosted Ollama instance.
/// No credential needed — configuration is just a non-empty endpoint URL.
pub struct OllamaProvider {
    client: Client,
    api_url: String,
    model: String,
    access: AccessState,
}

impl OllamaProvider {
    pub fn new(api_url: String, model: String) -> Self {
        OllamaProvider {
            client: build_http_client(),
            api_url,
            model,
            access: AccessState::new(),
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Ollama
    }

    fn is_configured(&self) -> bool {
        !self.api_url.is_empty()
    }

    fn is_accessible(&self) -> bool {
        self.access.is_accessible()
    }

    fn mark_degraded(&self) {
        self.access.mark_degraded();
    }

    fn reset_access(&self) {
        self.access.reset();
    }

    async fn ask(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = OllamaRequest {
            model: &self.model,
            prompt: format!("{prompt}{FRENCH_ONLY_SUFFIX}"),
            stream: false,
        };

        let response = self.client.post(&self.api_url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: OllamaResponse = response.json().await?;
        debug!("Ollama response parsed");
        parsed.response.ok_or(ProviderError::EmptyResponse)
    }
}
