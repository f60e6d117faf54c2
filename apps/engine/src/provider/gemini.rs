//! Cloud provider backed by the Gemini generateContent API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::prompts::FRENCH_ONLY_SUFFIX;
use crate::provider::{build_http_client, AccessState, LlmProvider, ProviderError, ProviderKind};

/// Fixed content-generation endpoint; the API key travels as a query parameter.
pub const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Sentinel an unset key comes through as when env templates quote it.
const PLACEHOLDER_KEY: &str = "''";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Follows `candidates[0].content.parts[0].text`; any other shape is `None`.
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    error: GeminiApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiApiErrorBody {
    message: String,
}

/// Remote-model provider for the hosted Gemini API.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    access: AccessState,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        GeminiProvider {
            client: build_http_client(),
            api_key,
            access: AccessState::new(),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != PLACEHOLDER_KEY
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
        let url = format!("{GEMINI_API_URL}?key={}", self.api_key);
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: format!("{prompt}{FRENCH_ONLY_SUFFIX}"),
                }],
            }],
        };

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiApiError>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        debug!("Gemini response parsed");
        parsed.into_text().ok_or(ProviderError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::heuristics;

    #[test]
    fn test_is_configured_rejects_empty_key() {
        assert!(!GeminiProvider::new(String::new()).is_configured());
    }

    #[test]
    fn test_is_configured_rejects_placeholder_key() {
        assert!(!GeminiProvider::new("''".to_string()).is_configured());
    }

    #[test]
    fn test_is_configured_accepts_real_key() {
        assert!(GeminiProvider::new("AIza-test".to_string()).is_configured());
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Bonjour"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_text().as_deref(), Some("Bonjour"));
    }

    #[test]
    fn test_response_unexpected_shape_yields_none() {
        let raw = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.into_text().is_none());

        let raw = r#"{"error":{"message":"bad key"}}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.into_text().is_none());
    }

    #[tokio::test]
    async fn test_degraded_provider_uses_heuristics_without_network() {
        let provider = GeminiProvider::new("AIza-test".to_string());
        provider.mark_degraded();

        let cv = "Expérience\nDéveloppeur Java et Docker";
        let analysis = provider.analyze_cv(cv).await;
        assert_eq!(analysis, heuristics::analyze_cv(cv));
        assert!(!provider.is_accessible());
    }

    #[tokio::test]
    async fn test_degraded_provider_falls_back_for_questions() {
        let provider = GeminiProvider::new("AIza-test".to_string());
        provider.mark_degraded();

        let questions = provider.generate_questions("CV", "Offre").await;
        assert_eq!(questions, heuristics::fallback_interview_questions());
    }
}
