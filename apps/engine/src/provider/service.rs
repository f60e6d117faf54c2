//! Provider facade — owns both concrete providers and the active selection.
//!
//! The selection is re-read on every delegated call, so a runtime switch
//! takes effect on the next operation.

use std::sync::RwLock;

use tracing::info;

use crate::analysis::{CvAnalysis, JobMatch};
use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::provider::{GeminiProvider, LlmProvider, OllamaProvider, ProviderKind};

pub struct LlmService {
    gemini: GeminiProvider,
    ollama: OllamaProvider,
    active: RwLock<ProviderKind>,
}

impl LlmService {
    pub fn new(config: &EngineConfig) -> Self {
        LlmService {
            gemini: GeminiProvider::new(config.gemini_api_key.clone()),
            ollama: OllamaProvider::new(
                config.ollama_api_url.clone(),
                config.ollama_model.clone(),
            ),
            active: RwLock::new(config.active_provider),
        }
    }

    pub fn active_provider(&self) -> ProviderKind {
        *self.active.read().expect("provider selection lock poisoned")
    }

    /// Switches the active provider. An unknown name fails with
    /// [`EngineError::UnknownProvider`] and leaves the selection untouched.
    ///
    /// A successful switch resets the target provider's access state:
    /// reconfiguration is the explicit recovery point for a degraded provider.
    pub fn set_active_provider(&self, name: &str) -> Result<ProviderKind, EngineError> {
        let kind: ProviderKind = name.parse()?;
        let mut active = self.active.write().expect("provider selection lock poisoned");
        info!("Switching LLM provider from '{}' to '{kind}'", *active);
        *active = kind;
        drop(active);

        self.provider_for(kind).reset_access();
        Ok(kind)
    }

    pub fn is_configured(&self) -> bool {
        self.provider().is_configured()
    }

    pub fn is_accessible(&self) -> bool {
        self.provider().is_accessible()
    }

    pub async fn analyze_cv(&self, cv_text: &str) -> CvAnalysis {
        self.provider().analyze_cv(cv_text).await
    }

    pub async fn evaluate_match(&self, cv_text: &str, job_offer: &str) -> JobMatch {
        self.provider().evaluate_match(cv_text, job_offer).await
    }

    pub async fn generate_questions(&self, cv_text: &str, job_offer: &str) -> Vec<String> {
        self.provider().generate_questions(cv_text, job_offer).await
    }

    fn provider(&self) -> &dyn LlmProvider {
        self.provider_for(self.active_provider())
    }

    fn provider_for(&self, kind: ProviderKind) -> &dyn LlmProvider {
        match kind {
            ProviderKind::Gemini => &self.gemini,
            ProviderKind::Ollama => &self.ollama,
        }
    }
}
