//! Provider layer — pluggable remote-model analysis strategies.
//!
//! Each provider exposes the same capability set: configuration check,
//! accessibility check, CV analysis, match evaluation, and interview-question
//! generation. The network step returns an explicit `Result`; every failure
//! path is a visible branch into the heuristic fallback, never a surfaced
//! error.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::analysis::{heuristics, parser, prompts, CvAnalysis, JobMatch};
use crate::errors::EngineError;

pub mod gemini;
pub mod ollama;
pub mod service;

pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;
pub use service::LlmService;

/// Timeout applied to every provider HTTP client.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Identifier of a known provider implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gemini,
    Ollama,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Ollama => "ollama",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = EngineError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "ollama" => Ok(ProviderKind::Ollama),
            _ => Err(EngineError::UnknownProvider(name.to_string())),
        }
    }
}

/// Error produced by a provider's network step.
///
/// Never propagated past the provider: callers convert it into heuristic
/// fallback after degrading the access state.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("response contained no text")]
    EmptyResponse,
}

/// Two-state health flag for one provider instance:
/// Accessible ⇄ Degraded.
///
/// The first failed call flips it to Degraded; it stays there, gating every
/// later call on the instance, until an explicit [`AccessState::reset`] —
/// the facade performs one when the provider is reselected.
#[derive(Debug)]
pub struct AccessState {
    accessible: AtomicBool,
}

impl AccessState {
    pub fn new() -> Self {
        AccessState {
            accessible: AtomicBool::new(true),
        }
    }

    pub fn is_accessible(&self) -> bool {
        // Relaxed: the flag is one-way until reset; a racing reader at worst
        // pays for one extra failed call.
        self.accessible.load(Ordering::Relaxed)
    }

    pub fn mark_degraded(&self) {
        self.accessible.store(false, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.accessible.store(true, Ordering::Relaxed);
    }
}

impl Default for AccessState {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability set shared by all remote-model providers.
///
/// The three analysis operations are provided methods: they short-circuit to
/// heuristics when degraded, otherwise issue one `ask` round trip and parse
/// the raw text, degrading on any failure or empty response.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Whether the provider has the configuration it needs to be called.
    fn is_configured(&self) -> bool;

    /// Whether the provider is currently in the Accessible state.
    fn is_accessible(&self) -> bool;

    /// Flips the provider to Degraded.
    fn mark_degraded(&self);

    /// Explicitly returns the provider to Accessible.
    fn reset_access(&self);

    /// One synchronous request/response round trip to the remote model.
    async fn ask(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Extracts structured facts from a CV.
    async fn analyze_cv(&self, cv_text: &str) -> CvAnalysis {
        if !self.is_accessible() {
            return heuristics::analyze_cv(cv_text);
        }
        match self.ask(&prompts::analysis_prompt(cv_text)).await {
            Ok(text) if !text.trim().is_empty() => parser::parse_analysis(&text),
            Ok(_) => {
                warn!(provider = %self.kind(), "empty analysis response, degrading to heuristics");
                self.mark_degraded();
                heuristics::analyze_cv(cv_text)
            }
            Err(e) => {
                error!(provider = %self.kind(), "CV analysis call failed: {e}");
                self.mark_degraded();
                heuristics::analyze_cv(cv_text)
            }
        }
    }

    /// Scores a CV against a job offer.
    async fn evaluate_match(&self, cv_text: &str, job_offer: &str) -> JobMatch {
        if !self.is_accessible() {
            return heuristics::fallback_job_match(cv_text, job_offer);
        }
        match self.ask(&prompts::match_prompt(cv_text, job_offer)).await {
            Ok(text) if !text.trim().is_empty() => parser::parse_job_match(&text),
            Ok(_) => {
                warn!(provider = %self.kind(), "empty match response, degrading to heuristics");
                self.mark_degraded();
                heuristics::fallback_job_match(cv_text, job_offer)
            }
            Err(e) => {
                error!(provider = %self.kind(), "match evaluation call failed: {e}");
                self.mark_degraded();
                heuristics::fallback_job_match(cv_text, job_offer)
            }
        }
    }

    /// Generates interview questions tailored to a CV and a job offer.
    async fn generate_questions(&self, cv_text: &str, job_offer: &str) -> Vec<String> {
        if !self.is_accessible() {
            return heuristics::fallback_interview_questions();
        }
        match self
            .ask(&prompts::questions_prompt(cv_text, job_offer))
            .await
        {
            Ok(text) if !text.trim().is_empty() => parser::parse_questions(&text),
            Ok(_) => {
                warn!(provider = %self.kind(), "empty questions response, degrading to heuristics");
                self.mark_degraded();
                heuristics::fallback_interview_questions()
            }
            Err(e) => {
                error!(provider = %self.kind(), "question generation call failed: {e}");
                self.mark_degraded();
                heuristics::fallback_interview_questions()
            }
        }
    }
}

/// Builds the HTTP client shared by provider implementations.
pub(crate) fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client")
}
