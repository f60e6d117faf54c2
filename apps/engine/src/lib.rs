//! CV screening engine — evaluates candidate CVs against a job offer.
//!
//! The engine extracts structured facts (skills, experience, education,
//! languages) and a fit score, through a remote language-model provider when
//! one is configured and a deterministic keyword-based fallback otherwise.
//! Collaborators hand it plain extracted text and get back a ranked, enriched
//! candidate list; transport, storage, and file-format concerns stay outside.

pub mod analysis;
pub mod config;
pub mod contact;
pub mod errors;
pub mod provider;
pub mod screening;
pub mod selection;

pub use analysis::{CvAnalysis, JobMatch};
pub use config::EngineConfig;
pub use errors::EngineError;
pub use provider::{GeminiProvider, LlmProvider, LlmService, OllamaProvider, ProviderKind};
pub use screening::{screen_candidates, CandidateReport, ProviderStatus, ScreeningOutcome};
pub use selection::{select_top_cvs, ScoredCv, SELECTION_LIMIT};
