//! Screening pipeline — the two-stage filter-then-rank flow over a batch of
//! CVs: heuristic pre-selection of the top candidates, optional
//! provider-backed enrichment, then a final ranking by the provider's
//! semantic match score.
//!
//! The overlap score and the match score live on different scales; the first
//! only filters, the second orders the final report.

use serde::Serialize;
use tracing::info;

use crate::analysis::{CvAnalysis, JobMatch};
use crate::contact;
use crate::provider::{LlmService, ProviderKind};
use crate::selection::select_top_cvs;

/// Everything the engine knows about one selected candidate.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateReport {
    /// Position of this CV in the caller's original list.
    pub index: usize,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Heuristic pre-selection score, [30, 90].
    pub overlap_score: u32,
    /// Provider-backed structured analysis; `None` when no provider is configured.
    pub analysis: Option<CvAnalysis>,
    /// Provider-backed match verdict; `None` when no provider is configured.
    pub job_match: Option<JobMatch>,
    pub interview_questions: Vec<String>,
}

/// Snapshot of the provider state at the end of a screening run —
/// lets callers tell model-backed output from heuristic fallback.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderStatus {
    pub provider: ProviderKind,
    pub enabled: bool,
    pub accessible: bool,
    pub using_fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct ScreeningOutcome {
    pub candidates: Vec<CandidateReport>,
    pub llm: ProviderStatus,
}

/// Runs the full screening flow over a batch of CV texts.
///
/// Pre-selects the top candidates by keyword overlap, enriches each one
/// through the active provider when it is configured (analysis, match
/// verdict, interview questions — each degrading to heuristics on provider
/// failure), and returns the reports sorted by descending match score.
/// Unenriched candidates rank with score 0.
pub async fn screen_candidates(
    service: &LlmService,
    cv_texts: &[String],
    job_offer: &str,
) -> ScreeningOutcome {
    let selected = select_top_cvs(cv_texts, job_offer);
    let enrich = service.is_configured();
    info!(
        "Screening {} CVs, {} selected, enrichment {}",
        cv_texts.len(),
        selected.len(),
        if enrich { "enabled" } else { "disabled" }
    );

    let mut candidates = Vec::with_capacity(selected.len());
    for scored in selected {
        let cv = &cv_texts[scored.index];
        let mut report = CandidateReport {
            index: scored.index,
            name: contact::extract_name(cv),
            email: contact::extract_email(cv),
            phone: contact::extract_phone(cv),
            overlap_score: scored.overlap_score,
            analysis: None,
            job_match: None,
            interview_questions: Vec::new(),
        };

        if enrich {
            report.analysis = Some(service.analyze_cv(cv).await);
            report.job_match = Some(service.evaluate_match(cv, job_offer).await);
            report.interview_questions = service.generate_questions(cv, job_offer).await;
        }

        candidates.push(report);
    }

    // Final ranking by the provider's semantic score — a different scale
    // than the overlap score used for pre-selection.
    candidates.sort_by(|a, b| match_score(b).cmp(&match_score(a)));

    let llm = ProviderStatus {
        provider: service.active_provider(),
        enabled: service.is_configured(),
        accessible: service.is_accessible(),
        using_fallback: service.is_configured() && !service.is_accessible(),
    };

    ScreeningOutcome { candidates, llm }
}

fn match_score(report: &CandidateReport) -> u32 {
    report.job_match.as_ref().map(|m| m.score).unwrap_or(0)
}
