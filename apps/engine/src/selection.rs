//! Candidate pre-selection — ranks CVs by keyword overlap with the job offer
//! and keeps the top few for provider-backed enrichment.
//!
//! This stage always uses the heuristic overlap scorer, never the provider:
//! it is a cheap filter, not the final ranking.

use serde::Serialize;

use crate::analysis::heuristics::keyword_overlap_score;

/// How many candidates survive pre-selection.
pub const SELECTION_LIMIT: usize = 5;

/// One CV with its pre-selection score. `index` points into the caller's
/// original CV list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCv {
    pub index: usize,
    pub overlap_score: u32,
}

/// Scores every CV against the job offer and returns the top
/// [`SELECTION_LIMIT`], sorted by descending overlap score. Ties keep
/// insertion order (stable sort).
pub fn select_top_cvs(cv_texts: &[String], job_offer: &str) -> Vec<ScoredCv> {
    let mut scored: Vec<ScoredCv> = cv_texts
        .iter()
        .enumerate()
        .map(|(index, cv)| ScoredCv {
            index,
            overlap_score: keyword_overlap_score(cv, job_offer),
        })
        .collect();

    scored.sort_by(|a, b| b.overlap_score.cmp(&a.overlap_score));
    scored.truncate(SELECTION_LIMIT);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cvs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    const JOB: &str = "Développeur Java Docker Kubernetes recherché";

    #[test]
    fn test_seven_cvs_yield_exactly_five() {
        let cvs = cvs(&[
            "Java Docker Kubernetes développeur",
            "Java Docker développeur",
            "Java développeur",
            "développeur",
            "Boulanger",
            "Pâtissier",
            "Java Docker Kubernetes développeur recherché",
        ]);
        let selected = select_top_cvs(&cvs, JOB);

        assert_eq!(selected.len(), SELECTION_LIMIT);
        for pair in selected.windows(2) {
            assert!(pair[0].overlap_score >= pair[1].overlap_score);
        }
        // The strongest CV covers every job token.
        assert_eq!(selected[0].index, 6);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let cvs = cvs(&[
            "Java Docker",
            "Kubernetes",
            "Java",
            "Docker Kubernetes Java",
            "rien",
            "Java Kubernetes",
            "Docker",
        ]);
        let first = select_top_cvs(&cvs, JOB);
        let second = select_top_cvs(&cvs, JOB);
        assert_eq!(first, second);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let cvs = cvs(&["aucun rapport", "toujours rien", "sans lien"]);
        let selected = select_top_cvs(&cvs, JOB);
        // All score the floor — order must match input order.
        let indices: Vec<usize> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_fewer_than_limit_returns_all() {
        let cvs = cvs(&["Java", "Docker"]);
        assert_eq!(select_top_cvs(&cvs, JOB).len(), 2);
    }

    #[test]
    fn test_empty_input_returns_empty() {
        assert!(select_top_cvs(&[], JOB).is_empty());
    }
}
