//! Analysis core — structured CV facts, job-match scoring, and the two
//! interchangeable extraction paths (remote model vs. heuristics).

use serde::{Deserialize, Serialize};

pub mod heuristics;
pub mod parser;
pub mod prompts;

/// Structured facts extracted from one CV.
///
/// `skills` and `languages` preserve discovery order and may contain
/// duplicates; `experience` and `education` are free text, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CvAnalysis {
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub languages: Vec<String>,
}

/// Relevance verdict for one CV against one job offer.
///
/// `score` is intended to be 0–100. The heuristic path clamps it into
/// [30, 90]; the remote-model path only reduces values above 100 modulo 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub score: u32,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_analysis_default_is_empty() {
        let analysis = CvAnalysis::default();
        assert!(analysis.skills.is_empty());
        assert!(analysis.experience.is_empty());
        assert!(analysis.education.is_empty());
        assert!(analysis.languages.is_empty());
    }

    #[test]
    fn test_job_match_serializes_score_and_explanation() {
        let m = JobMatch {
            score: 72,
            explanation: "Bon profil".to_string(),
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("72"));
        assert!(json.contains("Bon profil"));
    }
}
