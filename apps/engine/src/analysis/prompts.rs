//! Prompt builders for the three provider operations.
//!
//! CV text is truncated per operation to bound request size; the job offer is
//! sent whole. Providers append [`FRENCH_ONLY_SUFFIX`] at the network layer.

/// Instruction appended to every outgoing prompt.
pub const FRENCH_ONLY_SUFFIX: &str = " Veuillez répondre uniquement en français.";

/// CV character budget for the structured-analysis prompt.
pub const MAX_ANALYSIS_CHARS: usize = 3000;
/// CV character budget for the match-evaluation prompt.
pub const MAX_MATCH_CHARS: usize = 2000;
/// CV character budget for the question-generation prompt.
pub const MAX_QUESTION_CHARS: usize = 1500;

/// Prompt asking the model for a four-section structured CV analysis.
pub fn analysis_prompt(cv_text: &str) -> String {
    format!(
        "Analyse ce CV et extrait les informations suivantes :\n\
         1. Compétences techniques principales (liste de mots-clés)\n\
         2. Expérience professionnelle (résumé)\n\
         3. Formation (résumé)\n\
         4. Langues parlées\n\n\
         CV: {}",
        truncate_chars(cv_text, MAX_ANALYSIS_CHARS)
    )
}

/// Prompt asking the model for a 0–100 relevance score with explanation.
pub fn match_prompt(cv_text: &str, job_offer: &str) -> String {
    format!(
        "Évalue la pertinence de ce CV pour cette offre d'emploi. \
         Donne un score de pertinence de 0 à 100 et une explication détaillée \
         des forces et faiblesses du candidat.\n\n\
         CV: {}\n\n\
         Offre d'emploi: {job_offer}",
        truncate_chars(cv_text, MAX_MATCH_CHARS)
    )
}

/// Prompt asking the model for five tailored interview questions.
pub fn questions_prompt(cv_text: &str, job_offer: &str) -> String {
    format!(
        "Génère 5 questions d'entretien pertinentes et techniques pour ce candidat \
         en fonction de son CV et de l'offre d'emploi. Les questions doivent \
         permettre d'évaluer les compétences du candidat par rapport aux exigences \
         du poste.\n\n\
         CV: {}\n\n\
         Offre d'emploi: {job_offer}",
        truncate_chars(cv_text, MAX_QUESTION_CHARS)
    )
}

/// Truncates to at most `max_chars` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short_input_untouched() {
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_chars_counts_chars_not_bytes() {
        let text = "ééééé"; // 5 chars, 10 bytes
        assert_eq!(truncate_chars(text, 3), "ééé");
    }

    #[test]
    fn test_analysis_prompt_truncates_cv() {
        let cv = "x".repeat(MAX_ANALYSIS_CHARS + 500);
        let prompt = analysis_prompt(&cv);
        assert!(prompt.contains(&"x".repeat(MAX_ANALYSIS_CHARS)));
        assert!(!prompt.contains(&"x".repeat(MAX_ANALYSIS_CHARS + 1)));
    }

    #[test]
    fn test_match_prompt_keeps_job_offer_whole() {
        let cv = "y".repeat(MAX_MATCH_CHARS + 100);
        let prompt = match_prompt(&cv, "Offre complète non tronquée");
        assert!(prompt.contains("Offre complète non tronquée"));
        assert!(!prompt.contains(&"y".repeat(MAX_MATCH_CHARS + 1)));
    }

    #[test]
    fn test_questions_prompt_mentions_five_questions() {
        let prompt = questions_prompt("CV", "Offre");
        assert!(prompt.contains("5 questions"));
    }
}
