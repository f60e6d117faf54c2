//! Heuristic Extraction Engine — fixed-vocabulary and line-region scanning
//! over raw CV text. Pure functions, no network, no failure modes.
//!
//! This is the fallback analysis path used whenever no remote provider is
//! configured or the active provider has degraded.

use std::collections::HashSet;

use crate::analysis::{CvAnalysis, JobMatch};

/// Technology and skill terms recognized by the fallback extractor.
/// Matches are reported in this order, with this canonical casing.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Java",
    "Python",
    "JavaScript",
    "HTML",
    "CSS",
    "SQL",
    "NoSQL",
    "Angular",
    "React",
    "Vue",
    "Node.js",
    "Spring",
    "Hibernate",
    "JPA",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "DevOps",
    "CI/CD",
    "Git",
    "Agile",
    "Scrum",
    "PHP",
    "C++",
    "C#",
    ".NET",
    "Ruby",
    "Swift",
    "Kotlin",
    "Android",
    "iOS",
    "Linux",
    "Windows",
    "MacOS",
    "REST",
    "API",
    "JSON",
    "XML",
    "SOAP",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Oracle",
    "Redis",
    "ElasticSearch",
];

/// Natural-language names recognized by the fallback extractor (lowercase).
pub const LANGUAGE_VOCABULARY: &[&str] = &[
    "français",
    "anglais",
    "espagnol",
    "allemand",
    "italien",
    "chinois",
    "arabe",
    "russe",
    "portugais",
    "japonais",
];

/// Keywords that open the experience section of a CV.
const EXPERIENCE_HEADERS: &[&str] = &["expérience", "travail", "emploi", "professionnelle"];
/// Keywords belonging to other sections — seeing one closes the experience section.
const EXPERIENCE_EXITS: &[&str] = &["formation", "éducation", "compétence"];

/// Keywords that open the education section of a CV.
const EDUCATION_HEADERS: &[&str] = &["formation", "éducation", "diplôme", "études"];
/// Keywords belonging to other sections — seeing one closes the education section.
const EDUCATION_EXITS: &[&str] = &["expérience", "compétence", "langue"];

/// Lower clamp of the overlap score — the heuristic path never claims "no match".
pub const MIN_OVERLAP_SCORE: u32 = 30;
/// Upper clamp of the overlap score — nor does it claim "perfect match".
pub const MAX_OVERLAP_SCORE: u32 = 90;

/// Job tokens this short carry no signal and are skipped when matching.
const MIN_TOKEN_CHARS: usize = 4;

/// Bundles the four extractors into one structured result — the heuristic
/// counterpart of a full provider analysis.
pub fn analyze_cv(cv_text: &str) -> CvAnalysis {
    CvAnalysis {
        skills: extract_skills(cv_text),
        experience: extract_experience(cv_text),
        education: extract_education(cv_text),
        languages: extract_languages(cv_text),
    }
}

/// Case-insensitive substring search against [`SKILL_VOCABULARY`].
/// Returns the subset present, in vocabulary order.
pub fn extract_skills(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}

/// Accumulates the experience section lines of a CV into one trimmed block.
pub fn extract_experience(text: &str) -> String {
    extract_section(text, EXPERIENCE_HEADERS, EXPERIENCE_EXITS)
}

/// Accumulates the education section lines of a CV into one trimmed block.
pub fn extract_education(text: &str) -> String {
    extract_section(text, EDUCATION_HEADERS, EDUCATION_EXITS)
}

/// Case-insensitive substring search against [`LANGUAGE_VOCABULARY`].
/// Matches are returned with the first letter capitalized.
pub fn extract_languages(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    LANGUAGE_VOCABULARY
        .iter()
        .filter(|language| haystack.contains(**language))
        .map(|language| capitalize_first(language))
        .collect()
}

/// Keyword-overlap relevance of a CV for a job offer, clamped to
/// [[`MIN_OVERLAP_SCORE`], [`MAX_OVERLAP_SCORE`]].
///
/// Each job token counts at most one CV match; tokens shorter than
/// [`MIN_TOKEN_CHARS`] are skipped for matching but still counted in the
/// denominator.
pub fn keyword_overlap_score(cv_text: &str, job_offer: &str) -> u32 {
    overlap(cv_text, job_offer).1
}

/// Heuristic job-match verdict: overlap score plus a short French
/// explanation carrying the raw match count.
pub fn fallback_job_match(cv_text: &str, job_offer: &str) -> JobMatch {
    let (matches, score) = overlap(cv_text, job_offer);
    let explanation = format!(
        "Score basé sur l'analyse des correspondances de mots-clés entre le CV \
         et l'offre d'emploi. Le candidat a {matches} correspondances de \
         mots-clés avec l'offre."
    );
    JobMatch { score, explanation }
}

/// Fixed interview questions used when no provider can generate tailored ones.
pub fn fallback_interview_questions() -> Vec<String> {
    [
        "Pouvez-vous me parler de votre expérience professionnelle la plus récente ?",
        "Quelles sont vos compétences techniques principales ?",
        "Comment avez-vous résolu un problème technique complexe dans votre dernier poste ?",
        "Pourquoi êtes-vous intéressé par ce poste et notre entreprise ?",
        "Avez-vous des questions à nous poser sur le poste ou l'entreprise ?",
    ]
    .iter()
    .map(|q| q.to_string())
    .collect()
}

fn overlap(cv_text: &str, job_offer: &str) -> (u32, u32) {
    let job_tokens = tokenize(job_offer);
    let cv_tokens: HashSet<String> = tokenize(cv_text).into_iter().collect();

    let matches = job_tokens
        .iter()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS && cv_tokens.contains(*token))
        .count() as u32;

    let raw = matches * 100 / job_tokens.len().max(1) as u32;
    (matches, raw.clamp(MIN_OVERLAP_SCORE, MAX_OVERLAP_SCORE))
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Line-oriented section scanner. A header keyword enters the section and is
/// appended; once inside, a blank line or any exit keyword leaves the section
/// without appending. The section re-enters if a header reappears later.
fn extract_section(text: &str, headers: &[&str], exits: &[&str]) -> String {
    let mut accumulated = String::new();
    let mut in_section = false;

    for line in text.lines() {
        let lower = line.to_lowercase();
        if headers.iter().any(|keyword| lower.contains(keyword)) {
            in_section = true;
            accumulated.push_str(line);
            accumulated.push('\n');
        } else if in_section {
            if line.is_empty() || exits.iter().any(|keyword| lower.contains(keyword)) {
                in_section = false;
            } else {
                accumulated.push_str(line);
                accumulated.push('\n');
            }
        }
    }

    accumulated.trim().to_string()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
