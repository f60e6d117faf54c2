//! Response Parser — turns free-text model output into structured records.
//!
//! Remote models answer in loosely formatted French prose. These parsers are
//! total: whatever the input looks like, they return a (possibly empty)
//! structure rather than an error.

use crate::analysis::{CvAnalysis, JobMatch};

/// Which analysis section the current line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Skills,
    Experience,
    Education,
    Languages,
}

/// Parses a structured-analysis response into a [`CvAnalysis`].
///
/// A line is a section header when it contains the section name (either case
/// variant) or the matching ordinal marker ("1."–"4.") anywhere in the line.
/// Headers are consumed; subsequent lines are routed to the current section.
pub fn parse_analysis(raw: &str) -> CvAnalysis {
    let mut skills = Vec::new();
    let mut experience = String::new();
    let mut education = String::new();
    let mut languages = Vec::new();

    let mut section = Section::None;
    for line in raw.lines() {
        let line = line.trim();

        if line.contains("Compétences") || line.contains("compétences") || line.contains("1.") {
            section = Section::Skills;
            continue;
        } else if line.contains("Expérience") || line.contains("expérience") || line.contains("2.")
        {
            section = Section::Experience;
            continue;
        } else if line.contains("Formation") || line.contains("formation") || line.contains("3.") {
            section = Section::Education;
            continue;
        } else if line.contains("Langues") || line.contains("langues") || line.contains("4.") {
            section = Section::Languages;
            continue;
        }

        if line.is_empty() {
            continue;
        }

        match section {
            Section::Skills => collect_items(line, &mut skills),
            Section::Experience => {
                experience.push_str(line);
                experience.push('\n');
            }
            Section::Education => {
                education.push_str(line);
                education.push('\n');
            }
            Section::Languages => collect_items(line, &mut languages),
            Section::None => {}
        }
    }

    CvAnalysis {
        skills,
        experience: experience.trim().to_string(),
        education: education.trim().to_string(),
        languages,
    }
}

/// Parses a match-evaluation response into a [`JobMatch`].
///
/// The whole trimmed text becomes the explanation. The score comes from the
/// first "score"/"note" line that yields a parseable integer after its colon;
/// values above 100 are reduced modulo 100; no such line means score 0.
pub fn parse_job_match(raw: &str) -> JobMatch {
    let explanation = raw.trim().to_string();
    let mut score = 0;

    for line in raw.lines() {
        let lower = line.to_lowercase();
        if !lower.contains("score") && !lower.contains("note") {
            continue;
        }
        let Some((_, rest)) = line.split_once(':') else {
            continue;
        };
        let digits: String = rest.chars().filter(|c| c.is_ascii_digit()).collect();
        if let Ok(mut value) = digits.parse::<u32>() {
            if value > 100 {
                value %= 100;
            }
            score = value;
            break;
        }
    }

    JobMatch { score, explanation }
}

/// Parses an interview-question response into a list of questions.
///
/// Keeps lines that carry a leading "N." marker or contain a question mark;
/// blank lines and "questions" headings are skipped; ordinal markers are
/// stripped from kept lines.
pub fn parse_questions(raw: &str) -> Vec<String> {
    let mut questions = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.contains("Questions") || line.contains("questions") {
            continue;
        }
        if has_leading_ordinal(line) || line.contains('?') {
            let question = strip_leading_ordinal(line).trim();
            if !question.is_empty() {
                questions.push(question.to_string());
            }
        }
    }

    questions
}

/// Routes one skills/languages line: bullet lines are stripped and added
/// whole; other lines split into fragments on commas, semicolons, or " et ".
fn collect_items(line: &str, items: &mut Vec<String>) {
    if line.contains('-') || line.contains('•') {
        items.push(strip_bullet(line).trim().to_string());
    } else {
        for part in line.split([',', ';']) {
            for fragment in part.split(" et ") {
                let fragment = fragment.trim();
                if !fragment.is_empty() {
                    items.push(fragment.to_string());
                }
            }
        }
    }
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == '-' || c == '•' || c.is_whitespace())
}

/// True when the line starts with one or more digits followed by a period.
fn has_leading_ordinal(line: &str) -> bool {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && line[digits..].starts_with('.')
}

/// Removes a leading "N. " marker, if present.
fn strip_leading_ordinal(line: &str) -> &str {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix('.') {
            return rest.trim_start();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analysis_ordinal_headers() {
        let raw = "1. Compétences\nJava, Python\n2. Expérience\nBuilt system X";
        let analysis = parse_analysis(raw);
        assert_eq!(analysis.skills, vec!["Java", "Python"]);
        assert_eq!(analysis.experience, "Built system X");
        assert!(analysis.education.is_empty());
        assert!(analysis.languages.is_empty());
    }

    #[test]
    fn test_parse_analysis_named_headers_and_bullets() {
        let raw = "Compétences principales :\n- Java\n- Docker\nLangues parlées :\n- Anglais";
        let analysis = parse_analysis(raw);
        assert_eq!(analysis.skills, vec!["Java", "Docker"]);
        assert_eq!(analysis.languages, vec!["Anglais"]);
    }

    #[test]
    fn test_parse_analysis_splits_on_et() {
        let raw = "Compétences\nJava, Python et Go; SQL";
        let analysis = parse_analysis(raw);
        assert_eq!(analysis.skills, vec!["Java", "Python", "Go", "SQL"]);
    }

    #[test]
    fn test_parse_analysis_multiline_experience_is_trimmed() {
        let raw = "Expérience\nDev backend chez Acme\nPuis lead technique\n";
        let analysis = parse_analysis(raw);
        assert_eq!(
            analysis.experience,
            "Dev backend chez Acme\nPuis lead technique"
        );
    }

    #[test]
    fn test_parse_analysis_lines_before_any_header_are_dropped() {
        let raw = "Voici mon analyse du candidat\nCompétences\nJava";
        let analysis = parse_analysis(raw);
        assert_eq!(analysis.skills, vec!["Java"]);
    }

    #[test]
    fn test_parse_analysis_empty_input() {
        assert_eq!(parse_analysis(""), CvAnalysis::default());
    }

    #[test]
    fn test_parse_job_match_score_line() {
        let verdict = parse_job_match("Score: 85\nGood fit overall");
        assert_eq!(verdict.score, 85);
        assert_eq!(verdict.explanation, "Score: 85\nGood fit overall");
    }

    #[test]
    fn test_parse_job_match_note_keyword_case_insensitive() {
        let verdict = parse_job_match("NOTE : 40 sur 100\nProfil moyen");
        // Digits after the colon concatenate: 40 and 100 → 40100 % 100.
        assert_eq!(verdict.score, 0);
    }

    #[test]
    fn test_parse_job_match_modulo_above_100() {
        let verdict = parse_job_match("Score : 120");
        assert_eq!(verdict.score, 20);
    }

    #[test]
    fn test_parse_job_match_defaults_to_zero() {
        let verdict = parse_job_match("Aucune évaluation chiffrée fournie.");
        assert_eq!(verdict.score, 0);
        assert_eq!(verdict.explanation, "Aucune évaluation chiffrée fournie.");
    }

    #[test]
    fn test_parse_job_match_score_line_without_colon_is_skipped() {
        let verdict = parse_job_match("Le score est 75 environ");
        assert_eq!(verdict.score, 0);
    }

    #[test]
    fn test_parse_questions_strips_ordinals_and_skips_heading() {
        let raw = "Voici les questions :\n\
                   1. Parlez-moi de votre dernier projet ?\n\
                   2. Pourquoi ce poste ?\n\
                   Une remarque sans rapport\n\
                   Quelle est votre disponibilité ?";
        let questions = parse_questions(raw);
        assert_eq!(
            questions,
            vec![
                "Parlez-moi de votre dernier projet ?",
                "Pourquoi ce poste ?",
                "Quelle est votre disponibilité ?",
            ]
        );
    }

    #[test]
    fn test_parse_questions_ordinal_line_without_question_mark_is_kept() {
        let questions = parse_questions("1. Décrivez votre parcours");
        assert_eq!(questions, vec!["Décrivez votre parcours"]);
    }

    #[test]
    fn test_parse_questions_empty_input() {
        assert!(parse_questions("").is_empty());
    }
}
