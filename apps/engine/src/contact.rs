//! Contact extraction — pulls a candidate's name, email, and phone number out
//! of raw CV text with lightweight patterns (French phone formats).

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // +33 or leading 0, then 9 digits in pairs with optional separators.
    Regex::new(r"(?:\+33|0)\s*[1-9](?:[\s.\-]*\d{2}){4}").expect("valid phone regex")
});

static LABELED_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Horizontal whitespace only inside the name — a newline ends it.
    Regex::new(
        r"(?i)(?:Nom\s*:|Name\s*:|Prénom\s*:|First\s*Name\s*:|Last\s*Name\s*:)[ \t]*([A-Za-zÀ-ÿ]+[ \t]+[A-Za-zÀ-ÿ]+(?:[ \t]+[A-Za-zÀ-ÿ]+)?)",
    )
    .expect("valid name regex")
});

static BARE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-zÀ-ÿ]+\s+[A-Za-zÀ-ÿ]+(?:\s+[A-Za-zÀ-ÿ]+)?$").expect("valid name regex")
});

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// Finds a candidate name: first a labeled field ("Nom:", "Name:", …), then
/// any line of two or three words with at least one capitalized word.
pub fn extract_name(text: &str) -> Option<String> {
    if let Some(captures) = LABELED_NAME_RE.captures(text) {
        let name = captures[1].trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }

    for line in text.lines() {
        let line = line.trim();
        if !BARE_NAME_RE.is_match(line) {
            continue;
        }
        let has_capitalized = line
            .split_whitespace()
            .any(|word| word.chars().count() > 1 && word.chars().next().is_some_and(char::is_uppercase));
        if has_capitalized {
            return Some(line.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email() {
        let text = "Contact : jean.dupont+cv@example.fr / LinkedIn";
        assert_eq!(
            extract_email(text).as_deref(),
            Some("jean.dupont+cv@example.fr")
        );
        assert_eq!(extract_email("pas d'adresse ici"), None);
    }

    #[test]
    fn test_extract_phone_national_and_international() {
        assert_eq!(
            extract_phone("Tél : 06 12 34 56 78").as_deref(),
            Some("06 12 34 56 78")
        );
        assert_eq!(
            extract_phone("Joignable au +33 6 12 34 56 78").as_deref(),
            Some("+33 6 12 34 56 78")
        );
        assert_eq!(extract_phone("aucun numéro"), None);
    }

    #[test]
    fn test_extract_name_labeled_field() {
        assert_eq!(
            extract_name("Nom : Jean Dupont\nDéveloppeur").as_deref(),
            Some("Jean Dupont")
        );
    }

    #[test]
    fn test_extract_name_bare_capitalized_line() {
        let text = "quelques mots en minuscules sans fin claire\nMarie Claire Durand\nDéveloppeuse";
        assert_eq!(extract_name(text).as_deref(), Some("Marie Claire Durand"));
    }

    #[test]
    fn test_extract_name_none_found() {
        assert_eq!(extract_name("12345\n67890"), None);
    }
}
