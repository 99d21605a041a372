//! Named entity recognition for résumé headers.
//!
//! `EntityRecognizer` is the seam the name extractor calls through. The
//! built-in `RegexEntityRecognizer` finds title-cased person names and
//! institution/company names with pattern matching; a model-backed recognizer
//! can implement the same trait and be injected into the parser instead.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single recognized entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Person,
    Organization,
}

/// Trait for pluggable entity recognizers.
pub trait EntityRecognizer: Send + Sync {
    /// Human-readable backend identifier (e.g. "regex").
    fn backend_id(&self) -> &str;

    /// Returns entities in document order. Must not fail on any input.
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

// ============================================================================
// RegexEntityRecognizer
// ============================================================================

/// Pattern-based recognizer tuned for the first lines of a résumé.
#[derive(Debug, Default)]
pub struct RegexEntityRecognizer;

impl EntityRecognizer for RegexEntityRecognizer {
    fn backend_id(&self) -> &str {
        "regex"
    }

    fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut seen = HashSet::new();
        let mut found: Vec<(usize, Entity)> = Vec::new();

        for cap in TITLED_PERSON.captures_iter(text) {
            if let Some(m) = cap.get(1) {
                push_unique(&mut found, &mut seen, m.start(), m.as_str(), EntityLabel::Person);
            }
        }

        for cap in CAPITALIZED_NAME.captures_iter(text) {
            if let Some(m) = cap.get(1) {
                let name = m.as_str().trim();
                if is_plausible_name(name) {
                    push_unique(&mut found, &mut seen, m.start(), name, EntityLabel::Person);
                }
            }
        }

        for cap in ORGANIZATION.captures_iter(text) {
            if let Some(m) = cap.get(1) {
                push_unique(
                    &mut found,
                    &mut seen,
                    m.start(),
                    m.as_str(),
                    EntityLabel::Organization,
                );
            }
        }

        found.sort_by_key(|(offset, _)| *offset);
        found.into_iter().map(|(_, entity)| entity).collect()
    }
}

fn push_unique(
    found: &mut Vec<(usize, Entity)>,
    seen: &mut HashSet<(EntityLabel, String)>,
    offset: usize,
    text: &str,
    label: EntityLabel,
) {
    let text = text.trim().to_string();
    if seen.insert((label, text.clone())) {
        found.push((offset, Entity { text, label }));
    }
}

// ============================================================================
// Patterns
// ============================================================================

// Horizontal whitespace only: names never span a line break.
static TITLED_PERSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:Dr\.|Prof\.|Mr\.|Mrs\.|Ms\.|Mx\.)[ \t]+([A-Z][a-z]+(?:[ \t]+[A-Z]\.?)?[ \t]+[A-Z][a-z]+)")
        .expect("titled person pattern should compile")
});

static CAPITALIZED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]{2,}(?:[ \t]+[A-Z]\.?)?(?:[ \t]+[A-Z][a-z]{2,}){1,2})\b")
        .expect("capitalized name pattern should compile")
});

static ORGANIZATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b((?:[A-Z][\w&]*[ \t]+){1,4}(?:Inc|LLC|Ltd|Corp|Corporation|University|College|Institute|Technologies|Labs))\b",
    )
    .expect("organization pattern should compile")
});

// Words that show up title-cased in résumé headers but never in a person's name.
static NON_NAME_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "University", "College", "Institute", "School", "Academy", "Inc", "Corp", "Ltd",
        "Technologies", "Labs", "Engineer", "Engineering", "Developer", "Manager", "Scientist",
        "Analyst", "Designer", "Consultant", "Intern", "Lead", "Senior", "Junior", "Architect",
        "Specialist", "Administrator", "Software", "Data", "Science", "Computer", "Experience",
        "Professional", "Skills", "Education", "Projects", "Certifications", "Summary",
        "Objective", "Profile", "Resume", "Curriculum", "Vitae", "Street", "Road", "Avenue",
        "Phone", "Email", "Mobile", "Address", "Contact",
    ]
    .into_iter()
    .collect()
});

fn is_plausible_name(name: &str) -> bool {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 || parts.len() > 4 {
        return false;
    }
    parts.iter().all(|p| {
        let starts_upper = p.chars().next().is_some_and(char::is_uppercase);
        starts_upper && !NON_NAME_WORDS.contains(p)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persons(text: &str) -> Vec<String> {
        RegexEntityRecognizer
            .recognize(text)
            .into_iter()
            .filter(|e| e.label == EntityLabel::Person)
            .map(|e| e.text)
            .collect()
    }

    #[test]
    fn test_recognizes_plain_full_name() {
        assert_eq!(persons("Curriculum Vitae of\nJane Doe\nBerlin"), vec!["Jane Doe"]);
    }

    #[test]
    fn test_recognizes_titled_name() {
        assert!(persons("Prepared for Dr. Alan Turing").contains(&"Alan Turing".to_string()));
    }

    #[test]
    fn test_recognizes_middle_initial() {
        assert_eq!(persons("John Q. Public"), vec!["John Q. Public"]);
    }

    #[test]
    fn test_names_do_not_span_lines() {
        assert!(persons("Skills\nPython").is_empty());
    }

    #[test]
    fn test_rejects_job_titles_and_institutions() {
        let found = persons("Senior Software Engineer\nStanford University");
        assert!(found.is_empty(), "unexpected persons: {found:?}");
    }

    #[test]
    fn test_recognizes_organizations() {
        let entities = RegexEntityRecognizer.recognize("Graduated from Stanford University");
        assert!(entities
            .iter()
            .any(|e| e.label == EntityLabel::Organization && e.text == "Stanford University"));
    }

    #[test]
    fn test_entities_in_document_order() {
        let entities = RegexEntityRecognizer.recognize("Jane Doe worked with Mr. Bob Stone");
        let texts: Vec<&str> = entities.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Jane Doe", "Bob Stone"]);
    }

    #[test]
    fn test_backend_id() {
        assert_eq!(RegexEntityRecognizer.backend_id(), "regex");
    }
}
