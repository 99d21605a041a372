//! Candidate name detection.
//!
//! Strategies run in a fixed priority order and the first hit wins: cheap
//! structural signals first, entity recognition late.

use regex::Regex;
use tracing::debug;

use crate::extraction::contact::extract_emails;
use crate::extraction::normalize::non_blank_lines;
use crate::nlp::entities::{EntityLabel, EntityRecognizer};

/// Case-insensitive substrings that mark a line as a document header.
const HEADER_WORDS: &[&str] = &[
    "resume",
    "cv",
    "curriculum",
    "vitae",
    "profile",
    "application",
];

/// Email local-part fragments that never carry a name.
const GENERIC_MAILBOX_WORDS: &[&str] = &["mail", "email", "contact", "work", "job", "careers", "admin"];

/// Recognized entities that are really section headings.
const HEADING_ENTITIES: &[&str] = &[
    "skills",
    "experience",
    "education",
    "algorithms",
    "certifications",
    "projects",
    "work experience",
    "professional experience",
];

const MAX_NAME_TOKENS: usize = 4;
const EMAIL_SEARCH_LINES: usize = 5;
const ENTITY_SEARCH_LINES: usize = 10;
const CAPITALIZED_SEARCH_LINES: usize = 3;
const MIN_MAILBOX_RUN: usize = 3;

/// Inputs shared by every strategy.
pub struct NameContext<'a> {
    pub lines: Vec<&'a str>,
    pub recognizer: &'a dyn EntityRecognizer,
}

impl<'a> NameContext<'a> {
    pub fn new(text: &'a str, recognizer: &'a dyn EntityRecognizer) -> Self {
        Self {
            lines: non_blank_lines(text).collect(),
            recognizer,
        }
    }

    fn head(&self, n: usize) -> &[&'a str] {
        &self.lines[..self.lines.len().min(n)]
    }
}

/// A single name-detection strategy.
pub struct NameStrategy {
    pub id: &'static str,
    pub run: fn(&NameContext<'_>) -> Option<String>,
}

/// Strategies in priority order.
pub const NAME_STRATEGIES: &[NameStrategy] = &[
    NameStrategy {
        id: "first_line",
        run: first_line,
    },
    NameStrategy {
        id: "email_local_part",
        run: email_local_part,
    },
    NameStrategy {
        id: "person_entity",
        run: person_entity,
    },
    NameStrategy {
        id: "capitalized_line",
        run: capitalized_line,
    },
];

/// Returns the candidate's name, or `None` when no strategy succeeds.
pub fn extract_name(text: &str, recognizer: &dyn EntityRecognizer) -> Option<String> {
    let ctx = NameContext::new(text, recognizer);

    NAME_STRATEGIES.iter().find_map(|strategy| {
        let name = (strategy.run)(&ctx)?;
        debug!(strategy = strategy.id, "Candidate name detected");
        Some(name)
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Strategies
// ────────────────────────────────────────────────────────────────────────────

/// The first non-blank line, when it is short and not a document header.
fn first_line(ctx: &NameContext<'_>) -> Option<String> {
    let line = ctx.lines.first()?;
    (token_count(line) <= MAX_NAME_TOKENS && !is_header_line(line)).then(|| line.to_string())
}

/// Finds a header line containing a word from the first email's local part.
fn email_local_part(ctx: &NameContext<'_>) -> Option<String> {
    let email = extract_emails(&ctx.lines.join("\n")).into_iter().next()?;
    let local_part = email.split('@').next()?;
    let head = ctx.head(EMAIL_SEARCH_LINES);

    for run in alphabetic_runs(local_part) {
        if GENERIC_MAILBOX_WORDS.contains(&run.to_lowercase().as_str()) {
            continue;
        }

        let Ok(word) = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(run))) else {
            continue;
        };

        // Lines holding an address would only echo the email back.
        let found = head
            .iter()
            .find(|line| !line.contains('@') && word.is_match(line));
        if let Some(line) = found {
            if token_count(line) <= MAX_NAME_TOKENS {
                return Some(line.to_string());
            }
        }
    }

    None
}

/// The first person entity in the document head that is not a section heading.
fn person_entity(ctx: &NameContext<'_>) -> Option<String> {
    let head = ctx.head(ENTITY_SEARCH_LINES).join("\n");

    ctx.recognizer
        .recognize(&head)
        .into_iter()
        .filter(|e| e.label == EntityLabel::Person)
        .map(|e| e.text.trim().to_string())
        .find(|text| !text.is_empty() && !HEADING_ENTITIES.contains(&text.to_lowercase().as_str()))
}

/// A short line of capitalized words near the top of the document.
fn capitalized_line(ctx: &NameContext<'_>) -> Option<String> {
    ctx.head(CAPITALIZED_SEARCH_LINES)
        .iter()
        .find(|line| {
            let count = token_count(line);
            count > 0
                && count <= MAX_NAME_TOKENS
                && line
                    .split_whitespace()
                    .all(|t| t.chars().next().is_some_and(char::is_uppercase))
                && !is_header_line(line)
        })
        .map(|line| line.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn token_count(line: &str) -> usize {
    line.split_whitespace().count()
}

fn is_header_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_WORDS.iter().any(|w| lower.contains(w))
}

fn alphabetic_runs(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|run| run.len() >= MIN_MAILBOX_RUN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::entities::{Entity, RegexEntityRecognizer};

    /// Recognizer returning a fixed list, for exercising the entity strategy alone.
    struct FixedRecognizer(Vec<Entity>);

    impl EntityRecognizer for FixedRecognizer {
        fn backend_id(&self) -> &str {
            "fixed"
        }

        fn recognize(&self, _text: &str) -> Vec<Entity> {
            self.0.clone()
        }
    }

    fn person(text: &str) -> Entity {
        Entity {
            text: text.to_string(),
            label: EntityLabel::Person,
        }
    }

    fn name_of(text: &str) -> Option<String> {
        extract_name(text, &RegexEntityRecognizer)
    }

    #[test]
    fn test_first_line_name() {
        assert_eq!(
            name_of("Jane Doe\nSoftware Engineer\njane@x.io").as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_header_first_line_falls_through() {
        let name = name_of("RESUME\nJane Doe\njane.doe@example.com\nSkills\nPython");
        assert_ne!(name.as_deref(), Some("RESUME"));
        assert_eq!(name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_first_line_too_long_is_skipped() {
        let ctx = NameContext::new(
            "Experienced engineer with ten years in backend systems\nJane Doe",
            &RegexEntityRecognizer,
        );
        assert_eq!(first_line(&ctx), None);
    }

    #[test]
    fn test_email_strategy_finds_name_line() {
        let ctx = NameContext::new(
            "Curriculum Vitae\nContact: john.doe.work@mail.com\nJohn Doe\nBackend developer",
            &RegexEntityRecognizer,
        );
        assert_eq!(email_local_part(&ctx).as_deref(), Some("John Doe"));
    }

    #[test]
    fn test_email_strategy_skips_generic_mailboxes() {
        let ctx = NameContext::new(
            "Resume\ncareers@acme.com\nWork history below",
            &RegexEntityRecognizer,
        );
        assert_eq!(email_local_part(&ctx), None);
    }

    #[test]
    fn test_email_strategy_requires_short_line() {
        let ctx = NameContext::new(
            "Resume\nsmith@x.io\nAgent Smith has many years of experience",
            &RegexEntityRecognizer,
        );
        assert_eq!(email_local_part(&ctx), None);
    }

    #[test]
    fn test_entity_strategy_skips_heading_words() {
        let recognizer = FixedRecognizer(vec![person("Work Experience"), person("Ada Lovelace")]);
        let ctx = NameContext::new("anything", &recognizer);
        assert_eq!(person_entity(&ctx).as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_entity_strategy_ignores_organizations() {
        let recognizer = FixedRecognizer(vec![Entity {
            text: "Acme Inc".to_string(),
            label: EntityLabel::Organization,
        }]);
        let ctx = NameContext::new("anything", &recognizer);
        assert_eq!(person_entity(&ctx), None);
    }

    #[test]
    fn test_entity_strategy_with_regex_backend() {
        let text = "Curriculum Vitae\nObjective: to build reliable systems as Ada Lovelace would";
        assert_eq!(name_of(text).as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_capitalized_line_strategy() {
        let recognizer = FixedRecognizer(vec![]);
        let ctx = NameContext::new(
            "Resume of the candidate listed below\nMARIA GARCIA\nmaria at home",
            &recognizer,
        );
        assert_eq!(capitalized_line(&ctx).as_deref(), Some("MARIA GARCIA"));
    }

    #[test]
    fn test_strategies_fall_through_to_capitalized_line() {
        let recognizer = FixedRecognizer(vec![]);
        let text = "Personal Profile and Curriculum Vitae\nMARIA GARCIA\nlives in madrid";
        assert_eq!(extract_name(text, &recognizer).as_deref(), Some("MARIA GARCIA"));
    }

    #[test]
    fn test_no_name_found() {
        let recognizer = FixedRecognizer(vec![]);
        let text = "resume\ncurriculum vitae of a person\nsee attached profile";
        assert_eq!(extract_name(text, &recognizer), None);
    }

    #[test]
    fn test_empty_text_has_no_name() {
        assert_eq!(name_of(""), None);
        assert_eq!(name_of("\n\n  \n"), None);
    }

    #[test]
    fn test_strategy_order_is_fixed() {
        let ids: Vec<&str> = NAME_STRATEGIES.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec!["first_line", "email_local_part", "person_entity", "capitalized_line"]
        );
    }
}
