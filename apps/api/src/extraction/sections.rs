use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Skills,
    Experience,
    Education,
    Certifications,
    Projects,
}

/// A heading rule: a line-start pattern and the canonical section it opens.
struct HeadingRule {
    pattern: Regex,
    kind: SectionKind,
}

/// Heading rules in priority order. Patterns are case-insensitive and anchored
/// at the start of the line; synonyms map onto the same canonical section.
static HEADING_RULES: LazyLock<Vec<HeadingRule>> = LazyLock::new(|| {
    [
        (r"(?i)^professional experience\b", SectionKind::Experience),
        (r"(?i)^skills\b", SectionKind::Skills),
        (r"(?i)^experience\b", SectionKind::Experience),
        (r"(?i)^education\b", SectionKind::Education),
        (r"(?i)^certifications\b", SectionKind::Certifications),
        (r"(?i)^projects\b", SectionKind::Projects),
    ]
    .into_iter()
    .map(|(pattern, kind)| HeadingRule {
        pattern: Regex::new(pattern).expect("heading pattern should compile"),
        kind,
    })
    .collect()
});

/// Returns the section a line opens, if it is a heading.
pub fn detect_heading(line: &str) -> Option<SectionKind> {
    let line = line.trim_start();
    HEADING_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(line))
        .map(|rule| rule.kind)
}

/// Résumé lines grouped under the most recent heading before them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    map: BTreeMap<SectionKind, Vec<String>>,
}

impl Sections {
    /// Lines of a section; empty when the section is absent.
    pub fn lines(&self, kind: SectionKind) -> &[String] {
        self.map.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn kinds(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.map.keys().copied()
    }
}

/// Splits text into sections.
///
/// A heading line opens a section and every following non-blank line belongs
/// to it until the next heading. Lines before the first heading are dropped,
/// and a repeated heading appends to the section already opened.
pub fn segment_sections(text: &str) -> Sections {
    let mut sections = Sections::default();
    let mut current: Option<SectionKind> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(kind) = detect_heading(line) {
            sections.map.entry(kind).or_default();
            current = Some(kind);
            continue;
        }

        if let Some(kind) = current {
            sections.map.entry(kind).or_default().push(line.to_string());
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_segmentation() {
        let sections = segment_sections("Skills:\nPython\nEducation:\nMIT");
        assert_eq!(sections.lines(SectionKind::Skills), ["Python"]);
        assert_eq!(sections.lines(SectionKind::Education), ["MIT"]);
        assert_eq!(sections.kinds().count(), 2);
    }

    #[test]
    fn test_lines_before_first_heading_dropped() {
        let sections = segment_sections("Jane Doe\njane@x.io\nSkills\nRust");
        assert_eq!(sections.lines(SectionKind::Skills), ["Rust"]);
        assert!(sections
            .kinds()
            .all(|k| sections.lines(k).iter().all(|l| l != "Jane Doe")));
    }

    #[test]
    fn test_headings_case_insensitive() {
        let sections = segment_sections("EDUCATION\nMIT\nskills:\nGo");
        assert_eq!(sections.lines(SectionKind::Education), ["MIT"]);
        assert_eq!(sections.lines(SectionKind::Skills), ["Go"]);
    }

    #[test]
    fn test_professional_experience_alias() {
        let sections = segment_sections("Professional Experience:\nAcme Corp, 2020");
        assert_eq!(sections.lines(SectionKind::Experience), ["Acme Corp, 2020"]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let sections = segment_sections("Experience\n\n  \nAcme\n\nGlobex");
        assert_eq!(sections.lines(SectionKind::Experience), ["Acme", "Globex"]);
    }

    #[test]
    fn test_heading_requires_word_boundary() {
        assert_eq!(detect_heading("Skillset"), None);
        assert_eq!(detect_heading("Skills & Tools"), Some(SectionKind::Skills));
        assert_eq!(detect_heading("I have Skills"), None);
    }

    #[test]
    fn test_empty_section_is_present_but_empty() {
        let sections = segment_sections("Certifications\nEducation\nMIT");
        assert!(sections.kinds().any(|k| k == SectionKind::Certifications));
        assert!(sections.lines(SectionKind::Certifications).is_empty());
    }

    #[test]
    fn test_repeated_heading_appends() {
        let sections = segment_sections("Skills\nRust\nProjects\nCLI\nSkills\nSQL");
        assert_eq!(sections.lines(SectionKind::Skills), ["Rust", "SQL"]);
        assert_eq!(sections.lines(SectionKind::Projects), ["CLI"]);
    }

    #[test]
    fn test_no_headings_yields_empty_map() {
        assert_eq!(segment_sections("just some text\nmore text"), Sections::default());
        assert_eq!(segment_sections(""), Sections::default());
    }
}
