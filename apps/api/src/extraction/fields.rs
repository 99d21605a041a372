//! Per-section field extraction with full-text fallbacks.
//!
//! Each extractor prefers the lines of its own section and only looks at the
//! whole document when that section is missing or empty.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::SkillVocabulary;
use crate::extraction::sections::{SectionKind, Sections};
use crate::nlp;

/// Skill tokens must be longer than this many characters.
const MIN_SKILL_CHARS: usize = 2;

static EXPERIENCE_CUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)intern|experience|worked|employed").expect("experience cues should compile")
});

static EDUCATION_CUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)university|college|degree|bachelor|master|grade|institute")
        .expect("education cues should compile")
});

static CERTIFICATION_CUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)certification|issued").expect("certification cues should compile")
});

/// Skills named in the vocabulary, deduplicated in first-occurrence order.
///
/// The pool is the `skills` section, or the whole text when that section is
/// empty. If the pool yields nothing, the whole text is scanned once more.
pub fn extract_skills(text: &str, sections: &Sections, vocabulary: &SkillVocabulary) -> Vec<String> {
    let section_lines = sections.lines(SectionKind::Skills);
    let pool = if section_lines.is_empty() {
        text.to_string()
    } else {
        section_lines.join("\n")
    };

    let skills = match_vocabulary(&pool, vocabulary);
    if !skills.is_empty() {
        return skills;
    }

    match_vocabulary(text, vocabulary)
}

fn match_vocabulary(pool: &str, vocabulary: &SkillVocabulary) -> Vec<String> {
    let mut seen = HashSet::new();
    nlp::words(pool)
        .into_iter()
        .filter(|token| token.chars().count() > MIN_SKILL_CHARS && vocabulary.contains(token))
        .filter(|token| seen.insert(*token))
        .map(str::to_string)
        .collect()
}

/// The `experience` section, else sentences mentioning work history.
pub fn extract_experience(text: &str, sections: &Sections) -> Vec<String> {
    section_or_sentences(text, sections, SectionKind::Experience, &EXPERIENCE_CUES)
}

/// The `education` section, else sentences mentioning schooling.
pub fn extract_education(text: &str, sections: &Sections) -> Vec<String> {
    section_or_sentences(text, sections, SectionKind::Education, &EDUCATION_CUES)
}

/// The `certifications` section, else sentences mentioning certifications.
///
/// The fallback never fires on a document with no certification cue at all.
pub fn extract_certifications(text: &str, sections: &Sections) -> Vec<String> {
    let lines = sections.lines(SectionKind::Certifications);
    if !lines.is_empty() {
        return lines.to_vec();
    }

    let sentences = nlp::sentences(text);
    if !sentences.iter().any(|s| CERTIFICATION_CUES.is_match(s)) {
        return Vec::new();
    }

    sentences
        .into_iter()
        .filter(|s| CERTIFICATION_CUES.is_match(s))
        .collect()
}

fn section_or_sentences(
    text: &str,
    sections: &Sections,
    kind: SectionKind,
    cues: &Regex,
) -> Vec<String> {
    let lines = sections.lines(kind);
    if !lines.is_empty() {
        return lines.to_vec();
    }

    nlp::sentences(text)
        .into_iter()
        .filter(|s| cues.is_match(s))
        .collect()
}
