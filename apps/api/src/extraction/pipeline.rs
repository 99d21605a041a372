//! Résumé parsing pipeline.
//!
//! normalize → contact → name → sections → fields → (optional) job matching.
//! Every stage is total over arbitrary text, so `parse` never fails on content;
//! empty input simply produces an empty profile.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::catalog::SkillVocabulary;
use crate::extraction::contact::extract_contact_info;
use crate::extraction::fields::{
    extract_certifications, extract_education, extract_experience, extract_skills,
};
use crate::extraction::name::extract_name;
use crate::extraction::normalize::normalize_text;
use crate::extraction::sections::segment_sections;
use crate::matching::job_matcher::JobMatcher;
use crate::models::job::{JobPosting, MatchResult};
use crate::models::profile::CandidateProfile;
use crate::nlp::entities::EntityRecognizer;

/// Result of one `parse` call.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedResume {
    pub profile: CandidateProfile,
    /// `None` when matching was not requested.
    pub matches: Option<Vec<MatchResult>>,
    /// The normalized text the profile was built from.
    #[serde(skip)]
    pub text: String,
}

/// The parser and its immutable collaborators, built once at startup.
///
/// Per-call scratch state (section maps, extracted lists) lives on the stack of
/// `parse`, so one parser can serve concurrent requests through an `Arc`.
#[derive(Clone)]
pub struct ResumeParser {
    vocabulary: Arc<SkillVocabulary>,
    postings: Arc<Vec<JobPosting>>,
    recognizer: Arc<dyn EntityRecognizer>,
    matcher: Arc<dyn JobMatcher>,
}

impl ResumeParser {
    pub fn new(
        vocabulary: Arc<SkillVocabulary>,
        postings: Arc<Vec<JobPosting>>,
        recognizer: Arc<dyn EntityRecognizer>,
        matcher: Arc<dyn JobMatcher>,
    ) -> Self {
        Self {
            vocabulary,
            postings,
            recognizer,
            matcher,
        }
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    /// Extracts a candidate profile and, when `match_jobs` is set, the postings
    /// that match the extracted skills.
    pub fn parse(&self, raw_text: &str, match_jobs: bool) -> ParsedResume {
        let text = normalize_text(raw_text);
        let profile = self.extract_profile(&text);

        let matches = match_jobs.then(|| self.matcher.match_jobs(&profile.skills, &self.postings));
        if let Some(matches) = &matches {
            debug!(matched = matches.len(), postings = self.postings.len(), "Job matching complete");
        }

        ParsedResume {
            profile,
            matches,
            text,
        }
    }

    fn extract_profile(&self, text: &str) -> CandidateProfile {
        let contact = extract_contact_info(text);
        let name = extract_name(text, self.recognizer.as_ref());
        let sections = segment_sections(text);

        let profile = CandidateProfile {
            name,
            contact,
            skills: extract_skills(text, &sections, &self.vocabulary),
            experience: extract_experience(text, &sections),
            education: extract_education(text, &sections),
            certifications: extract_certifications(text, &sections),
        };

        debug!(
            recognizer = self.recognizer.backend_id(),
            sections = sections.kinds().count(),
            has_name = profile.name.is_some(),
            emails = profile.contact.emails.len(),
            phones = profile.contact.phones.len(),
            skills = profile.skills.len(),
            experience = profile.experience.len(),
            education = profile.education.len(),
            certifications = profile.certifications.len(),
            "Profile extracted"
        );

        profile
    }
}
