use serde::{Deserialize, Serialize};

/// Sections that each add to the writing score when mentioned.
const SCORED_SECTIONS: &[(&str, u32)] = &[
    ("Objective", 20),
    ("Declaration", 20),
    ("Hobbies", 20),
    ("Achievements", 20),
    ("Projects", 20),
];

/// Sections reported back to the candidate as present or missing.
const CHECKLIST_SECTIONS: &[&str] = &["Objective", "Education", "Experience", "Achievements", "Project"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionCheck {
    pub section: String,
    pub present: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WritingScoreReport {
    /// 0 – 100
    pub score: u32,
    pub checks: Vec<SectionCheck>,
    pub missing_sections: Vec<String>,
}

/// Scores how complete the résumé's writing is from the section names it mentions.
///
/// Mentions are case-sensitive substring matches over the whole text.
pub fn compute_writing_score(text: &str) -> WritingScoreReport {
    let score = SCORED_SECTIONS
        .iter()
        .filter(|(section, _)| text.contains(section))
        .map(|(_, points)| points)
        .sum::<u32>()
        .min(100);

    let mut checks = Vec::new();
    let mut missing_sections = Vec::new();

    for section in CHECKLIST_SECTIONS {
        let present = text.contains(section);
        let message = if present {
            format!("Great! You have included {section}")
        } else {
            missing_sections.push(section.to_string());
            format!("Consider adding {section} to improve your score")
        };
        checks.push(SectionCheck {
            section: section.to_string(),
            present,
            message,
        });
    }

    WritingScoreReport {
        score,
        checks,
        missing_sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        let report = compute_writing_score("");
        assert_eq!(report.score, 0);
        assert_eq!(report.missing_sections.len(), CHECKLIST_SECTIONS.len());
        assert!(report.checks.iter().all(|c| !c.present));
    }

    #[test]
    fn test_each_scored_section_adds_twenty() {
        let report = compute_writing_score("Objective\nHobbies: chess");
        assert_eq!(report.score, 40);
    }

    #[test]
    fn test_full_score_is_capped_at_100() {
        let text = "Objective Declaration Hobbies Achievements Projects";
        assert_eq!(compute_writing_score(text).score, 100);
    }

    #[test]
    fn test_mentions_are_case_sensitive() {
        assert_eq!(compute_writing_score("objective hobbies").score, 0);
    }

    #[test]
    fn test_checklist_messages() {
        let report = compute_writing_score("Education\nMIT");
        let education = report
            .checks
            .iter()
            .find(|c| c.section == "Education")
            .unwrap();
        assert!(education.present);
        assert_eq!(education.message, "Great! You have included Education");

        let objective = report
            .checks
            .iter()
            .find(|c| c.section == "Objective")
            .unwrap();
        assert!(!objective.present);
        assert!(objective.message.contains("Consider adding Objective"));
        assert!(!report.missing_sections.contains(&"Education".to_string()));
    }

    #[test]
    fn test_projects_heading_satisfies_project_check() {
        let report = compute_writing_score("Projects\nCLI tool");
        assert_eq!(report.score, 20);
        assert!(report.checks.iter().any(|c| c.section == "Project" && c.present));
    }
}
