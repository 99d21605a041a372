//! Static catalog data: the skill vocabulary and the job list.
//!
//! Both are built once at startup and shared read-only behind `Arc`.
//! Tests construct their own fixtures instead of using the defaults.

use std::collections::HashSet;

use crate::models::job::JobPosting;

/// Closed set of recognized skills. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct SkillVocabulary {
    skills: HashSet<String>,
}

impl SkillVocabulary {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.skills.contains(token)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }
}

const DEFAULT_SKILLS: &[&str] = &[
    // Languages
    "Python", "Java", "JavaScript", "TypeScript", "Rust", "Kotlin", "Swift", "Scala", "Ruby",
    "PHP", "Perl", "MATLAB", "Haskell", "Elixir", "C++", "SQL", "HTML", "CSS", "Bash",
    // Frameworks and libraries
    "React", "Angular", "Vue", "Django", "Flask", "FastAPI", "Spring", "Express", "Node.js",
    "jQuery", "Bootstrap", "Tailwind", "TensorFlow", "PyTorch", "Keras", "Pandas", "NumPy",
    "scikit-learn", "Spark", "Hadoop", "Tableau",
    // Data stores
    "MySQL", "PostgreSQL", "MongoDB", "Redis", "SQLite", "Oracle", "Cassandra",
    "Elasticsearch", "DynamoDB",
    // Infrastructure and tooling
    "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Terraform", "Ansible", "Jenkins", "Git",
    "GitHub", "GitLab", "Linux", "Kafka", "GraphQL", "REST", "Figma", "Jira",
    // Practices
    "Agile", "Scrum", "DevOps", "Microservices",
];

impl SkillVocabulary {
    /// The built-in vocabulary loaded by the service at startup.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}

/// The built-in job list loaded by the service at startup.
pub fn builtin_job_postings() -> Vec<JobPosting> {
    [
        (
            "Backend Engineer",
            "Build REST and GraphQL services in Python and Django backed by PostgreSQL and Redis, deployed with Docker on AWS.",
            "https://jobs.example.com/backend-engineer",
        ),
        (
            "Frontend Developer",
            "Create responsive interfaces with React, TypeScript, HTML and CSS. Collaborate with designers using Figma.",
            "https://jobs.example.com/frontend-developer",
        ),
        (
            "Data Scientist",
            "Analyze data with Python, Pandas, NumPy and scikit-learn. Train models in TensorFlow or PyTorch and present findings in Tableau.",
            "https://jobs.example.com/data-scientist",
        ),
        (
            "DevOps Engineer",
            "Automate infrastructure with Terraform, Ansible and Jenkins. Operate Kubernetes and Docker workloads on AWS, Azure or GCP.",
            "https://jobs.example.com/devops-engineer",
        ),
        (
            "Java Developer",
            "Develop microservices in Java with Spring, Kafka and MySQL in an Agile Scrum team.",
            "https://jobs.example.com/java-developer",
        ),
        (
            "Data Engineer",
            "Design pipelines with Spark, Hadoop, Kafka and SQL. Model warehouses in PostgreSQL and Cassandra.",
            "https://jobs.example.com/data-engineer",
        ),
    ]
    .into_iter()
    .map(|(title, description, link)| JobPosting {
        title: title.to_string(),
        description: description.to_string(),
        link: link.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_case_sensitive() {
        let vocab = SkillVocabulary::new(["Python"]);
        assert!(vocab.contains("Python"));
        assert!(!vocab.contains("python"));
        assert!(!vocab.contains("Pyth"));
    }

    #[test]
    fn test_builtin_vocabulary_has_multi_symbol_skills() {
        let vocab = SkillVocabulary::builtin();
        assert!(vocab.contains("C++"));
        assert!(vocab.contains("Node.js"));
        assert_eq!(vocab.len(), DEFAULT_SKILLS.len());
    }

    #[test]
    fn test_builtin_entries_are_extractable() {
        let short: Vec<&str> = DEFAULT_SKILLS
            .iter()
            .copied()
            .filter(|s| s.chars().count() <= 2)
            .collect();
        assert!(short.is_empty(), "entries too short to extract: {short:?}");
    }

    #[test]
    fn test_builtin_jobs_are_complete() {
        let jobs = builtin_job_postings();
        assert!(!jobs.is_empty());
        assert!(jobs
            .iter()
            .all(|j| !j.title.is_empty() && !j.description.is_empty() && j.link.starts_with("https://")));
    }
}
