//! Fixed matching catalogs: the skill vocabulary, the default target-job
//! keyword profile, and the priority skills every resume is expected to list.

use serde::{Deserialize, Serialize};

/// Canonical skill terms, in display-tie-break order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "flask",
    "django",
    "sqlalchemy",
    "postgresql",
    "mysql",
    "docker",
    "docker-compose",
    "git",
    "rest",
    "api",
    "aws",
    "gcp",
    "azure",
    "linux",
    "html",
    "css",
    "javascript",
    "react",
    "node",
    "pandas",
    "numpy",
    "celery",
    "redis",
    "mongodb",
    "sql",
    "unit test",
    "pytest",
    "ci/cd",
    "github actions",
];

/// Keywords of the built-in target job.
pub const DEFAULT_JOB_KEYWORDS: &[&str] = &[
    "python",
    "flask",
    "docker",
    "rest api",
    "postgresql",
    "sqlalchemy",
    "aws",
    "git",
];

/// Skills the local suggestion rules ask for by name when absent.
pub const PRIORITY_SKILLS: &[&str] = &["python", "flask", "docker"];

/// Ordered keyword list describing the job a resume is measured against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobKeywordProfile(Vec<String>);

impl JobKeywordProfile {
    /// Builds a profile from caller-supplied keywords, dropping blanks.
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_string())
                .filter(|k| !k.is_empty())
                .collect(),
        )
    }

    pub fn keywords(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for JobKeywordProfile {
    fn default() -> Self {
        Self::from_keywords(DEFAULT_JOB_KEYWORDS)
    }
}
