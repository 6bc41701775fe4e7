use serde::{Deserialize, Serialize};
use std::fmt;

/// Token naming one CI job.
///
/// Crate jobs are `-<name>-`, test-only crate jobs are `-<name>-test-only-`, language triggers use
/// fixed tokens such as `-rust-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Full job for a crate with at least one non-test change.
    pub fn for_crate(name: &str) -> Self {
        Self(format!("-{name}-"))
    }

    /// Lighter job for a crate whose changes all mention `test`.
    pub fn test_only(name: &str) -> Self {
        Self(format!("-{name}-test-only-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why a job was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    Crate,
    TestOnly,
    Trigger,
}

impl JobKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JobKind::Crate => "crate",
            JobKind::TestOnly => "test_only",
            JobKind::Trigger => "trigger",
        }
    }
}

/// Ordered job selection for one invocation: registry order, then the language triggers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobList(Vec<JobId>);

impl JobList {
    pub fn iter(&self) -> std::slice::Iter<'_, JobId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|job| job.as_str() == token)
    }

    pub fn position(&self, token: &str) -> Option<usize> {
        self.0.iter().position(|job| job.as_str() == token)
    }

    /// Tokens joined with `,` and no spaces; empty list gives an empty string.
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(JobId::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<JobId> for JobList {
    fn from_iter<I: IntoIterator<Item = JobId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for JobList {
    type Item = JobId;
    type IntoIter = std::vec::IntoIter<JobId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JobList {
    type Item = &'a JobId;
    type IntoIter = std::slice::Iter<'a, JobId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
