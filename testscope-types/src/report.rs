use crate::job::{JobId, JobKind, JobList};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// One selected job and the first changed path that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job: JobId,
    pub kind: JobKind,

    /// Registry entry for crate jobs; absent for language triggers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crate_name: Option<String>,

    pub path: String,
}

/// Machine-readable result of one selection (`testscope select --format json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionReport {
    pub schema: String,
    pub tool: ToolInfo,
    pub jobs: JobList,

    #[serde(default)]
    pub matches: Vec<JobMatch>,
}

impl SelectionReport {
    /// The job list is derived from `matches`, so both always agree on order.
    pub fn new(tool: ToolInfo, matches: Vec<JobMatch>) -> Self {
        Self {
            schema: crate::schema::TESTSCOPE_SELECTION_V1.to_string(),
            tool,
            jobs: matches.iter().map(|m| m.job.clone()).collect(),
            matches,
        }
    }
}
