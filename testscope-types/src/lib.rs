//! Shared data model for the testscope workspace.
//!
//! # Design constraints
//! - Every value here is immutable once built; selection is a pure function over them.
//! - Wire shapes (`ChangeSet`, `JobList`, `SelectionReport`) are plain JSON and stay stable.
//! - Prefer adding optional fields over changing semantics.

pub mod change;
pub mod job;
pub mod registry;
pub mod report;

pub use change::ChangeSet;
pub use job::{JobId, JobKind, JobList};
pub use registry::{CrateRegistry, LanguageTrigger, PrefixOverlap, RegistryError, SelectorConfig};
pub use report::{JobMatch, SelectionReport, ToolInfo};

/// Schema identifiers.
pub mod schema {
    pub const TESTSCOPE_SELECTION_V1: &str = "testscope.selection.v1";
}
