//! Library half of the `testscope` binary.
//!
//! Input acquisition, config loading and output rendering live here so integration tests and the
//! BDD suite can drive them without spawning a process.

pub mod config;
pub mod input;
pub mod output;
pub mod registry_check;
