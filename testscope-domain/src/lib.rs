//! Domain logic: turn a change set into the ordered list of CI jobs to run.
//!
//! This crate owns *which* jobs a revision needs and why. It does not read input or emit output;
//! that's the `testscope` CLI crate.

mod catalog;
mod selector;

pub use catalog::{
    cairo_registry, cairo_selector_config, CAIRO_CRATES, CAIRO_CRATE_ROOT, DSL_JOB, DSL_SUFFIX,
    NATIVE_JOB, NATIVE_SUFFIX,
};
pub use selector::{crate_job, explain, select_jobs, trigger_job, Selector, TEST_MARKER};
