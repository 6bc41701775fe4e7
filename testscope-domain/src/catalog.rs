//! Compiled-in registry for the Cairo workspace.
//!
//! The list is hand-maintained; `testscope check-registry` reports drift against `crates/`.

use testscope_types::{CrateRegistry, JobId, LanguageTrigger, RegistryError, SelectorConfig};

/// Source-tree prefix shared by every Cairo crate directory.
pub const CAIRO_CRATE_ROOT: &str = "crates/cairo-lang-";

/// Registered crates, in job emission order.
pub static CAIRO_CRATES: &[&str] = &[
    "casm",
    "compiler",
    "debug",
    "defs",
    "diagnostics",
    "eq-solver",
    "filesystem",
    "formatter",
    "language-server",
    "lowering",
    "parser",
    "plugins",
    "proc_macros",
    "project",
    "runner",
    "semantic",
    "sierra",
    "sierra-ap-change",
    "sierra-gas",
    "sierra-generator",
    "sierra-to-casm",
    "starknet",
    "syntax",
    "syntax-codegen",
    "test-runner",
    "test-utils",
    "utils",
];

pub const NATIVE_SUFFIX: &str = ".rs";
pub const NATIVE_JOB: &str = "-rust-";
pub const DSL_SUFFIX: &str = ".cairo";
pub const DSL_JOB: &str = "-cairo-";

pub fn cairo_registry() -> Result<CrateRegistry, RegistryError> {
    CrateRegistry::new(CAIRO_CRATE_ROOT, CAIRO_CRATES.iter().copied())
}

pub fn cairo_selector_config() -> Result<SelectorConfig, RegistryError> {
    Ok(SelectorConfig {
        registry: cairo_registry()?,
        native: LanguageTrigger::new(NATIVE_SUFFIX, JobId::new(NATIVE_JOB)),
        dsl: LanguageTrigger::new(DSL_SUFFIX, JobId::new(DSL_JOB)),
    })
}
