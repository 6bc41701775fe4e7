//! Rendering of selection results: CI output lines, diagnostics, markdown and registry tables.

use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use std::io::Write;
use testscope_types::{ChangeSet, JobId, JobKind, JobList, SelectionReport, SelectorConfig};

/// `::set-output name=<name>::<jobs>`, the machine-readable contract line.
pub fn set_output_line(name: &str, jobs: &JobList) -> String {
    format!("::set-output name={}::{}", name, jobs.joined())
}

/// `<name>=<jobs>` entry for the GitHub output file.
pub fn github_output_entry(name: &str, jobs: &JobList) -> String {
    format!("{}={}\n", name, jobs.joined())
}

/// Append the job list to a GitHub output file, creating it if needed.
pub fn append_github_output(path: &Utf8Path, name: &str, jobs: &JobList) -> anyhow::Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_std_path())
        .with_context(|| format!("open {}", path))?;
    file.write_all(github_output_entry(name, jobs).as_bytes())
        .with_context(|| format!("write {}", path))?;
    Ok(())
}

pub fn echo_input(raw: &str) -> String {
    format!("stdin: {}", raw)
}

pub fn echo_changes(changes: &ChangeSet) -> anyhow::Result<String> {
    let json = serde_json::to_string(changes).context("serialize changed files")?;
    Ok(format!("files changed: {}", json))
}

pub fn echo_jobs(jobs: &JobList) -> anyhow::Result<String> {
    let json = serde_json::to_string(jobs).context("serialize jobs")?;
    Ok(format!("jobs to run: {}", json))
}

/// Markdown summary suitable for a CI step summary.
pub fn render_summary_md(report: &SelectionReport) -> String {
    let mut out = String::new();
    out.push_str("# testscope selection\n\n");
    out.push_str(&format!("- Jobs: {}\n\n", report.jobs.len()));

    if report.matches.is_empty() {
        out.push_str("_No jobs selected._\n");
        return out;
    }

    out.push_str("| Job | Kind | Triggered by |\n");
    out.push_str("|---|---|---|\n");
    for m in &report.matches {
        out.push_str(&format!(
            "| `{}` | {} | `{}` |\n",
            m.job,
            kind_label(m.kind),
            m.path
        ));
    }
    out
}

fn kind_label(kind: JobKind) -> &'static str {
    match kind {
        JobKind::Crate => "crate",
        JobKind::TestOnly => "test only",
        JobKind::Trigger => "language",
    }
}

/// Text table of the registry and triggers for `testscope list-crates`.
pub fn render_registry_text(config: &SelectorConfig) -> String {
    let registry = &config.registry;
    let mut out = String::new();
    out.push_str(&format!(
        "Registered crates (root: {}):\n\n",
        registry.root()
    ));
    out.push_str(&format!("  {:<20} {:<24} TEST-ONLY JOB\n", "CRATE", "JOB"));
    out.push_str(&format!("  {:<20} {:<24} -------------\n", "-----", "---"));
    for name in registry.crates() {
        out.push_str(&format!(
            "  {:<20} {:<24} {}\n",
            name,
            JobId::for_crate(name).as_str(),
            JobId::test_only(name).as_str()
        ));
    }
    out.push_str("\nTriggers:\n\n");
    for trigger in config.triggers() {
        out.push_str(&format!("  {:<20} {}\n", trigger.suffix, trigger.job));
    }
    out
}

/// JSON form of the registry and triggers for `testscope list-crates --format json`.
pub fn registry_json(config: &SelectorConfig) -> serde_json::Value {
    let registry = &config.registry;
    let crates: Vec<_> = registry
        .crates()
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "prefix": registry.prefix(name),
                "job": JobId::for_crate(name),
                "test_only_job": JobId::test_only(name),
            })
        })
        .collect();
    let triggers: Vec<_> = config
        .triggers()
        .into_iter()
        .map(|t| serde_json::json!({ "suffix": t.suffix, "job": t.job }))
        .collect();
    serde_json::json!({
        "root": registry.root(),
        "crates": crates,
        "triggers": triggers,
    })
}
