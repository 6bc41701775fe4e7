use testscope_types::{
    ChangeSet, CrateRegistry, JobId, JobKind, JobList, JobMatch, LanguageTrigger, SelectorConfig,
};
use tracing::debug;

/// Any path containing this substring counts as a test change.
///
/// Unanchored and case-sensitive: `contest.cairo` matches, `Test.rs` does not.
pub const TEST_MARKER: &str = "test";

/// Ordered jobs for `changes`: registry order first, then the native and DSL triggers.
///
/// Pure: every call builds a fresh list, and a crate contributes at most one job.
pub fn select_jobs(changes: &ChangeSet, config: &SelectorConfig) -> JobList {
    explain(changes, config)
        .into_iter()
        .map(|m| m.job)
        .collect()
}

/// Same decisions as [`select_jobs`], each paired with the first path that caused it.
pub fn explain(changes: &ChangeSet, config: &SelectorConfig) -> Vec<JobMatch> {
    let paths = changes.paths();
    let registry = &config.registry;

    let crate_matches = registry
        .crates()
        .iter()
        .filter_map(|name| match_crate(paths, registry.root(), name));
    let trigger_matches = config
        .triggers()
        .into_iter()
        .filter_map(|trigger| match_trigger(paths, trigger));

    crate_matches.chain(trigger_matches).collect()
}

/// Job for a single registry entry, if any path lives under `root + name`.
///
/// A path without [`TEST_MARKER`] wins the full job; otherwise the test-only variant is used.
pub fn crate_job(paths: &[String], root: &str, name: &str) -> Option<JobId> {
    match_crate(paths, root, name).map(|m| m.job)
}

/// The trigger's job once, however many paths end with its suffix.
pub fn trigger_job(paths: &[String], trigger: &LanguageTrigger) -> Option<JobId> {
    match_trigger(paths, trigger).map(|m| m.job)
}

fn match_crate(paths: &[String], root: &str, name: &str) -> Option<JobMatch> {
    let prefix = format!("{root}{name}");
    let owned = |p: &&String| p.starts_with(prefix.as_str());

    if let Some(path) = paths
        .iter()
        .filter(owned)
        .find(|p| !p.contains(TEST_MARKER))
    {
        return Some(JobMatch {
            job: JobId::for_crate(name),
            kind: JobKind::Crate,
            crate_name: Some(name.to_string()),
            path: path.clone(),
        });
    }

    paths.iter().find(owned).map(|path| JobMatch {
        job: JobId::test_only(name),
        kind: JobKind::TestOnly,
        crate_name: Some(name.to_string()),
        path: path.clone(),
    })
}

fn match_trigger(paths: &[String], trigger: &LanguageTrigger) -> Option<JobMatch> {
    paths
        .iter()
        .find(|p| trigger.matches(p))
        .map(|path| JobMatch {
            job: trigger.job.clone(),
            kind: JobKind::Trigger,
            crate_name: None,
            path: path.clone(),
        })
}

/// Selector bound to one immutable configuration.
#[derive(Debug, Clone)]
pub struct Selector {
    config: SelectorConfig,
}

impl Selector {
    pub fn new(config: SelectorConfig) -> Self {
        log_overlaps(&config.registry);
        Self { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn select(&self, changes: &ChangeSet) -> JobList {
        let jobs = select_jobs(changes, &self.config);
        debug!(paths = changes.len(), jobs = jobs.len(), "selected jobs");
        jobs
    }

    pub fn explain(&self, changes: &ChangeSet) -> Vec<JobMatch> {
        let matches = explain(changes, &self.config);
        for m in &matches {
            debug!(job = %m.job, kind = m.kind.as_str(), path = %m.path, "job matched");
        }
        matches
    }
}

fn log_overlaps(registry: &CrateRegistry) {
    for overlap in registry.prefix_overlaps() {
        debug!(
            shorter = %overlap.shorter,
            longer = %overlap.longer,
            "registry prefix overlap; the shorter entry also claims the longer entry's paths"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(crates: &[&str]) -> SelectorConfig {
        SelectorConfig {
            registry: CrateRegistry::new("crates/cairo-lang-", crates.iter().copied())
                .expect("registry"),
            native: LanguageTrigger::new(".rs", JobId::new("-rust-")),
            dsl: LanguageTrigger::new(".cairo", JobId::new("-cairo-")),
        }
    }

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn tokens(jobs: &JobList) -> Vec<&str> {
        jobs.iter().map(JobId::as_str).collect()
    }

    #[test]
    fn non_test_path_wins_over_test_path() {
        let p = paths(&[
            "crates/cairo-lang-parser/tests/a.rs",
            "crates/cairo-lang-parser/src/lib.rs",
        ]);
        assert_eq!(
            crate_job(&p, "crates/cairo-lang-", "parser"),
            Some(JobId::new("-parser-"))
        );
    }

    #[test]
    fn only_test_paths_give_test_only_job() {
        let p = paths(&["crates/cairo-lang-parser/src/parser_test.rs"]);
        assert_eq!(
            crate_job(&p, "crates/cairo-lang-", "parser"),
            Some(JobId::new("-parser-test-only-"))
        );
    }

    #[test]
    fn unrelated_paths_give_nothing() {
        let p = paths(&["README.md", "crates/cairo-lang-runner/src/lib.rs"]);
        assert_eq!(crate_job(&p, "crates/cairo-lang-", "parser"), None);
    }

    #[test]
    fn test_marker_is_case_sensitive_and_unanchored() {
        let upper = paths(&["crates/cairo-lang-parser/src/Test.rs"]);
        assert_eq!(
            crate_job(&upper, "crates/cairo-lang-", "parser"),
            Some(JobId::new("-parser-"))
        );

        let inside_word = paths(&["crates/cairo-lang-parser/src/contest.cairo"]);
        assert_eq!(
            crate_job(&inside_word, "crates/cairo-lang-", "parser"),
            Some(JobId::new("-parser-test-only-"))
        );
    }

    #[test]
    fn crate_named_with_test_is_always_test_only() {
        let p = paths(&["crates/cairo-lang-test-utils/src/lib.rs"]);
        assert_eq!(
            crate_job(&p, "crates/cairo-lang-", "test-utils"),
            Some(JobId::new("-test-utils-test-only-"))
        );
    }

    #[test]
    fn prefix_match_is_not_segment_aware() {
        let p = paths(&["crates/cairo-lang-sierra-gas/src/lib.rs"]);
        let jobs = select_jobs(
            &ChangeSet::new(p),
            &config(&["sierra", "sierra-gas"]),
        );
        assert_eq!(tokens(&jobs), vec!["-sierra-", "-sierra-gas-", "-rust-"]);
    }

    #[test]
    fn triggers_fire_once_each() {
        let p = paths(&["a.rs", "b.rs", "c.cairo", "d.cairo"]);
        let native = LanguageTrigger::new(".rs", JobId::new("-rust-"));
        assert_eq!(trigger_job(&p, &native), Some(JobId::new("-rust-")));

        let jobs = select_jobs(&ChangeSet::new(p), &config(&[]));
        assert_eq!(tokens(&jobs), vec!["-rust-", "-cairo-"]);
    }

    #[test]
    fn empty_change_set_selects_nothing() {
        let jobs = select_jobs(&ChangeSet::default(), &config(&["parser", "runner"]));
        assert!(jobs.is_empty());
    }

    #[test]
    fn explain_records_first_triggering_path() {
        let changes = ChangeSet::new(paths(&[
            "crates/cairo-lang-parser/tests/x.rs",
            "crates/cairo-lang-parser/src/a.rs",
            "crates/cairo-lang-parser/src/b.rs",
        ]));
        let matches = explain(&changes, &config(&["parser"]));
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].kind, JobKind::Crate);
        assert_eq!(matches[0].path, "crates/cairo-lang-parser/src/a.rs");
        assert_eq!(matches[0].crate_name.as_deref(), Some("parser"));
        assert_eq!(matches[1].kind, JobKind::Trigger);
        assert_eq!(matches[1].path, "crates/cairo-lang-parser/tests/x.rs");
        assert_eq!(matches[1].crate_name, None);
    }

    #[test]
    fn selector_matches_free_function() {
        let cfg = config(&["parser", "runner"]);
        let selector = Selector::new(cfg.clone());
        let changes = ChangeSet::new(paths(&["crates/cairo-lang-runner/src/main.cairo"]));
        assert_eq!(selector.select(&changes), select_jobs(&changes, &cfg));
        assert_eq!(selector.explain(&changes).len(), 2);
        assert_eq!(selector.config(), &cfg);
    }
}
