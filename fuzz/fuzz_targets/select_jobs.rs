#![no_main]

//! Fuzz target for job selection invariants over structured path lists.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use testscope_types::{ChangeSet, JobKind};

#[derive(Debug, Arbitrary)]
struct Input {
    /// Index into the registry plus a free-form tail, so paths often land under a crate.
    paths: Vec<(u8, bool, String)>,
}

fuzz_target!(|input: Input| {
    let Ok(config) = testscope_domain::cairo_selector_config() else {
        return;
    };
    let crates = config.registry.crates();

    let changes: ChangeSet = input
        .paths
        .iter()
        .map(|(idx, under_crate, tail)| {
            if *under_crate && !crates.is_empty() {
                let name = &crates[*idx as usize % crates.len()];
                format!("{}{}", config.registry.prefix(name), tail)
            } else {
                tail.clone()
            }
        })
        .collect();

    let matches = testscope_domain::explain(&changes, &config);
    let jobs = testscope_domain::select_jobs(&changes, &config);

    assert!(jobs.len() <= config.max_jobs());
    assert_eq!(jobs.len(), matches.len());
    assert_eq!(jobs, testscope_domain::select_jobs(&changes, &config));

    for name in crates {
        let full = jobs.contains(&format!("-{}-", name));
        let light = jobs.contains(&format!("-{}-test-only-", name));
        assert!(!(full && light), "both jobs for {}", name);
    }

    let trigger_count = matches.iter().filter(|m| m.kind == JobKind::Trigger).count();
    assert!(matches[matches.len() - trigger_count..]
        .iter()
        .all(|m| m.kind == JobKind::Trigger));
});
