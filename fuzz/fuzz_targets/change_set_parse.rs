#![no_main]

//! Fuzz target for change set parsing.
//!
//! Arbitrary bytes must either parse as a JSON array of strings or fail cleanly, and anything that
//! parses must survive selection.

use libfuzzer_sys::fuzz_target;
use testscope_types::ChangeSet;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(changes) = serde_json::from_str::<ChangeSet>(s) else {
        return;
    };

    let reencoded = serde_json::to_string(&changes).expect("change set serializes");
    let again: ChangeSet = serde_json::from_str(&reencoded).expect("reparse");
    assert_eq!(again, changes);

    if let Ok(config) = testscope_domain::cairo_selector_config() {
        let jobs = testscope_domain::select_jobs(&changes, &config);
        assert!(jobs.len() <= config.max_jobs());
        assert!(jobs.len() <= changes.len() * 3);
    }
});
