//! BDD harness (cucumber-rs) for the `testscope` binary.
//!
//! Scenarios live in `features/`; steps in `tests/cucumber.rs` drive the built binary through
//! `assert_cmd` and read its stdout with the helpers here.

use std::path::{Path, PathBuf};

const SET_OUTPUT_PREFIX: &str = "::set-output name=";

/// Directory holding the `.feature` files.
pub fn features_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("features")
}

/// Output name and job list from the first `::set-output` line in `stdout`.
pub fn parse_set_output(stdout: &str) -> Option<(&str, &str)> {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix(SET_OUTPUT_PREFIX))
        .and_then(|rest| rest.split_once("::"))
}

/// JSON stdin payload for a list of changed paths.
pub fn change_set_json(paths: &[String]) -> String {
    let quoted: Vec<String> = paths
        .iter()
        .map(|p| serde_json::Value::String(p.clone()).to_string())
        .collect();
    format!("[{}]", quoted.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_jobs() {
        let stdout = "stdin: []\nfiles changed: []\n::set-output name=jobs::-parser-,-rust-\n";
        assert_eq!(parse_set_output(stdout), Some(("jobs", "-parser-,-rust-")));
    }

    #[test]
    fn empty_job_list_is_empty_string() {
        assert_eq!(parse_set_output("::set-output name=jobs::\n"), Some(("jobs", "")));
    }

    #[test]
    fn missing_line_is_none() {
        assert_eq!(parse_set_output("stdin: not valid json\n"), None);
    }

    #[test]
    fn change_set_json_quotes_paths() {
        let paths = vec!["a.rs".to_string(), "b \"c\".cairo".to_string()];
        assert_eq!(change_set_json(&paths), r#"["a.rs","b \"c\".cairo"]"#);
    }

    #[test]
    fn every_feature_file_is_present() {
        let dir = features_dir();
        for name in ["select.feature", "output.feature", "registry.feature"] {
            assert!(dir.join(name).is_file(), "missing {}", name);
        }
    }
}
