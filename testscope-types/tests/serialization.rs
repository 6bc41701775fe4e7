use pretty_assertions::assert_eq;
use testscope_types::{
    ChangeSet, CrateRegistry, JobId, JobKind, JobList, JobMatch, SelectionReport, ToolInfo,
};

fn tool() -> ToolInfo {
    ToolInfo {
        name: "testscope".to_string(),
        version: Some("0.1.0".to_string()),
    }
}

#[test]
fn change_set_reads_bare_string_array() {
    let set: ChangeSet =
        serde_json::from_str(r#"["crates/cairo-lang-parser/src/lib.rs", "README.md"]"#)
            .expect("parse");
    assert_eq!(
        set.paths(),
        ["crates/cairo-lang-parser/src/lib.rs", "README.md"]
    );
}

#[test]
fn change_set_rejects_non_string_elements() {
    assert!(serde_json::from_str::<ChangeSet>(r#"["a", 1]"#).is_err());
    assert!(serde_json::from_str::<ChangeSet>(r#"[null]"#).is_err());
}

#[test]
fn change_set_rejects_non_array_shapes() {
    assert!(serde_json::from_str::<ChangeSet>(r#"{"paths": ["a"]}"#).is_err());
    assert!(serde_json::from_str::<ChangeSet>(r#""a""#).is_err());
    assert!(serde_json::from_str::<ChangeSet>("not valid json").is_err());
}

#[test]
fn job_list_serializes_as_string_array() {
    let jobs: JobList = ["-parser-", "-rust-"].into_iter().map(JobId::new).collect();
    let value = serde_json::to_value(&jobs).expect("serialize");
    assert_eq!(value, serde_json::json!(["-parser-", "-rust-"]));
}

#[test]
fn job_kind_serializes_snake_case() {
    let kinds = [JobKind::Crate, JobKind::TestOnly, JobKind::Trigger];
    let values: Vec<_> = kinds
        .iter()
        .map(|k| serde_json::to_value(k).expect("serialize"))
        .collect();
    assert_eq!(
        values,
        vec![
            serde_json::json!("crate"),
            serde_json::json!("test_only"),
            serde_json::json!("trigger"),
        ]
    );
    for kind in kinds {
        assert_eq!(serde_json::json!(kind.as_str()), serde_json::to_value(kind).unwrap());
    }
}

#[test]
fn report_derives_jobs_from_matches_and_sets_schema() {
    let report = SelectionReport::new(
        tool(),
        vec![
            JobMatch {
                job: JobId::for_crate("parser"),
                kind: JobKind::Crate,
                crate_name: Some("parser".to_string()),
                path: "crates/cairo-lang-parser/src/lib.rs".to_string(),
            },
            JobMatch {
                job: JobId::new("-rust-"),
                kind: JobKind::Trigger,
                crate_name: None,
                path: "crates/cairo-lang-parser/src/lib.rs".to_string(),
            },
        ],
    );

    assert_eq!(report.schema, testscope_types::schema::TESTSCOPE_SELECTION_V1);
    assert_eq!(report.jobs.joined(), "-parser-,-rust-");

    let value = serde_json::to_value(&report).expect("serialize");
    assert_eq!(value["jobs"], serde_json::json!(["-parser-", "-rust-"]));
    assert_eq!(value["matches"][0]["crate_name"], "parser");
    assert!(value["matches"][1].get("crate_name").is_none());

    let back: SelectionReport = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, report);
}

#[test]
fn registry_serializes_root_and_ordered_crates() {
    let reg = CrateRegistry::new("crates/cairo-lang-", ["runner", "parser"]).expect("registry");
    let value = serde_json::to_value(&reg).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({ "root": "crates/cairo-lang-", "crates": ["runner", "parser"] })
    );
}
