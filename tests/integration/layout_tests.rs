//! Integration tests for layout analysis
//!
//! These tests run the analyzer against the fixture apk under tests/fixtures
//! and against scratch resource trees.

use droidtools::report::LayoutDatabase;
use droidtools::{AnalysisError, LayoutAnalyzer};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn analyze(res_dir: &Path) -> LayoutAnalyzer {
    let mut analyzer = LayoutAnalyzer::new();
    analyzer.analyze(res_dir).expect("Failed to analyze layouts");
    analyzer
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn write_layout(res_dir: &Path, relative: &str, contents: &str) {
    let path = res_dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).expect("Failed to create layout dir");
    fs::write(path, contents).expect("Failed to write layout");
}

#[test]
fn test_fixture_apk_classes() {
    let analyzer = analyze(&fixtures_path().join("app/res"));

    assert_eq!(
        analyzer.classes(),
        &set(&[
            "Button",
            "EditText",
            "ImageButton",
            "LinearLayout",
            "com.example.app.DetailsFragment",
            "com.example.app.widget.ChartView",
            "com.example.app.widget.TitleBar",
        ])
    );
}

#[test]
fn test_fixture_apk_on_clicks() {
    let analyzer = analyze(&fixtures_path().join("app/res"));

    assert_eq!(
        analyzer.on_clicks(),
        &set(&["onChartClicked", "onMenuClicked", "onSaveClicked"])
    );
}

#[test]
fn test_structural_tags_never_recorded() {
    let analyzer = analyze(&fixtures_path().join("app/res"));

    for tag in droidtools::parser::xml::STRUCTURAL_TAGS {
        assert!(!analyzer.classes().contains(tag), "{tag} should not be a class");
    }
}

#[test]
fn test_non_layout_directories_are_not_scanned() {
    let analyzer = analyze(&fixtures_path().join("app/res"));

    // drawable/background.xml and values/strings.xml
    for tag in ["shape", "solid", "resources", "string"] {
        assert!(!analyzer.classes().contains(tag), "{tag} came from a non-layout dir");
    }
}

#[test]
fn test_end_to_end_json() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let res = temp.path().join("res");
    write_layout(
        &res,
        "layout/main.xml",
        r#"<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android">
    <Button android:onClick="save" />
    <fragment android:name="com.example.F" />
</LinearLayout>"#,
    );
    let output = temp.path().join("layout_database.json");

    let mut analyzer = analyze(&res);
    analyzer.output(&output).expect("Failed to write database");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "external_methods": {"onClick": ["save"]},
            "classes": ["Button", "LinearLayout", "com.example.F"]
        })
    );

    // same analyzer, same tree: nothing new
    analyzer.analyze(&res).unwrap();
    assert_eq!(analyzer.classes().len(), 3);
}

#[test]
fn test_end_to_end_single_root_element() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let res = temp.path().join("res");
    write_layout(
        &res,
        "layout/main.xml",
        r#"<merge xmlns:android="http://schemas.android.com/apk/res/android">
    <Button android:onClick="save" />
    <fragment android:name="com.example.F" />
</merge>"#,
    );
    let output = temp.path().join("db.json");

    analyze(&res).output(&output).unwrap();

    let db = LayoutDatabase::load(&output).unwrap();
    assert_eq!(db.external_methods.on_click, vec!["save"]);
    assert_eq!(db.classes, vec!["Button", "com.example.F"]);
}

#[test]
fn test_output_uses_four_space_indent() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temp.path().join("db.json");

    analyze(&fixtures_path().join("app/res"))
        .output(&output)
        .unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("{\n    \"external_methods\": {\n        \"onClick\": ["));
}

#[test]
fn test_idempotent_across_fresh_analyzers() {
    let res = fixtures_path().join("app/res");

    let first = analyze(&res).database();
    let second = analyze(&res).database();

    assert_eq!(first, second);
}

#[test]
fn test_broken_layout_fails_with_path() {
    let mut analyzer = LayoutAnalyzer::new();
    let err = analyzer
        .analyze(&fixtures_path().join("broken/res"))
        .unwrap_err();

    match &err {
        AnalysisError::Parse { path, .. } => assert!(path.ends_with("broken.xml")),
        other => panic!("Expected a parse error, got {other:?}"),
    }
    assert!(err.to_string().contains("broken.xml"));
    assert!(analyzer.on_clicks().is_empty());
}

#[test]
fn test_stray_text_and_undefined_entities_fail_with_path() {
    for (name, contents) in [
        ("leading.xml", "garbage<LinearLayout/>"),
        ("trailing.xml", "<LinearLayout/>garbage"),
        ("entity.xml", "<TextView>&bogus;</TextView>"),
    ] {
        let temp = tempfile::tempdir().expect("Failed to create temp dir");
        let layout_dir = temp.path().join("res/layout");
        fs::create_dir_all(&layout_dir).expect("Failed to create layout dir");
        fs::write(layout_dir.join(name), contents).expect("Failed to write layout");

        let mut analyzer = LayoutAnalyzer::new();
        let err = analyzer.analyze(&temp.path().join("res")).unwrap_err();

        match &err {
            AnalysisError::Parse { path, .. } => assert!(path.ends_with(name)),
            other => panic!("Expected a parse error for {name}, got {other:?}"),
        }
    }
}

#[test]
fn test_missing_res_dir_is_an_error() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");

    let mut analyzer = LayoutAnalyzer::new();
    let result = analyzer.analyze(&temp.path().join("res"));

    assert!(matches!(result, Err(AnalysisError::Discovery(_))));
}
