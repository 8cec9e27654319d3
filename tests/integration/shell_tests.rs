//! Shell integration tests
//!
//! Drive a shell session command by command and check how the environment is
//! threaded from one tool to the next.

use droidtools::shell::EnvUpdate;
use droidtools::{Config, Environment, Flow, Shell, Tool, ToolRegistry};
use std::io::Write;
use std::path::PathBuf;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn default_shell() -> Shell {
    let config = Config::default();
    Shell::new(
        &config,
        ToolRegistry::with_default_tools(&config.layout.default_database),
    )
}

fn run_lines(shell: &mut Shell, lines: &[&str]) -> String {
    let mut out = Vec::new();
    for line in lines {
        let flow = shell.execute_line(line, &mut out).expect("Command failed");
        assert_eq!(flow, Flow::Continue, "`{line}` ended the session");
    }
    String::from_utf8(out).unwrap()
}

/// Reads `layout_database` and reports how many classes it lists
struct CountClasses;

impl Tool for CountClasses {
    fn name(&self) -> &'static str {
        "count_classes"
    }

    fn describe(&self) -> &str {
        "Count the classes in a layout database"
    }

    fn execute(
        &self,
        env: &Environment,
        out: &mut dyn Write,
    ) -> miette::Result<Option<EnvUpdate>> {
        let Some(path) = env.get_str("layout_database") else {
            writeln!(out, "Must provide \"layout_database\"").unwrap();
            return Ok(None);
        };
        let db = droidtools::LayoutDatabase::load(path.as_ref()).unwrap();

        let mut update = EnvUpdate::new();
        update.insert("class_count".to_string(), db.classes.len().into());
        Ok(Some(update))
    }
}

#[test]
fn test_set_then_print_environment() {
    let mut shell = default_shell();

    let printed = run_lines(&mut shell, &["set path /tmp/x", "set"]);

    assert!(printed.contains("path => /tmp/x"));
    assert!(printed.contains(r#""path": "/tmp/x""#));
}

#[test]
fn test_parse_layout_output_feeds_next_tool() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let database = temp.path().join("layouts.json");

    let config = Config::default();
    let mut tools = ToolRegistry::with_default_tools(&config.layout.default_database);
    tools.register(Box::new(CountClasses));
    let mut shell = Shell::new(&config, tools);

    let printed = run_lines(
        &mut shell,
        &[
            &format!("set disassembled {}", fixtures_path().join("app").display()),
            &format!("parse_layout layout_database={}", database.display()),
            "count_classes",
        ],
    );

    assert!(printed.contains("saved to"));
    assert!(database.exists());
    assert_eq!(
        shell.environment().get_str("layout_database"),
        Some(database.to_string_lossy().as_ref())
    );
    assert_eq!(
        shell.environment().get("class_count"),
        Some(&serde_json::json!(7))
    );
}

#[test]
fn test_help_shows_tool_description() {
    let mut shell = default_shell();

    let printed = run_lines(&mut shell, &["help parse_layout"]);

    assert_eq!(printed, "Generate the layout database from a disassembled apk\n");
}

#[test]
fn test_malformed_layout_ends_session_with_error() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let mut shell = default_shell();
    run_lines(
        &mut shell,
        &[&format!("set disassembled {}", fixtures_path().join("broken").display())],
    );

    let mut out = Vec::new();
    let result = shell.execute_line(
        &format!("parse_layout layout_database={}", temp.path().join("db.json").display()),
        &mut out,
    );

    let err = result.expect_err("Malformed layout should fail the command");
    assert!(format!("{err:?}").contains("broken.xml"));
    assert!(!temp.path().join("db.json").exists());
}
