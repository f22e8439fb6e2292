//! Runs the built binary the way scripts would

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn taskpal(home: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_taskpal"));
    command
        .env("TASKPAL_HOME", home)
        .env_remove("TASKPAL_FILE")
        .env_remove("TASKPAL_DEBUG");
    command
}

fn run(home: &Path, args: &[&str]) -> Output {
    taskpal(home).args(args).output().expect("Failed to run taskpal")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_run_then_list() {
    let temp = TempDir::new().unwrap();

    let added = run(temp.path(), &["run", "todo", "read", "book"]);
    assert!(added.status.success());
    assert!(stdout(&added).contains("Now you have 1 task in the list."));

    run(temp.path(), &["run", "deadline", "report", "/by", "2/12/2024", "18:00"]);
    run(temp.path(), &["run", "mark", "1"]);

    let listed = run(temp.path(), &["list"]);
    assert_eq!(
        stdout(&listed),
        "1.[T][X] read book\n2.[D][ ] report (by: Dec 2 2024, 6:00PM)\n"
    );

    let pending = run(temp.path(), &["ls", "--pending"]);
    assert_eq!(stdout(&pending), "2.[D][ ] report (by: Dec 2 2024, 6:00PM)\n");
}

#[test]
fn test_run_error_exits_nonzero() {
    let temp = TempDir::new().unwrap();

    let output = run(temp.path(), &["run", "delete", "-1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    run(
        temp.path(),
        &["run", "event", "camp", "/from", "2024-06-01", "08:00", "/to", "2024-06-03", "17:00"],
    );

    let output = run(temp.path(), &["list", "--json"]);
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["number"], 1);
    assert_eq!(rows[0]["kind"], "event");
    assert_eq!(rows[0]["from"], "2024-06-01 08:00");
    assert!(rows[0].get("by").is_none());
}

#[test]
fn test_file_flag_overrides_app_dir() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("other.txt");

    let output = run(
        temp.path(),
        &["--file", file.to_str().unwrap(), "run", "todo", "x"],
    );
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "T | 0 | x\n");
    assert!(!temp.path().join("tasks.txt").exists());
}

#[test]
fn test_piped_input_uses_line_chat() {
    let temp = TempDir::new().unwrap();

    let mut child = taskpal(temp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn taskpal");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"todo a\nlist\nbye\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("1.[T][ ] a"));
    assert!(text.trim_end().ends_with("Bye. Hope to see you again soon!"));
    assert_eq!(
        std::fs::read_to_string(temp.path().join("tasks.txt")).unwrap(),
        "T | 0 | a\n"
    );
}
