use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    Command::cargo_bin("seq-extract-rs").unwrap()
}

#[test]
fn test_flatten_reads_stdin_and_prints_text() {
    cmd()
        .arg("flatten")
        .write_stdin("[[s1, [[a1, a2], [b1]], s2]]")
        .assert()
        .success()
        .stdout(predicate::str::contains("s1 a1 a2 s2"))
        .stdout(predicate::str::contains("s1 b1 s2"));
}

#[test]
fn test_flatten_reads_file_with_ids() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(input, "[[a, a]]").unwrap();
    cmd()
        .arg("flatten")
        .arg(input.path())
        .arg("--ids")
        .assert()
        .success()
        .stdout(predicate::str::contains("a#1 a#2"));
}

#[test]
fn test_flatten_json_output() {
    let output = cmd()
        .arg("flatten")
        .arg("--format")
        .arg("json")
        .write_stdin("[[a, b], [c]]")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let paths: Vec<Vec<String>> = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        paths,
        vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ]
    );
}

#[test]
fn test_flatten_writes_dot_file() {
    let dot = tempfile::NamedTempFile::new().unwrap();
    cmd()
        .arg("flatten")
        .arg("--dot")
        .arg(dot.path())
        .write_stdin("[[a, [[b], [c]]]]")
        .assert()
        .success();
    let rendered = std::fs::read_to_string(dot.path()).unwrap();
    assert!(rendered.contains("digraph flow {"));
    assert!(rendered.contains("label=\"START\""));
}

#[test]
fn test_flatten_rejects_malformed_literal() {
    cmd()
        .arg("flatten")
        .write_stdin("[a, b")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed structural literal"));
}

#[test]
fn test_empty_stdin_prints_nothing() {
    cmd()
        .arg("flatten")
        .write_stdin("")
        .assert()
        .success()
        .stdout("\n");
}
