mod common;

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Run the binary in `dir` with `stdin` piped in.
fn run(dir: &Path, stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_covxml"))
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn converts_stdin_to_stdout() {
    let dir = common::source_dir(&[("a.go", common::TWO_LINES)]);
    let json = br#"{"Packages":[{"Name":"pkg","Functions":[
        {"Name":"Add","File":"a.go","Statements":[{"Start":10,"Reached":1},{"Start":25,"Reached":0}]}
    ]}]}"#;

    let output = run(dir.path(), json);
    assert!(output.status.success());

    let xml = String::from_utf8(output.stdout).unwrap();
    assert!(xml.starts_with(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE coverage SYSTEM \"http://cobertura.sourceforge.net/xml/coverage-03.dtd\">\n"
    ));
    assert!(xml.contains("<coverage line-rate=\"0.5\" branch-rate=\"0\""));
    assert!(xml.contains("<class name=\"-\" filename=\"a.go\" line-rate=\"0.5\""));
    assert!(xml.ends_with("</coverage>\n"));
}

#[test]
fn invalid_json_fails_without_output() {
    let dir = common::source_dir(&[]);
    let output = run(dir.path(), b"{not json");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn missing_source_fails_without_output() {
    let dir = common::source_dir(&[]);
    let json = br#"{"Packages":[{"Name":"pkg","Functions":[
        {"Name":"F","File":"gone.go","Statements":[{"Start":0,"Reached":1}]}
    ]}]}"#;
    let output = run(dir.path(), json);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("gone.go"));
}
