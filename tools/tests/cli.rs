use std::{
    io::Write,
    process::{Command, Output},
};

use tempfile::NamedTempFile;

const TESTCASE1: &str = include_str!("../../secret-sharing/tests/fixtures/testcase1.json");
const TESTCASE2: &str = include_str!("../../secret-sharing/tests/fixtures/testcase2.json");

fn share_file(data: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temporary file should be created");
    file.write_all(data.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shamir-recover"))
        .args(args)
        .output()
        .expect("binary should run")
}

#[test]
fn test_recover() {
    let file1 = share_file(TESTCASE1);
    let file2 = share_file(TESTCASE2);
    let path1 = file1.path().to_str().unwrap();
    let path2 = file2.path().to_str().unwrap();

    let output = run(&[path1, path2]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("Secret for {}: 3", path1),
            format!("Secret for {}: 79836264049851", path2),
        ]
    );
}

#[test]
fn test_recover_verify_json() {
    let file = share_file(TESTCASE2);
    let path = file.path().to_str().unwrap();

    let output = run(&["--verify", "--division", "exact", "--format", "json", path]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["secret"], "79836264049851");
    assert_eq!(report["threshold"], 7);
    assert_eq!(report["shares"], 10);
    assert_eq!(report["invalid_shares"], serde_json::json!([8]));
}

#[test]
fn test_failures_are_isolated() {
    let broken = share_file(&TESTCASE1.replace("\"111\"", "\"121\""));
    let good = share_file(TESTCASE1);
    let broken_path = broken.path().to_str().unwrap();
    let good_path = good.path().to_str().unwrap();

    let output = run(&[broken_path, "/nonexistent/shares.json", good_path]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("Secret for {}: 3\n", good_path));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid digit '2' for base 2"));
    assert!(stderr.contains("failed to open /nonexistent/shares.json"));
}
