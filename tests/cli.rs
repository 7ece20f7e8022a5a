//! End-to-end CLI tests

use std::fs;
use std::io::Write;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

fn listdiff() -> Command {
    Command::cargo_bin("listdiff").unwrap()
}

#[test]
fn test_named_column_differences_exit_code_1() {
    let dir = TempDir::new().unwrap();
    let first = write_file(dir.path(), "a.csv", b"NOME\nAna\nBob \nCARLOS\n");
    let second = write_file(dir.path(), "b.csv", b"NOME\nana\nDiana\n");

    listdiff()
        .arg(&first)
        .arg(&second)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Rows read: 3 in the first list, 2 in the second"))
        .stdout(predicate::str::contains("BOB"))
        .stdout(predicate::str::contains("CARLOS"))
        .stdout(predicate::str::contains("DIANA"));
}

#[test]
fn test_identical_lists_exit_code_0() {
    let dir = TempDir::new().unwrap();
    let first = write_file(dir.path(), "a.csv", b"NOME\nMaria \n");
    let second = write_file(dir.path(), "b.csv", b"NOME\n maria\n");

    listdiff()
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains("No differences found."));
}

#[test]
fn test_missing_column_exit_code_2() {
    let dir = TempDir::new().unwrap();
    let first = write_file(dir.path(), "a.csv", b"NOME\nAna\n");
    let second = write_file(dir.path(), "b.csv", b"NAME\nAna\n");

    listdiff()
        .arg(&first)
        .arg(&second)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("column 'NOME' not found in the second list"));
}

#[test]
fn test_positional_mode_headerless() {
    let dir = TempDir::new().unwrap();
    let first = write_file(dir.path(), "a.csv", b"X1\nX2\n");
    let second = write_file(dir.path(), "b.csv", b"x1\nX3\n");

    listdiff()
        .arg(&first)
        .arg(&second)
        .arg("--no-header")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("X2"))
        .stdout(predicate::str::contains("X3"));
}

#[test]
fn test_latin1_input_with_auto_detection() {
    let dir = TempDir::new().unwrap();
    // "José" encoded as Latin-1 on one side, UTF-8 on the other
    let first = write_file(dir.path(), "a.csv", b"NOME\nJos\xe9\n");
    let second = write_file(dir.path(), "b.csv", "NOME\njosé\n".as_bytes());

    listdiff()
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains("No differences found."));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let first = write_file(dir.path(), "a.csv", b"NOME\nAna\n");
    let second = write_file(dir.path(), "b.csv", b"NOME\nBia\n");

    let output = listdiff()
        .arg(&first)
        .arg(&second)
        .args(["--format", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let doc: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(doc["column"], "NOME");
    assert_eq!(doc["only_in_first"][0], "ANA");
    assert_eq!(doc["only_in_second"][0], "BIA");
    assert_eq!(doc["first_row_count"], 1);
}

#[test]
fn test_export_dir_writes_both_files() {
    let dir = TempDir::new().unwrap();
    let first = write_file(dir.path(), "a.csv", b"NOME\nAna\nBob\n");
    let second = write_file(dir.path(), "b.csv", b"NOME\nana\n");
    let export_dir = dir.path().join("out");

    listdiff()
        .arg(&first)
        .arg(&second)
        .arg("--export-dir")
        .arg(&export_dir)
        .assert()
        .code(1);

    let exported = fs::read_to_string(export_dir.join("only_in_first.csv")).unwrap();
    assert_eq!(exported, "NOME\nBOB\n");
    let exported = fs::read_to_string(export_dir.join("only_in_second.csv")).unwrap();
    assert_eq!(exported, "NOME\n");
}

#[test]
fn test_empty_first_list_is_valid() {
    let dir = TempDir::new().unwrap();
    let first = write_file(dir.path(), "a.csv", b"");
    let second = write_file(dir.path(), "b.csv", b"A\nB\n");

    listdiff()
        .arg(&first)
        .arg(&second)
        .arg("--no-header")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Rows read: 0 in the first list, 2 in the second"))
        .stdout(predicate::str::contains("Only in"));
}
