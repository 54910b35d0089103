//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn senpart() -> Command {
    Command::cargo_bin("senpart").expect("binary builds")
}

#[test]
fn test_process_stdin_text_output() {
    senpart()
        .args(["process", "-i", "-", "-l", "english", "--quiet"])
        .write_stdin("Even though it was raining, she was walking to school.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("was\twas"));
}

#[test]
fn test_process_stdin_json_output() {
    senpart()
        .args(["process", "-i", "-", "-f", "json", "--quiet"])
        .write_stdin("It was broken.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"auxiliaries\""))
        .stdout(predicate::str::contains("was broken."));
}

#[test]
fn test_process_french_language() {
    senpart()
        .args(["process", "-i", "-", "-l", "french", "--quiet"])
        .write_stdin("Bien qu'il ait plu, elle marchait.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ait plu\tait"));
}

#[test]
fn test_process_no_parts_produces_no_text_output() {
    senpart()
        .args(["process", "-i", "-", "--quiet"])
        .write_stdin("The quick brown fox jumps.\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_process_file_input_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    let mut file = std::fs::File::create(&input).unwrap();
    writeln!(file, "It was broken.").unwrap();

    senpart()
        .args(["process", "--quiet"])
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let rendered = std::fs::read_to_string(&output).unwrap();
    assert!(rendered.contains("was broken."));
}

#[test]
fn test_list_languages() {
    senpart()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("fr"));
}

#[test]
fn test_list_formats() {
    senpart()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_unknown_language_rejected() {
    senpart()
        .args(["process", "-i", "-", "-l", "german"])
        .assert()
        .failure();
}
