use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("simpleicon"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn sample_icon() -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join("flat_sword")
        .join("input.txt")
}

#[test]
fn help_supports_show_and_display() {
    cmd().arg("show").arg("--help").assert().success();
    cmd().arg("display").arg("--help").assert().success();
}

#[test]
fn show_prints_ascii_art() {
    cmd()
        .arg("show")
        .arg(sample_icon())
        .assert()
        .success()
        .stdout("sword (5x5) version 1\n    x\n   x \nx x  \n x   \nx x  \n");
}

#[test]
fn json_outputs_report() {
    let assert = cmd()
        .arg("show")
        .arg(sample_icon())
        .arg("--json")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["name"], "sword");
    assert_eq!(value["width"], 5);
    assert_eq!(value["rows"].as_array().map(Vec::len), Some(5));
}

#[test]
fn pretty_requires_json() {
    cmd()
        .arg("show")
        .arg(sample_icon())
        .arg("--pretty")
        .assert()
        .failure();
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.txt");

    cmd()
        .arg("show")
        .arg(missing)
        .assert()
        .failure()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn unknown_version_is_reported() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("future.txt");
    std::fs::write(&input, "future;;3;;2x2;;1111\n").expect("write input");

    cmd()
        .arg("show")
        .arg(input)
        .assert()
        .failure()
        .stderr(contains("unknown icon version: 3").and(contains("hint:")));
}

#[test]
fn short_pixel_data_is_reported() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("short.txt");
    std::fs::write(&input, "short;;1;;4x4;;1111\n").expect("write input");

    cmd()
        .arg("show")
        .arg(input)
        .assert()
        .failure()
        .stderr(contains("insufficient pixel data"));
}

#[test]
fn output_file_is_written() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("out").join("sword.ascii");

    cmd()
        .arg("show")
        .arg(sample_icon())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("")
        .stderr(contains("OK: output written"));

    let written = std::fs::read_to_string(&output).expect("read output");
    assert!(written.starts_with("sword (5x5) version 1\n"));
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("sword.json");

    cmd()
        .arg("show")
        .arg(sample_icon())
        .arg("--json")
        .arg("-o")
        .arg(output)
        .arg("-q")
        .assert()
        .success()
        .stderr(contains("OK:").not());
}

#[test]
fn output_must_differ_from_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("dot.txt");
    std::fs::write(&input, "dot;;1;;1x1;;1").expect("write input");

    cmd()
        .arg("show")
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("output path must differ from input"));
}

#[test]
fn glob_with_multiple_matches_fails() {
    let temp = TempDir::new().expect("tempdir");
    std::fs::write(temp.path().join("a.txt"), "a;;1;;1x1;;1").expect("write a");
    std::fs::write(temp.path().join("b.txt"), "b;;1;;1x1;;0").expect("write b");

    cmd()
        .arg("show")
        .arg(temp.path().join("*.txt"))
        .assert()
        .failure()
        .stderr(contains("multiple files match pattern"));
}

#[test]
fn glob_with_single_match_is_used() {
    let temp = TempDir::new().expect("tempdir");
    std::fs::write(temp.path().join("only.txt"), "only;;2;;2x1;;01").expect("write icon");

    cmd()
        .arg("show")
        .arg(temp.path().join("on*.txt"))
        .assert()
        .success()
        .stdout("only (2x1) version 2\n x\n");
}
