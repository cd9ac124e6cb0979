use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn run_anonymizes_python_from_stdin() {
    let mut cmd = Command::cargo_bin("codeveil").unwrap();

    cmd.args(["run", "--language", "python"])
        .write_stdin("def calculate_total(price, tax_rate):\n    return price * (1 + tax_rate)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("def function_1(variable_1, variable_2):"))
        .stdout(predicate::str::contains("calculate_total").not());
}

#[test]
fn detect_reports_language() {
    let mut cmd = Command::cargo_bin("codeveil").unwrap();

    cmd.arg("detect")
        .write_stdin("SELECT id FROM users")
        .assert()
        .success()
        .stdout(predicate::str::contains("sql"));
}

#[test]
fn run_and_restore_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mapping_path = dir.path().join("mapping.json");
    let anonymized_path = dir.path().join("anonymized.py");

    Command::cargo_bin("codeveil")
        .unwrap()
        .args([
            "run",
            "--language",
            "python",
            "--output",
            anonymized_path.to_str().unwrap(),
            "--save-mapping",
            mapping_path.to_str().unwrap(),
        ])
        .write_stdin("secret_margin = 42\n")
        .assert()
        .success();

    let anonymized = std::fs::read_to_string(&anonymized_path).unwrap();
    assert!(anonymized.contains("variable_1"));
    assert!(!anonymized.contains("secret_margin"));

    Command::cargo_bin("codeveil")
        .unwrap()
        .args(["restore", "--mapping", mapping_path.to_str().unwrap()])
        .write_stdin("the bug is in variable_1")
        .assert()
        .success()
        .stdout(predicate::str::contains("the bug is in secret_margin"));
}

#[test]
fn unknown_language_value_is_rejected() {
    let mut cmd = Command::cargo_bin("codeveil").unwrap();

    cmd.args(["run", "--language", "ruby"])
        .write_stdin("puts 'hi'")
        .assert()
        .failure();
}
