use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn splits_a_file_and_reports_stats() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "# One\nalpha\n# Two\nbeta\n").unwrap();
    let out = dir.path().join("out");

    let mut cmd = cargo_bin_cmd!("mdsplit");
    cmd.arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("- 1 input file(s)"))
        .stdout(predicate::str::contains("- 2 extracted chapter(s)"))
        .stdout(predicate::str::contains("- 2 new output file(s)"));

    assert_eq!(fs::read_to_string(out.join("One.md")).unwrap(), "# One\nalpha\n");
    assert_eq!(fs::read_to_string(out.join("Two.md")).unwrap(), "# Two\nbeta\n");
}

#[test]
fn reads_from_stdin() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");

    let mut cmd = cargo_bin_cmd!("mdsplit");
    cmd.arg("-")
        .arg("--output")
        .arg(&out)
        .write_stdin("intro\n# A\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("- 2 extracted chapter(s)"));

    assert_eq!(fs::read_to_string(out.join("stdin.md")).unwrap(), "intro\n");
    assert_eq!(fs::read_to_string(out.join("A.md")).unwrap(), "# A\nx\n");
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("mdsplit");
    cmd.arg(dir.path().join("nope.md"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn existing_output_folder_needs_force() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "# One\nx\n").unwrap();
    let out = dir.path().join("out");
    fs::create_dir_all(&out).unwrap();

    let mut cmd = cargo_bin_cmd!("mdsplit");
    cmd.arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    let mut forced = cargo_bin_cmd!("mdsplit");
    forced
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .arg("--force")
        .assert()
        .success();
    assert!(out.join("One.md").exists());
}

#[test]
fn rejects_out_of_range_split_levels() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "# One\n").unwrap();

    let mut cmd = cargo_bin_cmd!("mdsplit");
    cmd.arg(&input)
        .arg("--max-level")
        .arg("7")
        .assert()
        .failure();
}

#[test]
fn unknown_encodings_fail() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "# One\n").unwrap();
    let out = dir.path().join("out");

    let mut cmd = cargo_bin_cmd!("mdsplit");
    cmd.arg(&input)
        .arg("--output")
        .arg(&out)
        .arg("--encoding")
        .arg("nosuch")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown encoding"));
}

#[test]
fn verbose_lists_processed_files() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "# One\nalpha\n").unwrap();
    let out = dir.path().join("out");

    let mut cmd = cargo_bin_cmd!("mdsplit");
    cmd.arg(&input)
        .arg("--output")
        .arg(&out)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Process file"))
        .stdout(predicate::str::contains("Write 2 lines to"));
}
