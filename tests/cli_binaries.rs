use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

const BASE: &str = "This is a Rolling hash file diff algorithm. It should check for changes in file and text";

fn rdiff() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rdiff"))
}

fn signature(base: &Path, output: &Path) {
    rdiff()
        .args(["signature", "--file"])
        .arg(base)
        .arg("--output")
        .arg(output)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Signatures generated and saved to: ",
        ));
}

#[test]
fn rdiff_help_lists_subcommands() {
    rdiff()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(
            predicate::str::contains("Usage:")
                .and(predicate::str::contains("signature"))
                .and(predicate::str::contains("delta"))
                .and(predicate::str::contains("print")),
        );
}

#[test]
fn rdiff_without_subcommand_shows_usage() {
    rdiff()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn full_pipeline_reports_changed_blocks() {
    let dir = tempfile::tempdir().expect("temp dir");
    let base = dir.path().join("base.txt");
    let updated = dir.path().join("updated.txt");
    let sig = dir.path().join("base.sig");
    let delta = dir.path().join("changes.delta");
    fs::write(&base, BASE).expect("write base");
    fs::write(&updated, format!("{BASE}. This is written in a way to detect addition to the text"))
        .expect("write updated");

    signature(&base, &sig);

    rdiff()
        .arg("delta")
        .arg("--signature")
        .arg(&sig)
        .arg("--updated")
        .arg(&updated)
        .arg("--output")
        .arg(&delta)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Delta generated and saved to: "));

    rdiff()
        .arg("print")
        .arg("--delta")
        .arg(&delta)
        .assert()
        .success()
        .stdout(
            "Pretty Delta:\nblock 5 [80..96] literal \"and text. This is written in a way to detect addition to the text\"\n",
        );
}

#[test]
fn persisted_delta_matches_library_result() {
    let dir = tempfile::tempdir().expect("temp dir");
    let base = dir.path().join("base.txt");
    let updated = dir.path().join("updated.txt");
    let sig = dir.path().join("base.sig");
    let delta_path = dir.path().join("changes.delta");
    let modified = "The a Rolling hash file diff algorithm. It should check for changes in file and text";
    fs::write(&base, BASE).expect("write base");
    fs::write(&updated, modified).expect("write updated");

    signature(&base, &sig);
    rdiff()
        .arg("delta")
        .arg("--signature")
        .arg(&sig)
        .arg("--updated")
        .arg(&updated)
        .arg("--output")
        .arg(&delta_path)
        .assert()
        .success();

    let table = signature::load_signature(&sig).expect("load signature");
    let expected = matching::generate_delta(
        &table,
        &mut modified.as_bytes(),
        matching::DeltaOptions::new(),
    )
    .expect("library delta");
    let stored = matching::load_delta(&delta_path).expect("load delta");
    assert_eq!(stored, expected);
    assert!(stored.get(0).is_some_and(matching::ChangeRecord::is_deleted));
}

#[test]
fn short_base_exits_with_insufficient_length() {
    let dir = tempfile::tempdir().expect("temp dir");
    let base = dir.path().join("short.txt");
    fs::write(&base, "only a few bytes").expect("write base");

    rdiff()
        .args(["signature", "--file"])
        .arg(&base)
        .arg("--output")
        .arg(dir.path().join("short.sig"))
        .assert()
        .code(3)
        .stderr(predicate::str::starts_with("rdiff: cannot generate signature of "));
}

#[test]
fn missing_delta_exits_with_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    rdiff()
        .arg("print")
        .arg("--delta")
        .arg(dir.path().join("absent.delta"))
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("rdiff: cannot read delta "));
}

#[test]
fn truncated_delta_exits_with_malformed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let delta = dir.path().join("truncated.delta");
    fs::write(&delta, b"RDDL\x01\x10\x01\x00").expect("write delta");

    rdiff()
        .arg("print")
        .arg("--delta")
        .arg(&delta)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("malformed delta data"));
}
