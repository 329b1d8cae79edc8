use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn table_from_argument() {
    let mut cmd = cargo_bin_cmd!("docmark");
    cmd.arg("table").arg("2:2");
    cmd.assert().success().stdout(
        "|Column1  |Column2  |\n\
         |---------|---------|\n\
         |Row1     |         |\n\
         |Row2     |         |\n",
    );
}

#[test]
fn table_size_is_prompted_when_missing() {
    let mut cmd = cargo_bin_cmd!("docmark");
    cmd.arg("table").write_stdin("1:3\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("|Row3     |\n"))
        .stderr(predicate::str::contains("C:R"));
}

#[test]
fn too_many_columns_warns_and_fails() {
    let mut cmd = cargo_bin_cmd!("docmark");
    cmd.arg("table").arg("5:1");
    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("up to four columns"));
}

#[test]
fn malformed_size_fails_silently() {
    let mut cmd = cargo_bin_cmd!("docmark");
    cmd.arg("table").arg("abc:3");
    cmd.assert().failure().stdout("").stderr("");
}

#[test]
fn table_is_inserted_into_document() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("doc.md");
    fs::write(&doc, "# Title\n\nAfter.\n").unwrap();

    let mut cmd = cargo_bin_cmd!("docmark");
    cmd.arg("table")
        .arg("1:1")
        .arg("--insert")
        .arg(doc.as_os_str())
        .arg("--at")
        .arg("3:1");
    cmd.assert().success().stdout("");

    assert_eq!(
        fs::read_to_string(&doc).unwrap(),
        "# Title\n\n|Column1  |\n|---------|\n|Row1     |\nAfter.\n"
    );
}
