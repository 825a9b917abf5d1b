use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn make_bare(path: &Path) {
    fs::create_dir_all(path.join("objects")).unwrap();
    fs::create_dir_all(path.join("refs")).unwrap();
    fs::write(path.join("HEAD"), "ref: refs/heads/main\n").unwrap();
}

fn untracked() -> Command {
    let mut cmd = Command::cargo_bin("untracked").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    untracked()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("version control"));
}

#[test]
fn test_repository_prints_nothing() {
    let temp = TempDir::new().unwrap();
    make_bare(&temp.path().join(".git"));

    untracked().arg(temp.path()).assert().success().stdout("");
}

#[test]
fn test_mixed_tree_prints_unversioned_child() {
    let temp = TempDir::new().unwrap();
    let d = temp.path().join("d");
    make_bare(&d.join("x/.git"));
    fs::create_dir_all(d.join("y")).unwrap();

    untracked()
        .arg(&d)
        .assert()
        .success()
        .stdout(format!("{}\n", d.join("y").display()));
}

#[test]
fn test_no_arguments_uses_current_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();
    let cwd = temp.path().canonicalize().unwrap();

    untracked()
        .current_dir(&cwd)
        .assert()
        .success()
        .stdout(format!("{}\n", cwd.display()));
}

#[test]
fn test_arguments_processed_in_order() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("zz");
    let second = temp.path().join("aa");
    fs::create_dir(&first).unwrap();
    fs::create_dir(&second).unwrap();

    untracked()
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", first.display(), second.display()));
}

#[test]
fn test_output_is_cleaned() {
    let temp = TempDir::new().unwrap();
    let c = temp.path().join("c");
    fs::create_dir(&c).unwrap();

    untracked()
        .arg(format!("{}//./", c.display()))
        .assert()
        .success()
        .stdout(format!("{}\n", c.display()));
}

#[test]
fn test_missing_path_still_succeeds() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");

    untracked()
        .arg(&missing)
        .assert()
        .success()
        .stdout(format!("{}\n", missing.display()));
}

#[test]
fn test_parallel_matches_sequential() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    make_bare(&root.join("a/.git"));
    fs::create_dir_all(root.join("b/c")).unwrap();
    make_bare(&root.join("d/e.git"));
    fs::create_dir_all(root.join("d/f")).unwrap();

    let sequential = untracked().arg(root).output().unwrap();
    let parallel = untracked()
        .args(["--parallel", "--threads", "2"])
        .arg(root)
        .output()
        .unwrap();

    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
    assert_eq!(
        String::from_utf8(sequential.stdout).unwrap(),
        format!("{}\n{}\n", root.join("b").display(), root.join("d/f").display())
    );
}

#[test]
fn test_json_format() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    make_bare(&root.join("repo"));
    fs::create_dir(root.join("plain")).unwrap();

    let output = untracked()
        .args(["--format", "json"])
        .arg(root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["unversioned"][0], root.join("plain").display().to_string());
    assert_eq!(json["stats"]["repositories"], 1);
    assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let temp = TempDir::new().unwrap();
    let d = temp.path().join("d");
    make_bare(&d.join("x"));
    let odd = d.join(OsStr::from_bytes(b"caf\xe9"));
    // Some filesystems only accept UTF-8 names.
    if fs::create_dir(&odd).is_err() {
        return;
    }

    let mut expected = odd.clone().into_os_string().into_vec();
    expected.push(b'\n');
    untracked().arg(&d).assert().success().stdout(expected);

    let output = untracked()
        .args(["--format", "json"])
        .arg(&d)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["unversioned"][0],
        format!("{}/caf\u{FFFD}", d.display())
    );
}
