use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn cookbook_cmd() -> Command {
    Command::cargo_bin("cookbook").unwrap()
}

#[test]
fn test_build_writes_toc_and_environment() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("_quarto.yml"),
        "book:\n  chapters:\n    - index.qmd\n  appendices: []\n",
    )
    .unwrap();
    fs::create_dir_all(tmp.path().join("notebooks")).unwrap();
    fs::write(
        tmp.path().join("environment.yml"),
        "dependencies:\n  - python=3.11\n",
    )
    .unwrap();

    cookbook_cmd()
        .current_dir(tmp.path())
        .args(["build", "--out", "dist", "--name", "eo-datascience-cookbook"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_toc.yml"));

    let toc = fs::read_to_string(tmp.path().join("dist/_toc.yml")).unwrap();
    assert!(toc.contains("caption: Preamble"), "got:\n{toc}");
    let env = fs::read_to_string(tmp.path().join("dist/environment.yml")).unwrap();
    assert!(env.starts_with("name: eo-datascience-cookbook\n"), "got:\n{env}");
    assert!(env.contains("  - python=3.11\n"), "got:\n{env}");
}

#[test]
fn test_build_uses_release_environment_name_by_default() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("_quarto.yml"),
        "book:\n  chapters:\n    - index.qmd\n  appendices: []\n",
    )
    .unwrap();
    fs::create_dir_all(tmp.path().join("notebooks")).unwrap();
    fs::write(tmp.path().join("environment.yml"), "dependencies:\n  - numpy\n").unwrap();

    cookbook_cmd()
        .current_dir(tmp.path())
        .args(["build", "--out", "dist"])
        .assert()
        .success();

    let env = fs::read_to_string(tmp.path().join("dist/environment.yml")).unwrap();
    assert!(env.starts_with("name: eo-datascience-cookbook\n"), "got:\n{env}");
}

#[test]
fn test_build_requires_out() {
    let tmp = TempDir::new().unwrap();

    cookbook_cmd()
        .current_dir(tmp.path())
        .args(["build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--out"));
}
