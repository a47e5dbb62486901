use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn cookbook_cmd() -> Command {
    Command::cargo_bin("cookbook").unwrap()
}

fn write_book(dir: &std::path::Path) {
    fs::create_dir_all(dir.join("chapters/courses/sar")).unwrap();
    fs::write(dir.join("chapters/courses/sar.qmd"), "").unwrap();
    fs::write(dir.join("chapters/courses/sar/unit_01.qmd"), "").unwrap();
    fs::write(
        dir.join("_quarto.yml"),
        "book:\n  chapters:\n    - index.qmd\n    - part: chapters/courses/sar.qmd\n      chapters:\n        - chapters/courses/sar/unit_01.qmd\n  appendices:\n    - chapters/references.qmd\n",
    )
    .unwrap();
}

#[test]
fn test_toc_writes_toc_file() {
    let tmp = TempDir::new().unwrap();
    write_book(tmp.path());

    cookbook_cmd()
        .current_dir(tmp.path())
        .args(["toc", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_toc.yml"));

    let toc = fs::read_to_string(tmp.path().join("out/_toc.yml")).unwrap();
    assert!(toc.starts_with("format: jb-book\n"), "got:\n{toc}");
    assert!(toc.contains("file: notebooks/courses/sar/unit_01"), "got:\n{toc}");
}

#[test]
fn test_toc_with_explicit_config_path() {
    let tmp = TempDir::new().unwrap();
    write_book(tmp.path());
    fs::create_dir_all(tmp.path().join("cfg")).unwrap();
    fs::rename(tmp.path().join("_quarto.yml"), tmp.path().join("cfg/_quarto.yml")).unwrap();

    cookbook_cmd()
        .current_dir(tmp.path())
        .args(["toc", "site", "--config", "cfg/_quarto.yml"])
        .assert()
        .success();

    let toc = fs::read_to_string(tmp.path().join("site/_toc.yml")).unwrap();
    assert!(toc.contains("file: notebooks/courses/sar\n"), "got:\n{toc}");
}

#[test]
fn test_toc_checks_chapters_in_working_directory() {
    let tmp = TempDir::new().unwrap();
    let book = tmp.path().join("book");
    write_book(&book);

    cookbook_cmd()
        .current_dir(tmp.path())
        .args(["toc", "site", "--config", "book/_quarto.yml"])
        .assert()
        .success();

    let toc = fs::read_to_string(tmp.path().join("site/_toc.yml")).unwrap();
    assert!(toc.contains("file: chapters/courses/sar.qmd\n"), "got:\n{toc}");
}

#[test]
fn test_toc_without_outline_fails() {
    let tmp = TempDir::new().unwrap();

    cookbook_cmd()
        .current_dir(tmp.path())
        .args(["toc", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("_quarto.yml"));

    assert!(!tmp.path().join("out").exists());
}

#[test]
fn test_toc_missing_appendices_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("_quarto.yml"),
        "book:\n  chapters:\n    - index.qmd\n",
    )
    .unwrap();

    cookbook_cmd()
        .current_dir(tmp.path())
        .args(["toc", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("appendices"));
}

#[test]
fn test_toc_respects_project_config() {
    let tmp = TempDir::new().unwrap();
    write_book(tmp.path());
    fs::write(
        tmp.path().join("cookbook.toml"),
        "[toc]\npublish-root = \"published\"\noutput = \"toc.yml\"\n",
    )
    .unwrap();

    cookbook_cmd()
        .current_dir(tmp.path())
        .args(["toc", "out"])
        .assert()
        .success();

    let toc = fs::read_to_string(tmp.path().join("out/toc.yml")).unwrap();
    assert!(toc.contains("file: published/courses/sar/unit_01"), "got:\n{toc}");
    assert!(toc.contains("file: published/how-to-cite"), "got:\n{toc}");
}
