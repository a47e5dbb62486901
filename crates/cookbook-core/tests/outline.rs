use cookbook_core::outline::{BookEntry, QuartoProject};

const QUARTO_YML: &str = r#"
project:
  type: book
book:
  title: "EO Datascience Cookbook"
  chapters:
    - index.qmd
    - part: chapters/courses/microwave-remote-sensing.qmd
      chapters:
        - chapters/courses/microwave-remote-sensing/unit_01/01_in_class_exercise.qmd
        - chapters/courses/microwave-remote-sensing/unit_01/02_in_class_exercise.qmd
  appendices:
    - part: chapters/templates/prereqs-templates.qmd
      chapters:
        - chapters/templates/classification.qmd
    - chapters/references.qmd
format:
  html:
    theme: cosmo
"#;

#[test]
fn test_parse_book_outline() {
    let project = QuartoProject::from_str(QUARTO_YML).unwrap();
    assert_eq!(project.book.chapters.len(), 2);
    assert_eq!(project.book.appendices.len(), 2);
    assert_eq!(project.book.chapters[0], BookEntry::File("index.qmd".into()));
    assert!(project.book.chapters[1].as_part().is_some());
    assert!(project.book.appendices[1].as_part().is_none());
}

#[test]
fn test_missing_book_is_error() {
    let err = QuartoProject::from_str("project:\n  type: book\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Outline error"), "got: {msg}");
}

#[test]
fn test_missing_appendices_is_error() {
    let err = QuartoProject::from_str("book:\n  chapters:\n    - index.qmd\n").unwrap_err();
    assert!(err.to_string().contains("appendices"), "got: {err}");
}

#[test]
fn test_missing_chapters_is_error() {
    let err = QuartoProject::from_str("book:\n  appendices: []\n").unwrap_err();
    assert!(err.to_string().contains("chapters"), "got: {err}");
}

#[test]
fn test_from_path_missing_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let err = QuartoProject::from_path(&tmp.path().join("_quarto.yml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"), "got: {err}");
}
