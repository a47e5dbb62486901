//! Quarto outline to Jupyter Book TOC.
//!
//! The main chapter list collapses into a single "Courses" part whose
//! chapters are the Quarto parts, each with its chapters as sections. Every
//! appendix part becomes its own top-level part, captioned after the
//! directory it lives in. A fixed preamble and references page frame the
//! result.

use serde_yaml::{Mapping, Value};

use cookbook_core::outline::{Book, QuartoProject};
use cookbook_core::path::{PathProbe, PathRewriter};
use cookbook_core::toc::{JupyterBookToc, TocChapter, TocPart};
use cookbook_util::errors::CookbookError;

/// Caption of the part that aggregates all main chapters.
pub const MAIN_CAPTION: &str = "Courses";

const PART_KEY: &str = "part";
const CAPTION_KEY: &str = "caption";
const CHAPTERS_KEY: &str = "chapters";
const FILE_KEY: &str = "file";

/// Main parts: everything after the landing page.
pub fn extract_main(book: &Book) -> Vec<&Mapping> {
    let entries = book.chapters.get(1..).unwrap_or_default();
    parts_only(entries)
}

/// Appendix parts: everything before the trailing references page.
pub fn extract_appendix(book: &Book) -> Vec<&Mapping> {
    let len = book.appendices.len();
    let entries = book.appendices.get(..len.saturating_sub(1)).unwrap_or_default();
    parts_only(entries)
}

fn parts_only(entries: &[cookbook_core::outline::BookEntry]) -> Vec<&Mapping> {
    entries
        .iter()
        .filter_map(|entry| {
            let part = entry.as_part();
            if part.is_none() {
                tracing::debug!("Skipping non-part outline entry {entry:?}");
            }
            part
        })
        .collect()
}

/// Rename `from` to `to` and normalize file-valued keys into `[{file: ...}]`.
///
/// A string value, or a list of strings, is rewritten through `rewriter` and
/// wrapped as file references. Values that are already file references are
/// left alone, so applying the rename twice yields the same mapping.
pub fn rename_keys<P: PathProbe>(
    section: &Mapping,
    from: &str,
    to: &str,
    rewriter: &PathRewriter<P>,
) -> Mapping {
    section
        .iter()
        .map(|(key, value)| {
            let key = match key.as_str() {
                Some(k) if k == from => Value::String(to.to_string()),
                _ => key.clone(),
            };
            (key, normalize_files(value, rewriter))
        })
        .collect()
}

fn normalize_files<P: PathProbe>(value: &Value, rewriter: &PathRewriter<P>) -> Value {
    match value {
        Value::String(path) => Value::Sequence(vec![file_ref(path, rewriter)]),
        Value::Sequence(items) => Value::Sequence(
            items
                .iter()
                .map(|item| match item {
                    Value::String(path) => file_ref(path, rewriter),
                    other => other.clone(),
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

fn file_ref<P: PathProbe>(path: &str, rewriter: &PathRewriter<P>) -> Value {
    let mut mapping = Mapping::new();
    mapping.insert(
        Value::String(FILE_KEY.to_string()),
        Value::String(rewriter.rewrite(path)),
    );
    Value::Mapping(mapping)
}

/// Reshape a renamed section into a chapter: the caption's file becomes the
/// chapter file and the section's chapters become its sections.
fn restructure_section(section: &Mapping) -> miette::Result<TocChapter> {
    let caption = section.get(CAPTION_KEY).ok_or_else(|| CookbookError::Outline {
        message: format!("part entry without `{PART_KEY}`: {section:?}"),
    })?;
    let file = file_refs(caption)?
        .into_iter()
        .next()
        .ok_or_else(|| CookbookError::Outline {
            message: format!("part entry with an empty `{PART_KEY}`: {section:?}"),
        })?;

    match section.get(CHAPTERS_KEY) {
        Some(chapters) => {
            let sections = file_refs(chapters)?.into_iter().map(TocChapter::leaf).collect();
            Ok(TocChapter::branch(file, sections))
        }
        None => Ok(TocChapter::leaf(file)),
    }
}

fn file_refs(value: &Value) -> miette::Result<Vec<String>> {
    let Some(items) = value.as_sequence() else {
        return Err(CookbookError::Outline {
            message: format!("expected a list of files, found {value:?}"),
        }
        .into());
    };
    items
        .iter()
        .map(|item| {
            item.get(FILE_KEY)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| {
                    miette::Report::from(CookbookError::Outline {
                        message: format!("expected a file entry, found {item:?}"),
                    })
                })
        })
        .collect()
}

/// Collapse the renamed main sections into the single "Courses" part.
pub fn restructure_main(sections: &[Mapping]) -> miette::Result<TocPart> {
    let chapters = sections
        .iter()
        .map(restructure_section)
        .collect::<miette::Result<Vec<_>>>()?;
    Ok(TocPart {
        caption: MAIN_CAPTION.to_string(),
        chapters,
    })
}

/// Turn each renamed appendix section into its own top-level part.
pub fn restructure_appendix(sections: &[Mapping]) -> miette::Result<Vec<TocPart>> {
    sections
        .iter()
        .map(|section| {
            let chapter = restructure_section(section)?;
            let caption = appendix_caption(&chapter.file)?;
            Ok(TocPart {
                caption,
                chapters: vec![chapter],
            })
        })
        .collect()
}

/// `notebooks/templates/prereqs-templates` -> `Templates`.
fn appendix_caption(file: &str) -> miette::Result<String> {
    let segment = file.split('/').nth(1).ok_or_else(|| CookbookError::Outline {
        message: format!("cannot derive an appendix caption from `{file}`"),
    })?;
    Ok(capitalize(segment))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn rename_all<P: PathProbe>(sections: &[&Mapping], rewriter: &PathRewriter<P>) -> Vec<Mapping> {
    sections
        .iter()
        .map(|section| rename_keys(section, PART_KEY, CAPTION_KEY, rewriter))
        .collect()
}

pub fn transform_main<P: PathProbe>(
    book: &Book,
    rewriter: &PathRewriter<P>,
) -> miette::Result<TocPart> {
    restructure_main(&rename_all(&extract_main(book), rewriter))
}

pub fn transform_appendix<P: PathProbe>(
    book: &Book,
    rewriter: &PathRewriter<P>,
) -> miette::Result<Vec<TocPart>> {
    restructure_appendix(&rename_all(&extract_appendix(book), rewriter))
}

/// Render the complete Jupyter Book TOC for a Quarto project.
pub fn render_toc<P: PathProbe>(
    project: &QuartoProject,
    rewriter: &PathRewriter<P>,
) -> miette::Result<JupyterBookToc> {
    let root = rewriter.publish_root();

    let mut parts = vec![TocPart::single("Preamble", format!("{root}/how-to-cite"))];
    parts.push(transform_main(&project.book, rewriter)?);
    parts.extend(transform_appendix(&project.book, rewriter)?);
    parts.push(TocPart::single("References", format!("{root}/references")));

    tracing::info!("Rendered table of contents with {} parts", parts.len());
    Ok(JupyterBookToc::new(parts))
}
