use serde::{Deserialize, Serialize};

/// Jupyter Book format tag written into every table of contents.
pub const TOC_FORMAT: &str = "jb-book";

/// Root page of the published book.
pub const TOC_ROOT: &str = "README";

/// A Jupyter Book `_toc.yml` document.
///
/// Fields are declared in sorted order so the emitted YAML matches a
/// key-sorted dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JupyterBookToc {
    pub format: String,
    pub parts: Vec<TocPart>,
    pub root: String,
}

/// A captioned group of chapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocPart {
    pub caption: String,
    pub chapters: Vec<TocChapter>,
}

/// A chapter: a leaf `{file}` or a branch `{file, sections}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocChapter {
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<TocChapter>>,
}

impl TocChapter {
    pub fn leaf(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            sections: None,
        }
    }

    pub fn branch(file: impl Into<String>, sections: Vec<TocChapter>) -> Self {
        Self {
            file: file.into(),
            sections: Some(sections),
        }
    }
}

impl TocPart {
    /// A part holding a single leaf chapter, used for the fixed preamble and
    /// references pages.
    pub fn single(caption: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            chapters: vec![TocChapter::leaf(file)],
        }
    }
}

impl JupyterBookToc {
    pub fn new(parts: Vec<TocPart>) -> Self {
        Self {
            format: TOC_FORMAT.to_string(),
            parts,
            root: TOC_ROOT.to_string(),
        }
    }

    /// Serialize the table of contents to block-style YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
