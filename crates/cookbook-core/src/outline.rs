//! The Quarto book outline read from `_quarto.yml`.
//!
//! Only the `book` section is modelled; every other key of the Quarto project
//! file (`project`, `format`, `bibliography`, ...) is ignored.

use serde::{Deserialize, Serialize};
use std::path::Path;

use cookbook_util::errors::CookbookError;

/// The parsed representation of a `_quarto.yml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuartoProject {
    pub book: Book,
}

/// The `book` section: main chapters and appendices.
///
/// Both lists are required; an outline without them cannot be published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub chapters: Vec<BookEntry>,
    pub appendices: Vec<BookEntry>,
}

/// One entry of a chapter or appendix list.
///
/// Parts are kept as raw mappings so the key renaming step can operate on
/// whatever keys the author wrote (`part`, `chapters`, `title`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookEntry {
    File(String),
    Part(serde_yaml::Mapping),
}

impl BookEntry {
    pub fn as_part(&self) -> Option<&serde_yaml::Mapping> {
        match self {
            BookEntry::Part(mapping) => Some(mapping),
            BookEntry::File(_) => None,
        }
    }
}

impl QuartoProject {
    /// Load and parse a `_quarto.yml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CookbookError::Outline {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a `_quarto.yml` from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        serde_yaml::from_str(content).map_err(|e| {
            CookbookError::Outline {
                message: format!("Failed to parse book outline: {e}"),
            }
            .into()
        })
    }
}
