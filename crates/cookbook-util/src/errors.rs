use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all cookbook operations.
#[derive(Debug, Error, Diagnostic)]
pub enum CookbookError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed book outline (e.g. `_quarto.yml`).
    #[error("Outline error: {message}")]
    #[diagnostic(help("The outline needs a `book` section with `chapters` and `appendices` lists"))]
    Outline { message: String },

    /// Unreadable or malformed environment manifest.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check the environment file for YAML syntax errors"))]
    Manifest { message: String },

    /// Invalid project configuration (`cookbook.toml`).
    #[error("Config error: {message}")]
    #[diagnostic(help("Check your cookbook.toml for syntax errors"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type CookbookResult<T> = miette::Result<T>;
