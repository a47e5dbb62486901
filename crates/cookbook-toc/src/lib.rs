//! Table-of-contents transformation: turns the nested Quarto book outline
//! (parts containing chapters, plus appendices) into the flat Jupyter Book
//! layout of captioned parts, chapters and sections.

pub mod transform;

pub use transform::{render_toc, transform_appendix, transform_main};
