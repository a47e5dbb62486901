//! Operation: render the Jupyter Book `_toc.yml` from `_quarto.yml`.

use std::path::PathBuf;

use cookbook_core::config::TocConfig;
use cookbook_core::outline::QuartoProject;
use cookbook_core::path::{FsProbe, PathRewriter};
use cookbook_util::errors::{CookbookError, CookbookResult};
use cookbook_util::fs::write_file;

/// Options for `cookbook toc`.
#[derive(Debug, Clone)]
pub struct TocOptions {
    /// Quarto project file holding the book outline.
    pub source: PathBuf,
    /// Directory receiving the table of contents.
    pub out_dir: PathBuf,
    /// File name of the table of contents inside `out_dir`.
    pub output_name: String,
    pub source_root: String,
    pub publish_root: String,
    /// Directory chapter paths are checked against before being rewritten.
    pub probe_base: PathBuf,
}

impl TocOptions {
    pub fn from_config(config: &TocConfig, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: config.source.clone(),
            out_dir: out_dir.into(),
            output_name: config.output.clone(),
            source_root: config.source_root.clone(),
            publish_root: config.publish_root.clone(),
            probe_base: PathBuf::from("."),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(&self.output_name)
    }
}

/// A rendered table of contents, not yet written.
pub struct RenderedToc {
    pub yaml: String,
    pub parts: usize,
}

/// Load the outline and render the table of contents in memory.
///
/// Chapter paths are checked for existence relative to `probe_base`, the
/// working directory unless overridden.
pub fn render(opts: &TocOptions) -> CookbookResult<RenderedToc> {
    let project = QuartoProject::from_path(&opts.source)?;
    let rewriter = PathRewriter::new(
        opts.source_root.as_str(),
        opts.publish_root.as_str(),
        FsProbe::new(&opts.probe_base),
    );

    let toc = cookbook_toc::render_toc(&project, &rewriter)?;
    let yaml = toc.to_yaml().map_err(|e| CookbookError::Generic {
        message: format!("Failed to serialize table of contents: {e}"),
    })?;

    Ok(RenderedToc {
        yaml,
        parts: toc.parts.len(),
    })
}

/// Write a rendered table of contents to its destination.
pub fn write(opts: &TocOptions, rendered: &RenderedToc) -> CookbookResult<PathBuf> {
    let path = opts.output_path();
    write_file(&path, &rendered.yaml).map_err(CookbookError::Io)?;
    tracing::info!("Wrote {} ({} parts)", path.display(), rendered.parts);
    Ok(path)
}

/// Render `_toc.yml` and write it into the output directory.
pub fn toc(opts: &TocOptions) -> CookbookResult<PathBuf> {
    let rendered = render(opts)?;
    write(opts, &rendered)
}
