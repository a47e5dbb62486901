//! Handler for `cookbook toc`.

use std::path::{Path, PathBuf};

use miette::Result;

use cookbook_core::config::ProjectConfig;
use cookbook_ops::ops_toc::{self, TocOptions};

pub fn exec(config: &ProjectConfig, out: &Path, source: Option<PathBuf>) -> Result<()> {
    let mut opts = TocOptions::from_config(&config.toc, out);
    if let Some(source) = source {
        opts.source = source;
    }

    let path = ops_toc::toc(&opts)?;
    println!("Wrote {}", path.display());
    Ok(())
}
