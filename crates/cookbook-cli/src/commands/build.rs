//! Handler for `cookbook build`.

use std::path::{Path, PathBuf};

use miette::Result;

use cookbook_core::config::ProjectConfig;
use cookbook_ops::ops_build;
use cookbook_ops::ops_merge_envs::MergeOptions;
use cookbook_ops::ops_toc::TocOptions;

pub fn exec(
    config: &ProjectConfig,
    out: &Path,
    name: Option<String>,
    root: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let toc = TocOptions::from_config(&config.toc, out);
    let mut env = MergeOptions::from_config(&config.environment);
    env.name = name.unwrap_or_else(|| config.environment.build_name.clone());
    if let Some(root) = root {
        env.root = root;
    }

    let result = ops_build::build(out, &toc, &env)?;

    if verbose && !result.conflicts.is_empty() {
        eprintln!("{}", result.conflicts);
    }
    println!("Wrote {}", result.toc.display());
    println!("Wrote {}", result.environment.display());
    Ok(())
}
