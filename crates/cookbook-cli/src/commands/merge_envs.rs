//! Handler for `cookbook merge-envs`.

use std::path::PathBuf;

use miette::Result;

use cookbook_core::config::ProjectConfig;
use cookbook_ops::ops_merge_envs::{self, MergeOptions};

pub fn exec(
    config: &ProjectConfig,
    out: Option<PathBuf>,
    name: Option<String>,
    root: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let mut opts = MergeOptions::from_config(&config.environment);
    if let Some(out) = out {
        opts.output = out;
    }
    if let Some(name) = name {
        opts.name = name;
    }
    if let Some(root) = root {
        opts.root = root;
    }

    let merged = ops_merge_envs::merge_envs(&opts)?;

    if verbose && !merged.conflicts.is_empty() {
        eprintln!("{}", merged.conflicts);
    }
    println!("Environments have been merged.");
    println!("{} file created successfully.", opts.output.display());
    Ok(())
}
