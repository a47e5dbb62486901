//! Operation: produce the publishable book layout in one go.

use std::path::{Path, PathBuf};

use cookbook_util::errors::CookbookResult;

use crate::ops_merge_envs::{self, MergeOptions};
use crate::ops_toc::{self, TocOptions};

/// Result of a build.
pub struct BuildResult {
    pub toc: PathBuf,
    pub environment: PathBuf,
    pub conflicts: cookbook_resolver::conflict::ConflictReport,
}

/// Render the table of contents and the merged environment into `out_dir`.
///
/// Both documents are rendered before either is written, so a failure in
/// one leaves `out_dir` untouched.
pub fn build(
    out_dir: &Path,
    toc: &TocOptions,
    env: &MergeOptions,
) -> CookbookResult<BuildResult> {
    let toc = TocOptions {
        out_dir: out_dir.to_path_buf(),
        ..toc.clone()
    };
    let env_output = out_dir.join(&env.base);

    let rendered_toc = ops_toc::render(&toc)?;
    let merged = ops_merge_envs::merge(env)?;

    let toc_path = ops_toc::write(&toc, &rendered_toc)?;
    ops_merge_envs::write(&env_output, &merged)?;

    Ok(BuildResult {
        toc: toc_path,
        environment: env_output,
        conflicts: merged.conflicts,
    })
}
