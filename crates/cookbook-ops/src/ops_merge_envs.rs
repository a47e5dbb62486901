//! Operation: merge every course environment into one conda environment.

use std::path::PathBuf;

use cookbook_core::config::EnvironmentConfig;
use cookbook_resolver::conflict::ConflictReport;
use cookbook_resolver::merge;
use cookbook_resolver::resolver::resolve_versions;
use cookbook_util::errors::{CookbookError, CookbookResult};
use cookbook_util::fs::write_file;

/// Options for `cookbook merge-envs`.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Directory scanned recursively for `*.yml` manifests.
    pub root: PathBuf,
    /// Manifest next to `root` that is always merged in.
    pub base: String,
    /// Name of the merged environment.
    pub name: String,
    pub channels: Vec<String>,
    /// Destination of the merged environment file.
    pub output: PathBuf,
}

impl MergeOptions {
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self {
            root: config.root.clone(),
            base: config.base.clone(),
            name: config.name.clone(),
            channels: config.channels.clone(),
            output: config.output.clone(),
        }
    }
}

/// A merged environment, not yet written.
pub struct MergedEnvironment {
    pub yaml: String,
    pub manifests: usize,
    pub dependencies: usize,
    pub pip_dependencies: usize,
    pub conflicts: ConflictReport,
}

/// Collect, resolve and serialize the merged environment in memory.
pub fn merge(opts: &MergeOptions) -> CookbookResult<MergedEnvironment> {
    let files = merge::collect_manifest_files(&opts.root, &opts.base)?;
    let (regular, pip) = merge::aggregate_env_dependencies(&files)?;

    let regular = resolve_versions(&regular);
    let pip = resolve_versions(&pip);

    let env = merge::create_master_environment(&opts.name, &opts.channels, &regular, &pip);
    let yaml = env.to_yaml().map_err(|e| CookbookError::Generic {
        message: format!("Failed to serialize environment: {e}"),
    })?;

    let mut conflicts = regular.conflicts;
    conflicts.extend(pip.conflicts);
    if !conflicts.is_empty() {
        tracing::info!("{conflicts}");
    }

    Ok(MergedEnvironment {
        yaml,
        manifests: files.len(),
        dependencies: regular.dependencies.len(),
        pip_dependencies: pip.dependencies.len(),
        conflicts,
    })
}

/// Write a merged environment to `path`.
pub fn write(path: &std::path::Path, merged: &MergedEnvironment) -> CookbookResult<()> {
    write_file(path, &merged.yaml).map_err(CookbookError::Io)?;
    tracing::info!(
        "Wrote {} ({} dependencies, {} pip dependencies from {} manifests)",
        path.display(),
        merged.dependencies,
        merged.pip_dependencies,
        merged.manifests
    );
    Ok(())
}

/// Merge all environments and write the result to `opts.output`.
pub fn merge_envs(opts: &MergeOptions) -> CookbookResult<MergedEnvironment> {
    let merged = merge(opts)?;
    write(&opts.output, &merged)?;
    Ok(merged)
}
