//! Collection of per-chapter environment manifests and assembly of the
//! merged environment.

use std::path::{Path, PathBuf};

use cookbook_core::environment::{
    DependencyEntry, EnvironmentManifest, ManifestDependencies, PIP_KEY,
};
use cookbook_util::errors::{CookbookError, CookbookResult};
use cookbook_util::fs::collect_files_with_extension;

use crate::resolver::Resolution;

/// Extension of the manifests picked up below the notebooks root.
pub const MANIFEST_EXTENSION: &str = "yml";

/// All manifests below `root`, followed by the `base` manifest that sits next
/// to `root`.
pub fn collect_manifest_files(root: &Path, base: &str) -> CookbookResult<Vec<PathBuf>> {
    let mut files =
        collect_files_with_extension(root, MANIFEST_EXTENSION).map_err(CookbookError::Io)?;
    let sibling = root.parent().unwrap_or(Path::new("")).join(base);
    files.push(sibling);
    tracing::debug!("Collected {} environment manifests", files.len());
    Ok(files)
}

/// Split a dependency list into plain specifiers and the contents of any
/// `pip` sub-lists. Other nested mappings are ignored.
pub fn extract_sub_dependencies(deps: &[DependencyEntry]) -> (Vec<String>, Vec<String>) {
    let mut regular = Vec::new();
    let mut pip = Vec::new();
    for dep in deps {
        match dep {
            DependencyEntry::Spec(spec) => regular.push(spec.clone()),
            DependencyEntry::Table(table) => {
                let Some(nested) = table.get(PIP_KEY) else {
                    continue;
                };
                let Some(items) = nested.as_sequence() else {
                    tracing::warn!("Ignoring `{PIP_KEY}` entry that is not a list: {nested:?}");
                    continue;
                };
                for item in items {
                    match item.as_str() {
                        Some(spec) => pip.push(spec.to_string()),
                        None => tracing::warn!("Ignoring non-string pip dependency {item:?}"),
                    }
                }
            }
        }
    }
    (regular, pip)
}

/// Read every manifest and concatenate their regular and pip dependencies.
///
/// Only the `dependencies` list of each manifest is read. Any unreadable or
/// malformed manifest aborts the whole aggregation.
pub fn aggregate_env_dependencies(
    files: &[PathBuf],
) -> CookbookResult<(Vec<String>, Vec<String>)> {
    let mut regular = Vec::new();
    let mut pip = Vec::new();
    for file in files {
        let manifest = ManifestDependencies::from_path(file)?;
        let (deps, sub_deps) = extract_sub_dependencies(&manifest.dependencies);
        tracing::debug!(
            "{}: {} dependencies, {} pip dependencies",
            file.display(),
            deps.len(),
            sub_deps.len()
        );
        regular.extend(deps);
        pip.extend(sub_deps);
    }
    Ok((regular, pip))
}

/// Put resolved dependencies into the conda environment layout.
///
/// Dependencies are sorted; a trailing `{pip: [...]}` entry is added only
/// when there are pip dependencies.
pub fn create_master_environment(
    name: &str,
    channels: &[String],
    dependencies: &Resolution,
    pip_dependencies: &Resolution,
) -> EnvironmentManifest {
    let mut deps: Vec<DependencyEntry> = dependencies
        .dependencies
        .iter()
        .cloned()
        .map(DependencyEntry::Spec)
        .collect();
    if !pip_dependencies.dependencies.is_empty() {
        deps.push(DependencyEntry::pip(
            pip_dependencies.dependencies.iter().cloned().collect(),
        ));
    }
    EnvironmentManifest {
        name: Some(name.to_string()),
        channels: channels.to_vec(),
        dependencies: deps,
    }
}
