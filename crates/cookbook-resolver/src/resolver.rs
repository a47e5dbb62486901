//! Deduplication of dependency specifiers with highest-version-wins.
//!
//! A specifier is split on `=`: the first piece is the package name and, if
//! there is more than one piece, the last piece is its version. So
//! `numpy`, `numpy=1.26` and `numpy==1.26` all name `numpy`, the latter two
//! at version `1.26`. A name that carried a version anywhere resolves to
//! `name=<highest version>`, even if it also appeared bare.

use std::collections::{BTreeMap, BTreeSet};

use crate::conflict::{ConflictReport, VersionConflict};
use crate::version::PackageVersion;

/// Name and optional pinned version of a specifier.
pub fn split_specifier(spec: &str) -> (&str, Option<&str>) {
    match (spec.split_once('='), spec.rsplit_once('=')) {
        (Some((name, _)), Some((_, version))) => (name, Some(version)),
        _ => (spec, None),
    }
}

/// Every package name, and every version each name was pinned to.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeparatedDependencies {
    pub names: BTreeSet<String>,
    pub versions: BTreeMap<String, Vec<String>>,
}

/// Result of resolving one dependency list.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Resolution {
    pub dependencies: BTreeSet<String>,
    pub conflicts: ConflictReport,
}

pub fn separate_dependencies<S: AsRef<str>>(specs: &[S]) -> SeparatedDependencies {
    let mut separated = SeparatedDependencies::default();
    for spec in specs {
        let (name, version) = split_specifier(spec.as_ref());
        separated.names.insert(name.to_string());
        if let Some(version) = version {
            separated
                .versions
                .entry(name.to_string())
                .or_default()
                .push(version.to_string());
        }
    }
    separated
}

/// Pick the highest version for every pinned name; unpinned names stay bare.
pub fn resolve_dependency_versions(separated: &SeparatedDependencies) -> Resolution {
    let mut resolution = Resolution::default();

    for name in &separated.names {
        let Some(versions) = separated.versions.get(name) else {
            resolution.dependencies.insert(name.clone());
            continue;
        };
        let Some(latest) = highest_version(versions) else {
            resolution.dependencies.insert(name.clone());
            continue;
        };

        let distinct = distinct_in_order(versions);
        if distinct.len() > 1 {
            tracing::debug!("{name}: {} -> {latest}", distinct.join(", "));
            resolution.conflicts.add(VersionConflict {
                name: name.clone(),
                requested: distinct,
                resolved: latest.to_string(),
            });
        }
        resolution.dependencies.insert(format!("{name}={latest}"));
    }

    resolution
}

/// Deduplicate `specs` and resolve each name to its highest pinned version.
pub fn resolve_versions<S: AsRef<str>>(specs: &[S]) -> Resolution {
    resolve_dependency_versions(&separate_dependencies(specs))
}

/// Highest version in `versions`; among equal versions the first one wins.
fn highest_version(versions: &[String]) -> Option<&str> {
    let mut best: Option<(PackageVersion, &str)> = None;
    for raw in versions {
        let parsed = PackageVersion::parse(raw);
        let is_higher = best.as_ref().map_or(true, |(current, _)| parsed > *current);
        if is_higher {
            best = Some((parsed, raw.as_str()));
        }
    }
    best.map(|(_, raw)| raw)
}

fn distinct_in_order(versions: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    versions
        .iter()
        .filter(|v| seen.insert(v.as_str()))
        .cloned()
        .collect()
}
