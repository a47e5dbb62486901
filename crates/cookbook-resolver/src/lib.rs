//! Dependency resolution engine: collects conda environment manifests,
//! separates pip requirements, deduplicates package names and keeps the
//! highest pinned version of every package.

pub mod conflict;
pub mod merge;
pub mod resolver;
pub mod version;
