//! Conda environment manifests (`environment.yml`).

use serde::{Deserialize, Serialize};
use std::path::Path;

use cookbook_util::errors::{CookbookError, CookbookResult};

/// Key of the nested pip dependency list inside `dependencies`.
pub const PIP_KEY: &str = "pip";

/// The parsed representation of a conda `environment.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub channels: Vec<String>,

    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,
}

/// One item of a `dependencies` list: a specifier such as `numpy=1.26` or a
/// nested mapping such as `{pip: [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencyEntry {
    Spec(String),
    Table(serde_yaml::Mapping),
}

impl DependencyEntry {
    /// Build the `{pip: [...]}` entry from already ordered specifiers.
    pub fn pip(specs: Vec<String>) -> Self {
        let mut table = serde_yaml::Mapping::new();
        table.insert(
            serde_yaml::Value::String(PIP_KEY.to_string()),
            serde_yaml::Value::Sequence(specs.into_iter().map(serde_yaml::Value::String).collect()),
        );
        DependencyEntry::Table(table)
    }
}

impl EnvironmentManifest {
    /// Serialize to block-style YAML with list items indented under their key,
    /// the layout conda users expect in `environment.yml`.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self).map(|s| indent_list_items(&s))
    }
}

/// The part of an input manifest that merging reads.
///
/// Every other key (`name`, `channels`, ...) is ignored whatever its shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManifestDependencies {
    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,
}

impl ManifestDependencies {
    /// Load the dependency list of an environment file.
    ///
    /// An empty document is treated as a manifest without dependencies.
    pub fn from_path(path: &Path) -> CookbookResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CookbookError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content).map_err(|e| {
            CookbookError::Manifest {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    pub fn from_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value)
    }
}

/// Prefix every line whose first non-blank character is `-` with two spaces.
pub fn indent_list_items(yaml: &str) -> String {
    let mut out = String::with_capacity(yaml.len());
    for line in yaml.lines() {
        if line.trim_start().starts_with('-') {
            out.push_str("  ");
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}
