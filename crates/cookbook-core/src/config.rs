use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use cookbook_util::errors::CookbookError;

/// Project configuration loaded from `cookbook.toml`.
///
/// Every field has a default, so a missing file behaves exactly like an
/// empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub toc: TocConfig,

    #[serde(default)]
    pub environment: EnvironmentConfig,
}

/// Table-of-contents settings from `[toc]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocConfig {
    #[serde(default = "default_toc_source")]
    pub source: PathBuf,
    #[serde(default = "default_source_root", rename = "source-root")]
    pub source_root: String,
    #[serde(default = "default_publish_root", rename = "publish-root")]
    pub publish_root: String,
    #[serde(default = "default_toc_output")]
    pub output: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            source: default_toc_source(),
            source_root: default_source_root(),
            publish_root: default_publish_root(),
            output: default_toc_output(),
        }
    }
}

fn default_toc_source() -> PathBuf {
    PathBuf::from("_quarto.yml")
}

fn default_source_root() -> String {
    "chapters".to_string()
}

fn default_publish_root() -> String {
    "notebooks".to_string()
}

fn default_toc_output() -> String {
    "_toc.yml".to_string()
}

/// Environment merge settings from `[environment]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default = "default_env_name")]
    pub name: String,
    /// Environment name used by `cookbook build`.
    #[serde(default = "default_build_env_name", rename = "build-name")]
    pub build_name: String,
    #[serde(default = "default_channels")]
    pub channels: Vec<String>,
    #[serde(default = "default_env_root")]
    pub root: PathBuf,
    #[serde(default = "default_env_file")]
    pub base: String,
    #[serde(default = "default_env_output")]
    pub output: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            name: default_env_name(),
            build_name: default_build_env_name(),
            channels: default_channels(),
            root: default_env_root(),
            base: default_env_file(),
            output: default_env_output(),
        }
    }
}

fn default_env_name() -> String {
    "eo-datascience-cookbook-dev".to_string()
}

fn default_build_env_name() -> String {
    "eo-datascience-cookbook".to_string()
}

fn default_channels() -> Vec<String> {
    vec!["conda-forge".to_string()]
}

fn default_env_root() -> PathBuf {
    PathBuf::from("notebooks")
}

fn default_env_file() -> String {
    "environment.yml".to_string()
}

fn default_env_output() -> PathBuf {
    PathBuf::from(default_env_file())
}

impl ProjectConfig {
    /// Load `cookbook.toml` from `project_dir`, or return defaults if the file doesn't exist.
    pub fn load(project_dir: &Path) -> miette::Result<Self> {
        let path = project_dir.join(crate::CONFIG_FILE);
        if path.is_file() {
            let content = std::fs::read_to_string(&path).map_err(|e| CookbookError::Config {
                message: format!("Failed to read {}: {e}", path.display()),
            })?;
            Self::from_str(&content)
        } else {
            tracing::debug!("No {} in {}, using defaults", crate::CONFIG_FILE, project_dir.display());
            Ok(Self::default())
        }
    }

    /// Parse a `cookbook.toml` from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            CookbookError::Config {
                message: format!("Failed to parse {}: {e}", crate::CONFIG_FILE),
            }
            .into()
        })
    }
}
