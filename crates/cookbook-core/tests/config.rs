use cookbook_core::config::ProjectConfig;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_project_config_defaults() {
    let config = ProjectConfig::default();
    assert_eq!(config.toc.source, PathBuf::from("_quarto.yml"));
    assert_eq!(config.toc.source_root, "chapters");
    assert_eq!(config.toc.publish_root, "notebooks");
    assert_eq!(config.toc.output, "_toc.yml");
    assert_eq!(config.environment.name, "eo-datascience-cookbook-dev");
    assert_eq!(config.environment.build_name, "eo-datascience-cookbook");
    assert_eq!(config.environment.channels, vec!["conda-forge".to_string()]);
    assert_eq!(config.environment.root, PathBuf::from("notebooks"));
    assert_eq!(config.environment.base, "environment.yml");
}

#[test]
fn test_project_config_empty_toml_uses_defaults() {
    let config = ProjectConfig::from_str("").unwrap();
    assert_eq!(config.toc.publish_root, "notebooks");
    assert_eq!(config.environment.channels, vec!["conda-forge".to_string()]);
}

#[test]
fn test_project_config_parse_from_toml() {
    let toml = r#"
[toc]
source = "book/_quarto.yml"
publish-root = "published"

[environment]
name = "course-env"
build-name = "course-release"
channels = ["conda-forge", "bioconda"]
"#;
    let config = ProjectConfig::from_str(toml).unwrap();
    assert_eq!(config.toc.source, PathBuf::from("book/_quarto.yml"));
    assert_eq!(config.toc.source_root, "chapters");
    assert_eq!(config.toc.publish_root, "published");
    assert_eq!(config.environment.name, "course-env");
    assert_eq!(config.environment.build_name, "course-release");
    assert_eq!(config.environment.channels.len(), 2);
    assert_eq!(config.environment.output, PathBuf::from("environment.yml"));
}

#[test]
fn test_project_config_invalid_toml_is_error() {
    let err = ProjectConfig::from_str("[toc\nsource = 1").unwrap_err();
    assert!(err.to_string().contains("Config error"), "got: {err}");
}

#[test]
fn test_project_config_load_missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = ProjectConfig::load(tmp.path()).unwrap();
    assert_eq!(config.environment.name, "eo-datascience-cookbook-dev");
    assert_eq!(config.environment.build_name, "eo-datascience-cookbook");
}

#[test]
fn test_project_config_load_from_dir() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("cookbook.toml"),
        "[environment]\nname = \"from-file\"\n",
    )
    .unwrap();
    let config = ProjectConfig::load(tmp.path()).unwrap();
    assert_eq!(config.environment.name, "from-file");
}
