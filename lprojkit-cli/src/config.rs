//! Project configuration: CLI flags over `.lprojkit.toml` over built-in defaults.

use std::path::{Path, PathBuf};

use lprojkit::{Placement, ProjectOptions};
use serde::Deserialize;

/// Name of the optional configuration file at the project root.
pub const CONFIG_FILE_NAME: &str = ".lprojkit.toml";

/// Contents of a configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub scratch_dir: Option<PathBuf>,
    pub base_language: Option<String>,
    pub placement: Option<Placement>,
    pub resources_dir: Option<String>,
    pub resource_file_name: Option<String>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub scratch_dir: Option<PathBuf>,
    pub base_language: Option<String>,
    pub placement: Option<Placement>,
}

/// Parses a configuration file.
pub fn load_from_path(path: &Path) -> Result<FileConfig, String> {
    tracing::debug!("Loading configuration from: {:?}", path);
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&content).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
}

/// Loads `<project_dir>/.lprojkit.toml` if it exists.
pub fn load_from_project(project_dir: &Path) -> Result<Option<FileConfig>, String> {
    let path = project_dir.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        tracing::debug!("Configuration file not found: {:?}", path);
        return Ok(None);
    }
    load_from_path(&path).map(Some)
}

/// Loads the explicit config file when given, otherwise the project's own.
pub fn load(explicit: Option<&Path>, project_dir: &Path) -> Result<Option<FileConfig>, String> {
    match explicit {
        Some(path) => load_from_path(path).map(Some),
        None => load_from_project(project_dir),
    }
}

/// Merges configuration layers into the options used by the library.
pub fn resolve_options(file: Option<FileConfig>, overrides: Overrides) -> ProjectOptions {
    let file = file.unwrap_or_default();
    let defaults = ProjectOptions::default();

    ProjectOptions {
        scratch_dir: overrides
            .scratch_dir
            .or(file.scratch_dir)
            .unwrap_or(defaults.scratch_dir),
        base_language: overrides
            .base_language
            .or(file.base_language)
            .unwrap_or(defaults.base_language),
        placement: overrides
            .placement
            .or(file.placement)
            .unwrap_or(defaults.placement),
        resources_dir: file.resources_dir.unwrap_or(defaults.resources_dir),
        resource_file_name: file
            .resource_file_name
            .unwrap_or(defaults.resource_file_name),
    }
}
