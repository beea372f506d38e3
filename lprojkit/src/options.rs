//! Knobs shared by discovery and editing.

use std::{fmt::Display, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Name of the resource file inside every `.lproj` folder.
pub const LOCALIZABLE_FILENAME: &str = "Localizable.strings";
/// Directory suffix of a language folder.
pub const PROJECT_EXTENSION: &str = ".lproj";
/// Directory under the project root holding the `.lproj` folders.
pub const RESOURCES_DIR: &str = "Resources";
/// Language code of the reference language.
pub const BASE_LANGUAGE: &str = "Base";

/// Where a brand new key lands inside an existing file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Compare only the first character of the new key with the first
    /// characters of the previous and current entry keys.
    #[default]
    FirstChar,
    /// Compare the whole key with the previous and current entry keys.
    FullKey,
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Placement::FirstChar => write!(f, "first-char"),
            Placement::FullKey => write!(f, "full-key"),
        }
    }
}

impl FromStr for Placement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "first-char" => Ok(Placement::FirstChar),
            "full-key" => Ok(Placement::FullKey),
            other => Err(Error::Config(format!(
                "unknown placement `{}`, expected `first-char` or `full-key`",
                other
            ))),
        }
    }
}

/// Settings for a [`Project`](crate::project::Project).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectOptions {
    /// Directory holding the `<code>.Localizable.strings` staging files.
    pub scratch_dir: PathBuf,
    /// Language code treated as the source of truth.
    pub base_language: String,
    /// Insertion strategy for keys that are not present yet.
    pub placement: Placement,
    /// Directory under the project root that contains the `.lproj` folders.
    pub resources_dir: String,
    /// Resource file name inside each `.lproj` folder.
    pub resource_file_name: String,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        ProjectOptions {
            scratch_dir: std::env::temp_dir().join("translations"),
            base_language: BASE_LANGUAGE.to_string(),
            placement: Placement::default(),
            resources_dir: RESOURCES_DIR.to_string(),
            resource_file_name: LOCALIZABLE_FILENAME.to_string(),
        }
    }
}

impl ProjectOptions {
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    pub fn with_base_language(mut self, code: impl Into<String>) -> Self {
        self.base_language = code.into();
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}
