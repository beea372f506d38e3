//! Records produced by project-wide operations.
//! They serialize to the JSON shapes printed by the command line tools.

use serde::{Deserialize, Serialize};

/// One key looked up (or found missing) in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub key: String,
    /// The text, or `None` when the key is absent from that language.
    pub text: Option<String>,
    pub language: String,
}

impl LocalizedText {
    pub fn new(key: impl Into<String>, text: Option<String>, language: impl Into<String>) -> Self {
        LocalizedText {
            key: key.into(),
            text,
            language: language.into(),
        }
    }
}

/// Final state of one language during a project-wide set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetStatus {
    Committed,
    Failed,
}

/// Per-language report of [`Project::set`](crate::project::Project::set).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetOutcome {
    pub language: String,
    pub key: String,
    /// The line written to the resource file, when staging got that far.
    pub line: Option<String>,
    pub status: SetStatus,
    /// Why this language failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub error: Option<String>,
}

impl SetOutcome {
    pub fn committed(language: &str, key: &str, line: String) -> Self {
        SetOutcome {
            language: language.to_string(),
            key: key.to_string(),
            line: Some(line),
            status: SetStatus::Committed,
            error: None,
        }
    }

    pub fn failed(language: &str, key: &str, line: Option<String>, error: impl ToString) -> Self {
        SetOutcome {
            language: language.to_string(),
            key: key.to_string(),
            line,
            status: SetStatus::Failed,
            error: Some(error.to_string()),
        }
    }

    pub fn is_committed(&self) -> bool {
        self.status == SetStatus::Committed
    }
}
