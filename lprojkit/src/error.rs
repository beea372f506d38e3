//! All error types for the lprojkit crate.
//!
//! These are returned from every fallible operation (discovery, reading, staging,
//! committing and translating).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{} is an invalid Xcode project directory", .0.display())]
    InvalidProject(PathBuf),

    #[error("base language `{0}` not found in project")]
    MissingBaseLanguage(String),

    #[error("invalid entry: {0}")]
    InvalidEntry(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("translation to `{language}` failed: {message}")]
    Translation {
        language: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("failed to commit {}: {source}", .path.display())]
    Commit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new translation error with optional source error
    pub fn translation_error(
        language: impl Into<String>,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Translation {
            language: language.into(),
            message: message.into(),
            source,
        }
    }

    /// Creates a new invalid entry error
    pub fn invalid_entry(message: impl Into<String>) -> Self {
        Error::InvalidEntry(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_invalid_project_error() {
        let error = Error::InvalidProject(PathBuf::from("/tmp/NotAProject"));
        assert_eq!(
            error.to_string(),
            "/tmp/NotAProject is an invalid Xcode project directory"
        );
    }

    #[test]
    fn test_missing_base_language_error() {
        let error = Error::MissingBaseLanguage("Base".to_string());
        assert_eq!(error.to_string(), "base language `Base` not found in project");
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::from(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_translation_error_with_source() {
        let source_error = Box::new(io::Error::other("backend down"));
        let error = Error::translation_error("es", "request failed", Some(source_error));
        assert_eq!(
            error.to_string(),
            "translation to `es` failed: request failed"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_translation_error_without_source() {
        let error = Error::translation_error("de", "empty response", None);
        assert!(error.source().is_none());
    }

    #[test]
    fn test_commit_error_display() {
        let error = Error::Commit {
            path: PathBuf::from("Resources/es.lproj/Localizable.strings"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        let display = error.to_string();
        assert!(display.contains("failed to commit"));
        assert!(display.contains("es.lproj"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::invalid_entry("empty key");
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidEntry"));
        assert!(debug.contains("empty key"));
    }
}
