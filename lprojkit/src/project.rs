//! Language projects and the project-wide aggregator.
//!
//! A [`Project`] is every `Resources/<code>.lproj/Localizable.strings` under a
//! root directory. Reads and writes are delegated to the reader and editor for
//! each language in turn.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::{
    editor::{self, UpsertSummary},
    error::Error,
    line::Pair,
    options::{LOCALIZABLE_FILENAME, PROJECT_EXTENSION, Placement, ProjectOptions},
    reader::{self, Entries},
    translator::Translator,
    types::{LocalizedText, SetOutcome},
};

/// One language's resource file plus its staging location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProject {
    path: PathBuf,
    language_code: String,
    scratch_dir: PathBuf,
}

impl LanguageProject {
    /// Creates a language project, creating `scratch_dir` if it does not exist.
    pub fn new(
        path: impl Into<PathBuf>,
        language_code: impl Into<String>,
        scratch_dir: impl Into<PathBuf>,
    ) -> Result<Self, Error> {
        let scratch_dir = scratch_dir.into();
        fs::create_dir_all(&scratch_dir)?;
        Ok(LanguageProject {
            path: path.into(),
            language_code: language_code.into(),
            scratch_dir,
        })
    }

    /// Path of the resource file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// `<scratch_dir>/<code>.Localizable.strings`
    pub fn staging_path(&self) -> PathBuf {
        self.scratch_dir
            .join(format!("{}.{}", self.language_code, LOCALIZABLE_FILENAME))
    }

    /// Value of `key` in this language, `None` when absent.
    pub fn get(&self, key: &str) -> Result<Option<String>, Error> {
        reader::lookup(&self.path, key)
    }

    /// Entries of the resource file, in file order.
    pub fn entries(&self) -> Result<Entries, Error> {
        reader::read_all(&self.path)
    }

    /// Entries with duplicate keys removed, first occurrence kept.
    pub fn unique_entries(&self) -> Result<Vec<Pair>, Error> {
        reader::unique_entries(&self.path)
    }

    /// Writes the resource file with `key` set to `value` into the staging file.
    pub fn stage(&self, key: &str, value: &str, placement: Placement) -> Result<UpsertSummary, Error> {
        editor::upsert(&self.path, self.staging_path(), key, value, placement)
    }

    /// Copies the staging file over the resource file.
    pub fn commit(&self) -> Result<(), Error> {
        fs::copy(self.staging_path(), &self.path)
            .map(|_| ())
            .map_err(|source| Error::Commit {
                path: self.path.clone(),
                source,
            })
    }
}

/// Language code of the nearest `.lproj` component of `path`.
///
/// ```
/// use std::path::Path;
/// use lprojkit::project::language_code_from_path;
///
/// let code = language_code_from_path(Path::new("App/Resources/de.lproj/Localizable.strings"));
/// assert_eq!(code.as_deref(), Some("de"));
/// ```
pub fn language_code_from_path(path: &Path) -> Option<String> {
    path.components().rev().find_map(|c| {
        let component = c.as_os_str().to_str()?;
        component
            .strip_suffix(PROJECT_EXTENSION)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
    })
}

/// Every language project found under one root directory.
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    options: ProjectOptions,
    languages: Vec<LanguageProject>,
    span: tracing::Span,
}

impl Project {
    /// Finds `<root>/<resources_dir>/*.lproj/<resource_file_name>` files.
    ///
    /// Fails with [`Error::InvalidProject`] when none is found.
    pub fn discover<P: AsRef<Path>>(root: P, options: ProjectOptions) -> Result<Self, Error> {
        let root = root.as_ref();
        let pattern = format!(
            "{}/{}/*{}",
            Pattern::escape(&root.to_string_lossy()),
            Pattern::escape(&options.resources_dir),
            PROJECT_EXTENSION
        );
        tracing::debug!(%pattern, "Discovering language projects");

        let mut seen = HashSet::new();
        let mut languages = Vec::new();
        for entry in glob::glob(&pattern)? {
            let dir = match entry {
                Ok(dir) => dir,
                Err(e) => {
                    tracing::warn!("Skipping unreadable path {:?}: {}", e.path(), e);
                    continue;
                }
            };
            let resource = dir.join(&options.resource_file_name);
            if !resource.is_file() {
                continue;
            }
            let Some(code) = language_code_from_path(&dir) else {
                continue;
            };
            if !seen.insert(code.clone()) {
                continue;
            }
            languages.push(LanguageProject::new(
                resource,
                code,
                options.scratch_dir.clone(),
            )?);
        }

        if languages.is_empty() {
            return Err(Error::InvalidProject(root.to_path_buf()));
        }

        let span = tracing::info_span!("project", root = %root.display());
        Ok(Project {
            root: root.to_path_buf(),
            options,
            languages,
            span,
        })
    }

    /// Replaces the span under which project operations are logged.
    pub fn with_span(mut self, span: tracing::Span) -> Self {
        self.span = span;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> &ProjectOptions {
        &self.options
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageProject> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Language codes in discovery order.
    pub fn languages(&self) -> Vec<&str> {
        self.languages.iter().map(LanguageProject::language_code).collect()
    }

    /// Finds a language project by its code, if present.
    pub fn get_by_language(&self, code: &str) -> Option<&LanguageProject> {
        self.languages.iter().find(|l| l.language_code == code)
    }

    /// Looks `key` up in every project whose code is in `languages`.
    ///
    /// A missing key yields a record with `text: None`.
    pub fn get<S: AsRef<str>>(&self, key: &str, languages: &[S]) -> Result<Vec<LocalizedText>, Error> {
        let _guard = self.span.enter();
        self.languages
            .iter()
            .filter(|l| languages.iter().any(|code| code.as_ref() == l.language_code))
            .map(|l| -> Result<LocalizedText, Error> {
                Ok(LocalizedText::new(key, l.get(key)?, l.language_code.clone()))
            })
            .collect()
    }

    /// Keys of the base language that are absent from each other language.
    ///
    /// Records carry the base text and the code of the language missing it.
    /// Keys present with a different value are not reported.
    pub fn diff_missing(&self, base_code: &str) -> Result<Vec<LocalizedText>, Error> {
        let _guard = self.span.enter();
        let base = self
            .get_by_language(base_code)
            .ok_or_else(|| Error::MissingBaseLanguage(base_code.to_string()))?;
        let base_entries = base.unique_entries()?;

        let mut missing = Vec::new();
        for lproj in self.languages.iter().filter(|l| l.language_code != base_code) {
            let present: HashSet<String> = lproj
                .unique_entries()?
                .into_iter()
                .map(|pair| pair.key)
                .collect();
            let before = missing.len();
            missing.extend(
                base_entries
                    .iter()
                    .filter(|pair| !present.contains(&pair.key))
                    .map(|pair| {
                        LocalizedText::new(
                            pair.key.clone(),
                            Some(pair.value.clone()),
                            lproj.language_code.clone(),
                        )
                    }),
            );
            tracing::debug!(
                language = %lproj.language_code,
                missing = missing.len() - before,
                "Compared against {}",
                base_code
            );
        }
        Ok(missing)
    }

    /// Sets `key` in every language, translating `value` for non-base languages.
    ///
    /// Every language is attempted. A failure in one language is logged and
    /// reported in its [`SetOutcome`]; the remaining languages still run.
    pub fn set<T: Translator + ?Sized>(&self, key: &str, value: &str, translator: &T) -> Vec<SetOutcome> {
        let _guard = self.span.enter();
        self.languages
            .iter()
            .map(|lproj| self.set_one(lproj, key, value, translator))
            .collect()
    }

    fn set_one<T: Translator + ?Sized>(
        &self,
        lproj: &LanguageProject,
        key: &str,
        value: &str,
        translator: &T,
    ) -> SetOutcome {
        let code = lproj.language_code();

        let text = if code == self.options.base_language {
            value.to_string()
        } else {
            match translator.translate(value, code) {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(language = code, "Error setting {} to {}: {}", key, value, e);
                    return SetOutcome::failed(code, key, None, e);
                }
            }
        };

        let summary = match lproj.stage(key, &text, self.options.placement) {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!(language = code, "Error setting {} to {}: {}", key, value, e);
                return SetOutcome::failed(code, key, None, e);
            }
        };
        if summary.dropped_duplicates > 0 {
            tracing::warn!(
                language = code,
                "Dropped {} duplicate line(s) for {}",
                summary.dropped_duplicates,
                key
            );
        }

        match lproj.commit() {
            Ok(()) => {
                tracing::info!(
                    language = code,
                    action = ?summary.action,
                    "Set {}={} in file {}",
                    key,
                    text,
                    lproj.path().display()
                );
                SetOutcome::committed(code, key, summary.line)
            }
            Err(e) => {
                tracing::error!(language = code, "Error committing {}: {}", lproj.path().display(), e);
                SetOutcome::failed(code, key, Some(summary.line), e)
            }
        }
    }
}

impl<'a> IntoIterator for &'a Project {
    type Item = &'a LanguageProject;
    type IntoIter = std::slice::Iter<'a, LanguageProject>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.iter()
    }
}
