#![forbid(unsafe_code)]
//! Maintain Apple `Localizable.strings` files across every `.lproj` folder of a project.
//!
//! Read key/value pairs, find keys missing from non-base languages, and insert or
//! replace a key in every language file while leaving all other lines untouched.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lprojkit::{IdentityTranslator, Project, ProjectOptions};
//!
//! let project = Project::discover("MyApp", ProjectOptions::default())?;
//!
//! // Keys present in Base but missing elsewhere
//! for missing in project.diff_missing("Base")? {
//!     println!("{} is missing {}", missing.language, missing.key);
//! }
//!
//! // Insert or replace a key everywhere
//! let outcomes = project.set("Greeting", "Hello", &IdentityTranslator);
//! assert!(outcomes.iter().all(|o| o.is_committed()));
//! # Ok::<(), lprojkit::Error>(())
//! ```
//!
//! # File format
//!
//! One entry per line as `"key" = "value";`. Comments, blank lines and malformed
//! lines are ignored when reading and copied verbatim when editing. Multi-line
//! values and escaped quotes are not supported.

pub mod editor;
pub mod error;
pub mod line;
pub mod options;
pub mod project;
pub mod reader;
pub mod translator;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    editor::{UpsertAction, UpsertSummary, upsert},
    error::Error,
    line::{Pair, decode, encode},
    options::{Placement, ProjectOptions},
    project::{LanguageProject, Project},
    reader::{lookup, read_all},
    translator::{CommandTranslator, IdentityTranslator, Translator},
    types::{LocalizedText, SetOutcome, SetStatus},
};
