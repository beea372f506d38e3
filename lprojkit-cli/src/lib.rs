//! CLI library for testing purposes

pub mod config;
pub mod diff;
pub mod edit;
pub mod formats;
pub mod logging;
pub mod translate;
pub mod validation;
pub mod view;

pub use formats::OutputFormat;
pub use lprojkit::Project;
pub use translate::{CommandSource, TranslateCommand};
