use lprojkit::{CommandTranslator, IdentityTranslator, Project, SetOutcome, Translator};

use crate::formats::OutputFormat;

/// Rendered report of a project-wide set.
#[derive(Debug, Clone)]
pub struct SetReport {
    pub rendered: String,
    pub outcomes: Vec<SetOutcome>,
}

impl SetReport {
    /// Whether every language was committed.
    pub fn all_committed(&self) -> bool {
        self.outcomes.iter().all(SetOutcome::is_committed)
    }
}

/// Pick the translator: an external command when given, otherwise identity.
pub fn translator_from_command(command: Option<&str>) -> Result<Box<dyn Translator>, String> {
    match command {
        Some(command_line) => CommandTranslator::parse(command_line)
            .map(|t| Box::new(t) as Box<dyn Translator>)
            .map_err(|e| e.to_string()),
        None => Ok(Box::new(IdentityTranslator)),
    }
}

/// Set `key` to `value` in every language of the project.
pub fn run_set_command(
    project: &Project,
    key: &str,
    value: &str,
    translator: &dyn Translator,
) -> Result<SetReport, String> {
    let outcomes = project.set(key, value, translator);
    let failed = outcomes.iter().filter(|o| !o.is_committed()).count();
    if failed > 0 {
        tracing::warn!(
            "{} of {} language(s) were not updated",
            failed,
            outcomes.len()
        );
    }

    Ok(SetReport {
        rendered: OutputFormat::Json.render(&outcomes)?,
        outcomes,
    })
}
