use lprojkit::Project;

use crate::formats::OutputFormat;
use crate::validation::validate_language_codes;

/// Look `key` up in the requested languages and render the records as JSON.
pub fn run_get_command(project: &Project, key: &str, languages: &[String]) -> Result<String, String> {
    validate_language_codes(languages)?;

    let records = project
        .get(key, languages)
        .map_err(|e| format!("Failed to read {}: {}", key, e))?;

    let unknown: Vec<&str> = languages
        .iter()
        .map(String::as_str)
        .filter(|code| project.get_by_language(code).is_none())
        .collect();
    if !unknown.is_empty() {
        tracing::warn!("No language project for: {}", unknown.join(", "));
    }

    OutputFormat::Json.render(&records)
}
