use lprojkit::Project;

use crate::formats::OutputFormat;

/// Report base-language keys missing from every other language, as JSON.
///
/// The output is a list of `{key, text, language}` records and can be piped
/// into `lproj-translate` unchanged.
pub fn run_diff_keys_command(project: &Project) -> Result<String, String> {
    let base = &project.options().base_language;
    let missing = project
        .diff_missing(base)
        .map_err(|e| format!("Failed to diff keys: {}", e))?;

    tracing::info!(
        "{} missing key(s) across {} language(s)",
        missing.len(),
        project.len().saturating_sub(1)
    );

    OutputFormat::Json.render(&missing)
}
