use std::path::Path;

/// Message printed when `--set` is not given a `key=value` pair.
pub const KEY_VALUE_HINT: &str = "Key/value pair must be in the form key=value";

/// Validate the project directory exists and is a directory
pub fn validate_project_dir(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Project directory does not exist: {}", path.display()));
    }

    if !path.is_dir() {
        return Err(format!("Path is not a directory: {}", path.display()));
    }

    Ok(())
}

/// Split a `key=value` argument at the first `=`.
///
/// The value may itself contain `=` and may be empty; the key may not.
pub fn parse_key_value(pair: &str) -> Result<(String, String), String> {
    let (key, value) = pair.split_once('=').ok_or_else(|| KEY_VALUE_HINT.to_string())?;
    if key.is_empty() {
        return Err(KEY_VALUE_HINT.to_string());
    }
    Ok((key.to_string(), value.to_string()))
}

/// Validate `.lproj` language codes such as `Base`, `es` or `zh-Hans`.
pub fn validate_language_codes(codes: &[String]) -> Result<(), String> {
    if codes.is_empty() {
        return Err("At least one language code is required".to_string());
    }

    for code in codes {
        if code.is_empty() {
            return Err("Language code cannot be empty".to_string());
        }
        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(format!(
                "Invalid language code format: {}. Expected the name of a .lproj folder, e.g. Base, es, zh-Hans",
                code
            ));
        }
    }

    Ok(())
}
