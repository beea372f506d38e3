use std::fmt::Display;
use std::str::FromStr;

use serde::{Serialize, de::DeserializeOwned};

/// Serialization formats for records read from stdin and printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    ///
    /// ```json
    /// [
    ///   {
    ///     "key": "Greeting",
    ///     "text": "Hola",
    ///     "language": "es"
    ///   }
    /// ]
    /// ```
    #[default]
    Json,

    /// YAML.
    ///
    /// ```yaml
    /// - key: Greeting
    ///   text: Hola
    ///   language: es
    /// ```
    Yaml,
}

impl OutputFormat {
    /// Serialize `value` in this format.
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, String> {
        match self {
            OutputFormat::Json => serde_json::to_string_pretty(value)
                .map_err(|e| format!("Failed to serialize JSON: {}", e)),
            OutputFormat::Yaml => {
                serde_yaml::to_string(value).map_err(|e| format!("Failed to serialize YAML: {}", e))
            }
        }
    }

    /// Parse `input` in this format.
    pub fn parse<T: DeserializeOwned>(&self, input: &str) -> Result<T, String> {
        match self {
            OutputFormat::Json => {
                serde_json::from_str(input).map_err(|e| format!("Error parsing JSON input: {}", e))
            }
            OutputFormat::Yaml => {
                serde_yaml::from_str(input).map_err(|e| format!("Error parsing YAML input: {}", e))
            }
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Yaml => write!(f, "YAML"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    /// Format names are case sensitive: `JSON` or `YAML`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JSON" => Ok(OutputFormat::Json),
            "YAML" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unexpected output format {}. Supported formats: JSON, YAML",
                s
            )),
        }
    }
}
