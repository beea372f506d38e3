//! Ad-hoc translation requests for `lproj-translate`.
//!
//! Requests come either from command line flags or from records on stdin; both
//! are validated into the same [`TranslateCommand`].

use lprojkit::{LocalizedText, Translator};
use serde::Deserialize;

use crate::formats::OutputFormat;

/// A validated translation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateCommand {
    pub key: String,
    pub text: String,
    pub language: String,
}

/// A record as found on stdin. Fields are checked by [`TranslateCommand::try_from`].
///
/// Extra fields such as `format` are accepted and ignored, so the output of
/// `lprojkit --diff-keys` can be fed in as is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCommand {
    pub key: Option<String>,
    pub text: Option<String>,
    pub language: Option<String>,
}

impl TryFrom<RawCommand> for TranslateCommand {
    type Error = String;

    fn try_from(raw: RawCommand) -> Result<Self, Self::Error> {
        let missing = [
            ("key", raw.key.is_none()),
            ("text", raw.text.is_none()),
            ("language", raw.language.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>();

        match (raw.key, raw.text, raw.language) {
            (Some(key), Some(text), Some(language)) if !key.is_empty() && !language.is_empty() => {
                Ok(TranslateCommand {
                    key,
                    text,
                    language,
                })
            }
            (key, text, language) if missing.is_empty() => Err(format!(
                "Invalid data: empty field in Key {} Text {} Language {}",
                key.unwrap_or_default(),
                text.unwrap_or_default(),
                language.unwrap_or_default()
            )),
            _ => Err(format!("Invalid data: missing {}", missing.join(", "))),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Many(Vec<RawCommand>),
    One(RawCommand),
}

/// Where translation requests come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSource {
    /// `--key`, `--text` and `--dest-lang` flags; one request per language.
    Args {
        key: String,
        text: String,
        languages: Vec<String>,
    },
    /// A single record or a list of records read from stdin.
    Stdin { input: String, format: OutputFormat },
}

impl CommandSource {
    /// Uses the flags when all three are present and non-empty.
    pub fn from_args(
        key: Option<String>,
        text: Option<String>,
        languages: Vec<String>,
    ) -> Option<Self> {
        match (key, text) {
            (Some(key), Some(text)) if !languages.is_empty() => Some(CommandSource::Args {
                key,
                text,
                languages,
            }),
            _ => None,
        }
    }

    pub fn from_stdin(input: String, format: OutputFormat) -> Self {
        CommandSource::Stdin { input, format }
    }

    /// Validates the source into canonical commands.
    pub fn into_commands(self) -> Result<Vec<TranslateCommand>, String> {
        match self {
            CommandSource::Args {
                key,
                text,
                languages,
            } => languages
                .into_iter()
                .map(|language| {
                    TranslateCommand::try_from(RawCommand {
                        key: Some(key.clone()),
                        text: Some(text.clone()),
                        language: Some(language),
                    })
                })
                .collect(),
            CommandSource::Stdin { input, format } => {
                let raws = match format.parse::<Payload>(&input)? {
                    Payload::Many(raws) => raws,
                    Payload::One(raw) => vec![raw],
                };
                raws.into_iter().map(TranslateCommand::try_from).collect()
            }
        }
    }
}

/// Translates every command, stopping at the first backend failure.
pub fn translate_all(
    commands: &[TranslateCommand],
    translator: &dyn Translator,
) -> Result<Vec<LocalizedText>, String> {
    commands
        .iter()
        .map(|command| -> Result<LocalizedText, String> {
            let text = translator
                .translate(&command.text, &command.language)
                .map_err(|e| e.to_string())?;
            Ok(LocalizedText::new(
                command.key.clone(),
                Some(text),
                command.language.clone(),
            ))
        })
        .collect()
}
