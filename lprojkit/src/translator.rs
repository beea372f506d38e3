//! The translation seam.
//!
//! Translation backends live outside this crate. Anything implementing
//! [`Translator`] can be handed to [`Project::set`](crate::project::Project::set).

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use crate::error::Error;

/// Translates English text into a target language.
pub trait Translator {
    /// Returns `text` translated into `target_language` (an `.lproj` code such as `es`).
    fn translate(&self, text: &str, target_language: &str) -> Result<String, Error>;
}

impl<F> Translator for F
where
    F: Fn(&str, &str) -> Result<String, Error>,
{
    fn translate(&self, text: &str, target_language: &str) -> Result<String, Error> {
        self(text, target_language)
    }
}

/// Returns every text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str, _target_language: &str) -> Result<String, Error> {
        Ok(text.to_string())
    }
}

/// Delegates to an external program.
///
/// The program is invoked as `<program> [args...] <target_language>`, receives
/// the text on stdin and must print the translation on stdout. Surrounding
/// whitespace of the output is trimmed.
#[derive(Debug, Clone)]
pub struct CommandTranslator {
    program: String,
    args: Vec<String>,
}

impl CommandTranslator {
    pub fn new(program: impl Into<String>) -> Self {
        CommandTranslator {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Builds a translator from a shell-like `program arg1 arg2` string.
    ///
    /// Splitting is on whitespace only; quoting is not interpreted.
    pub fn parse(command_line: &str) -> Result<Self, Error> {
        let mut parts = command_line.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| Error::Config("translator command is empty".to_string()))?;
        Ok(CommandTranslator::new(program).with_args(parts))
    }
}

impl Translator for CommandTranslator {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, Error> {
        let spawn_error = |e: io::Error| {
            Error::translation_error(
                target_language,
                format!("failed to run `{}`", self.program),
                Some(Box::new(e)),
            )
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(target_language)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // Feed stdin from its own thread so a program that streams its output
        // cannot block on a full stdout pipe while we are still writing.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = text.as_bytes().to_vec();
            thread::spawn(move || match stdin.write_all(&input) {
                // A program that exits without reading its input is judged by its status below.
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                result => result,
            })
        });

        let output = child.wait_with_output().map_err(spawn_error)?;
        if let Some(writer) = writer {
            writer
                .join()
                .map_err(|_| {
                    Error::translation_error(
                        target_language,
                        format!("stdin writer for `{}` panicked", self.program),
                        None,
                    )
                })?
                .map_err(spawn_error)?;
        }
        if !output.status.success() {
            return Err(Error::translation_error(
                target_language,
                format!(
                    "`{}` exited with {}: {}",
                    self.program,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
                None,
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_translator() {
        let translated = IdentityTranslator.translate("Hello", "es").unwrap();
        assert_eq!(translated, "Hello");
    }

    #[test]
    fn test_closure_translator() {
        let translator = |text: &str, lang: &str| Ok::<_, Error>(format!("{text} ({lang})"));
        assert_eq!(translator.translate("Hello", "de").unwrap(), "Hello (de)");
    }

    #[test]
    fn test_parse_command_line() {
        let translator = CommandTranslator::parse("trans -b --from en").unwrap();
        assert_eq!(translator.program, "trans");
        assert_eq!(translator.args, vec!["-b", "--from", "en"]);
    }

    #[test]
    fn test_parse_empty_command_line() {
        assert!(matches!(
            CommandTranslator::parse("   "),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_missing_program_is_translation_error() {
        let translator = CommandTranslator::new("lprojkit-no-such-translator-binary");
        let err = translator.translate("Hello", "fr").unwrap_err();
        match err {
            Error::Translation { language, .. } => assert_eq!(language, "fr"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_command_translator_reads_stdout() {
        // `sh -c 'cat; echo " [$0]"' <lang>` echoes the text followed by the language.
        let translator = CommandTranslator::new("sh").with_args(["-c", "cat; echo \" [$0]\""]);
        let translated = translator.translate("Hello", "ja").unwrap();
        assert_eq!(translated, "Hello [ja]");
    }

    #[cfg(unix)]
    #[test]
    fn test_command_translator_non_zero_exit() {
        let translator = CommandTranslator::new("sh").with_args(["-c", "echo boom >&2; exit 3"]);
        let err = translator.translate("Hello", "ja").unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_translator_streams_large_text() {
        let text = "x".repeat(1_000_000);
        let translator = CommandTranslator::new("sh").with_args(["-c", "cat"]);

        let (tx, rx) = std::sync::mpsc::channel();
        let input = text.clone();
        thread::spawn(move || {
            let _ = tx.send(translator.translate(&input, "es"));
        });

        let translated = rx
            .recv_timeout(std::time::Duration::from_secs(30))
            .expect("translator did not finish")
            .unwrap();
        assert_eq!(translated.len(), text.len());
    }
}
