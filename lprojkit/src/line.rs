//! Single-line codec for the Apple `.strings` entry shape.
//!
//! A line holds an entry iff it looks like `"key" = "value";`. Anything else
//! (blank lines, comments, malformed lines) decodes to `None` and is carried
//! through untouched by the editor.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // strings pair pattern: "key" = "value";
    static ref PAIR_REGEX: Regex =
        Regex::new(r#"^\s*"([^"]*)"\s*=\s*"([^"]*)"\s*;\s*$"#).unwrap();
}

/// A single key-value pair decoded from one line of a `.strings` file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// The key for this localization entry.
    pub key: String,
    /// The value for this localization entry, without the surrounding quotes.
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Pair {
            key: key.into(),
            value: value.into(),
        }
    }

    /// First character of the key, if the key is not empty.
    pub fn first_char(&self) -> Option<char> {
        self.key.chars().next()
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" = \"{}\";", self.key, self.value)
    }
}

/// Parses one line into a [`Pair`].
///
/// Embedded quotes are not unescaped: a value containing `"` does not match
/// and the line is treated as malformed.
pub fn decode(line: &str) -> Option<Pair> {
    let caps = PAIR_REGEX.captures(line)?;
    Some(Pair {
        key: caps[1].to_string(),
        value: caps[2].to_string(),
    })
}

/// Renders a key and value as a `.strings` line, without a line terminator.
pub fn encode(key: &str, value: &str) -> String {
    format!("\"{}\" = \"{}\";", key, value)
}
