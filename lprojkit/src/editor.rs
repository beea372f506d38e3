//! Insert-or-replace of a single key in a `.strings` file.
//!
//! The source file is streamed into a staging file; the caller decides when
//! to copy the staging file over the original. Lines that are not entries are
//! copied verbatim, and so are entries for every other key.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{
    error::Error,
    line::{self, Pair},
    options::Placement,
    reader,
};

/// What [`upsert`] did with the target key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertAction {
    /// The first line holding the key was rewritten in place.
    Replaced,
    /// The key was absent and was inserted before an existing entry.
    Inserted,
    /// The key was absent and was written after the last line.
    Appended,
}

/// Result of a staged upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertSummary {
    /// The rendered line that was written.
    pub line: String,
    pub action: UpsertAction,
    /// Number of later lines with the same key that were dropped.
    pub dropped_duplicates: usize,
}

/// Writes `source` to `staging` with `key` set to `value`.
///
/// If the key already exists its first occurrence is replaced and any further
/// occurrences are dropped. Otherwise the new line is placed according to
/// `placement`, or appended when no position qualifies. Every line written to
/// `staging` ends with `\n`.
pub fn upsert<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    staging: Q,
    key: &str,
    value: &str,
    placement: Placement,
) -> Result<UpsertSummary, Error> {
    let source = source.as_ref();
    let staging = staging.as_ref();

    if key.is_empty() {
        return Err(Error::invalid_entry("key must not be empty"));
    }
    if source == staging {
        return Err(Error::invalid_entry(format!(
            "staging path must differ from {}",
            source.display()
        )));
    }

    let exists = reader::lookup(source, key)?.is_some();
    let new_line = line::encode(key, value);

    let lines = reader::lines(source)?;
    let mut out = BufWriter::new(File::create(staging)?);

    let mut action: Option<UpsertAction> = None;
    let mut dropped_duplicates = 0;
    let mut prev: Option<Pair> = None;

    for text in lines {
        let text = text?;
        let Some(pair) = line::decode(&text) else {
            writeln!(out, "{}", text)?;
            continue;
        };

        if pair.key == key {
            if action.is_none() {
                writeln!(out, "{}", new_line)?;
                action = Some(UpsertAction::Replaced);
            } else {
                dropped_duplicates += 1;
            }
            prev = Some(pair);
            continue;
        }

        if !exists && action.is_none() && belongs_before(placement, key, prev.as_ref(), &pair) {
            writeln!(out, "{}", new_line)?;
            action = Some(UpsertAction::Inserted);
        }

        writeln!(out, "{}", text)?;
        prev = Some(pair);
    }

    // Empty file, or the key sorts after every entry.
    let action = match action {
        Some(action) => action,
        None => {
            writeln!(out, "{}", new_line)?;
            UpsertAction::Appended
        }
    };
    out.flush()?;

    Ok(UpsertSummary {
        line: new_line,
        action,
        dropped_duplicates,
    })
}

/// Whether a new `key` goes right before `current`, given the entry seen before it.
fn belongs_before(placement: Placement, key: &str, prev: Option<&Pair>, current: &Pair) -> bool {
    match placement {
        Placement::FirstChar => {
            let (Some(k), Some(p), Some(c)) = (
                key.chars().next(),
                prev.and_then(Pair::first_char),
                current.first_char(),
            ) else {
                return false;
            };
            p <= k && k <= c
        }
        Placement::FullKey => {
            prev.is_none_or(|p| p.key.as_str() <= key) && key <= current.key.as_str()
        }
    }
}
