//! Streaming reader for `.strings` resource files.
//!
//! Entries are produced lazily in file order. Nothing is cached: every call
//! re-opens the file, so a sequence can be restarted by reading again.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};

use crate::{
    error::Error,
    line::{self, Pair},
};

/// A resource file opened through a BOM-sniffing decoder.
pub type DecodedFile = BufReader<DecodeReaderBytes<File, Vec<u8>>>;

/// Opens `path` for line-oriented reading.
///
/// UTF-8 passes through, a UTF-8 or UTF-16 BOM is honoured and stripped.
pub fn open<P: AsRef<Path>>(path: P) -> Result<DecodedFile, Error> {
    let file = File::open(path).map_err(Error::Io)?;
    let decoder = DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(file);
    Ok(BufReader::new(decoder))
}

/// Every line of `path`, entry or not, without line terminators.
pub fn lines<P: AsRef<Path>>(path: P) -> Result<Lines<DecodedFile>, Error> {
    Ok(open(path)?.lines())
}

/// Lazy sequence of the entries of one resource file.
///
/// Lines that do not decode are skipped. An I/O failure is yielded once as
/// `Err` and ends the sequence.
#[derive(Debug)]
pub struct Entries<R = DecodedFile> {
    lines: Lines<R>,
    failed: bool,
}

impl<R: BufRead> Entries<R> {
    /// Reads entries from any buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Entries {
            lines: reader.lines(),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for Entries<R> {
    type Item = Result<Pair, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            match self.lines.next()? {
                Ok(text) => {
                    if let Some(pair) = line::decode(&text) {
                        return Some(Ok(pair));
                    }
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(Error::Io(e)));
                }
            }
        }
    }
}

/// Opens `path` and returns its entries in file order.
pub fn read_all<P: AsRef<Path>>(path: P) -> Result<Entries, Error> {
    Ok(Entries::from_reader(open(path)?))
}

/// Returns the value of the first entry whose key equals `key`.
///
/// Later duplicates are shadowed. An absent key is `Ok(None)`, not an error.
pub fn lookup<P: AsRef<Path>>(path: P, key: &str) -> Result<Option<String>, Error> {
    for entry in read_all(path)? {
        let pair = entry?;
        if pair.key == key {
            return Ok(Some(pair.value));
        }
    }
    Ok(None)
}

/// Entries of `path` with duplicate keys removed, keeping the first occurrence.
pub fn unique_entries<P: AsRef<Path>>(path: P) -> Result<Vec<Pair>, Error> {
    let mut seen = HashSet::new();
    let mut pairs = Vec::new();
    for entry in read_all(path)? {
        let pair = entry?;
        if seen.insert(pair.key.clone()) {
            pairs.push(pair);
        }
    }
    Ok(pairs)
}
