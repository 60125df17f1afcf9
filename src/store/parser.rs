//! INI text parsing
//!
//! Lines are classified one at a time. Comments start at the first `#`,
//! blanks are spaces and tabs only, and a key/value line splits at the first
//! `=`. A section header without a closing `]` takes the rest of the line
//! as its name.

use std::io::BufRead;
use std::str::FromStr;

use log::debug;

use super::{put, IniStore};
use crate::error::IniError;
use crate::utils::{strip_after, trim_blanks, trim_blanks_end, trim_blanks_start};

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Section(&'a str),
    Pair(&'a str, &'a str),
    Malformed,
}

/// Drop the `\n` or `\r\n` ending left by `read_until`
fn strip_line_ending(raw: &str) -> &str {
    let raw = raw.strip_suffix('\n').unwrap_or(raw);
    raw.strip_suffix('\r').unwrap_or(raw)
}

fn classify(raw: &str) -> Line<'_> {
    let line = trim_blanks_end(strip_after(trim_blanks(raw), '#'));
    if line.is_empty() {
        return Line::Blank;
    }

    if let Some(rest) = line.strip_prefix('[') {
        return Line::Section(trim_blanks(strip_after(rest, ']')));
    }

    match line.split_once('=') {
        Some((key, value)) => Line::Pair(trim_blanks_end(key), trim_blanks_start(value)),
        None => Line::Malformed,
    }
}

impl IniStore {
    /// Create a store from INI text read from `reader`
    pub fn from_reader<R: BufRead>(reader: R, ignore_errors: bool) -> Result<Self, IniError> {
        let mut store = IniStore::new();
        store.read_more(reader, ignore_errors)?;
        Ok(store)
    }

    /// Read INI text, merging it into the existing content
    ///
    /// Keys already present are overwritten by keys of the same name in the
    /// input, everything else is kept. A line that is neither a header nor a
    /// `key = value` pair fails with [`IniError::Format`] carrying its 1-based
    /// line number; with `ignore_errors` such lines are skipped silently.
    ///
    /// Bytes that aren't valid UTF-8 are replaced with U+FFFD, so files in a
    /// legacy encoding still load. Reading from a file this way does not link
    /// it to the store.
    pub fn read_more<R: BufRead>(&mut self, mut reader: R, ignore_errors: bool) -> Result<(), IniError> {
        let mut section = String::new();
        let mut buf = Vec::new();
        let mut line = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line += 1;

            let decoded = String::from_utf8_lossy(&buf);
            let raw = strip_line_ending(&decoded);

            match classify(raw) {
                Line::Blank => {}
                Line::Section(name) => {
                    section = name.to_string();
                    self.section_mut(&section);
                }
                Line::Pair(key, value) => {
                    put(self.section_mut(&section), key, value.to_string());
                }
                Line::Malformed if ignore_errors => {
                    debug!("Skipping malformed ini line {}: {:?}", line, raw);
                }
                Line::Malformed => {
                    return Err(IniError::Format {
                        line,
                        reason: format!("expected `key = value`, found {:?}", trim_blanks(raw)),
                    });
                }
            }
        }

        Ok(())
    }

    /// Clear the content, then read it from `reader` like [`IniStore::read_more`]
    pub fn read<R: BufRead>(&mut self, reader: R, ignore_errors: bool) -> Result<(), IniError> {
        self.data.clear();
        self.read_more(reader, ignore_errors)
    }
}

impl FromStr for IniStore {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IniStore::from_reader(s.as_bytes(), false)
    }
}
