//! Appmanifest (.acf) key-value extraction.
//!
//! Manifests are Valve's single-level quoted key-value layout, one pair per
//! line:
//!
//! ```text
//! "AppState"
//! {
//!     "appid"      "440"
//!     "name"       "Team Fortress 2"
//! }
//! ```
//!
//! This is deliberately not a general VDF parser. It looks up individual
//! keys line by line and assumes no nesting, no escaped quotes.

use std::path::{Path, PathBuf};

use crate::models::AppRecord;

/// Why a single manifest file failed to parse.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("{}: no \"{key}\" entry found", .path.display())]
    KeyMissing { key: &'static str, path: PathBuf },

    #[error("{}: \"{key}\" line carries no quoted value", .path.display())]
    ValueMissing { key: &'static str, path: PathBuf },
}

/// Outcome of looking up one key in manifest text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLookup<'a> {
    /// A line carried the quoted key followed by a quoted value.
    Value(&'a str),
    /// No line in the text starts with the quoted key.
    Absent,
    /// A line carried the quoted key but no value group followed it
    /// (truncated line, or the value's opening quote is missing).
    Truncated,
}

/// Extract the value for `key` from manifest text.
///
/// A candidate line is one whose trimmed form starts with `"key"`. The first
/// candidate decides the outcome — well-formed or not — and later duplicates
/// are ignored. The value runs from the quote after the key's closing quote
/// up to the next quote, or to end of line if the closing quote is missing.
pub fn extract_quoted_value<'a>(text: &'a str, key: &str) -> KeyLookup<'a> {
    for line in text.lines() {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('"') else {
            continue;
        };
        let Some(rest) = rest.strip_prefix(key) else {
            continue;
        };
        let Some(rest) = rest.strip_prefix('"') else {
            continue;
        };

        // First match wins, even when malformed.
        return match rest.find('"') {
            Some(open) => {
                let value = &rest[open + 1..];
                let value = value.find('"').map_or(value, |end| &value[..end]);
                KeyLookup::Value(value)
            }
            None => KeyLookup::Truncated,
        };
    }

    KeyLookup::Absent
}

/// Build an [`AppRecord`] from one manifest's text.
///
/// Both keys are looked up independently; their line order in the file does
/// not matter. Either one missing fails the whole file — no partial record.
pub fn parse_manifest(path: &Path, text: &str) -> Result<AppRecord, ManifestError> {
    let app_id = require_key(text, "appid", path)?;
    let name = require_key(text, "name", path)?;

    Ok(AppRecord {
        app_id: app_id.to_string(),
        name: name.to_string(),
    })
}

fn require_key<'a>(
    text: &'a str,
    key: &'static str,
    path: &Path,
) -> Result<&'a str, ManifestError> {
    match extract_quoted_value(text, key) {
        KeyLookup::Value(value) => Ok(value),
        KeyLookup::Absent => Err(ManifestError::KeyMissing {
            key,
            path: path.to_path_buf(),
        }),
        KeyLookup::Truncated => Err(ManifestError::ValueMissing {
            key,
            path: path.to_path_buf(),
        }),
    }
}

/// Read a manifest file as text, dropping undecodable byte sequences.
///
/// Best-effort decoding is policy, not a fault: manifests are UTF-8-ish and
/// a stray bad byte must not fail the file.
pub fn read_manifest_text(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(decode_dropping_invalid(&bytes))
}

/// Decode UTF-8, skipping over invalid byte sequences.
///
/// Unlike `from_utf8_lossy` this inserts no replacement characters, so a
/// genuine U+FFFD already encoded in the input survives.
fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                break;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                if let Ok(s) = std::str::from_utf8(valid) {
                    text.push_str(s);
                }
                // error_len is None only when the input ends mid-sequence.
                let skip = e.error_len().unwrap_or(after.len());
                rest = &after[skip..];
            }
        }
    }

    text
}
