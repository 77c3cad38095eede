//! # Password Wordlist Loading
//!
//! Reads a candidate password list from a file (or stdin via `-`) and
//! normalizes every encoding artifact up front: byte-order marks, embedded
//! NUL bytes left over from mis-decoded UTF-16, and surrounding
//! whitespace. The prober downstream only ever sees trimmed, non-empty
//! entries.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::WordlistError;

/// Loads and cleans a password list. `-` reads from stdin.
///
/// Returns [`WordlistError::Empty`] when no usable entry survives
/// cleanup, so callers never hand the prober an empty list by accident.
pub fn load_passwords(path: &str) -> Result<Vec<String>, WordlistError> {
    let raw: Vec<u8> = if path == "-" {
        let mut buf: Vec<u8> = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        let file = Path::new(path);
        if !file.exists() {
            return Err(WordlistError::NotFound(path.to_string()));
        }
        std::fs::read(file)?
    };

    let text: String = decode_bytes(&raw);
    let cleaned: Vec<String> = text
        .lines()
        .map(clean_entry)
        .filter(|entry| !entry.is_empty())
        .collect();

    if cleaned.is_empty() {
        return Err(WordlistError::Empty);
    }

    debug!("loaded {} passwords from {path}", cleaned.len());
    Ok(cleaned)
}

/// Decodes raw wordlist bytes, honoring UTF-16 byte-order marks. Anything
/// without a BOM is treated as UTF-8 with invalid sequences replaced,
/// which also covers latin-1 files well enough for line splitting.
fn decode_bytes(raw: &[u8]) -> String {
    match raw {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        _ => String::from_utf8_lossy(raw).into_owned(),
    }
}

fn decode_utf16(raw: &[u8], combine: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = raw
        .chunks_exact(2)
        .map(|pair| combine([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Strips BOM artifacts, embedded NUL bytes and surrounding whitespace
/// from a single entry.
pub fn clean_entry(entry: &str) -> String {
    entry
        .trim_start_matches('\u{feff}')
        .replace("ï»¿", "")
        .replace('\0', "")
        .trim()
        .to_string()
}
