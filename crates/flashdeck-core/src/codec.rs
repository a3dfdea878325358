//! Deck file encoding and decoding.
//!
//! One card per line:
//!
//! ```text
//! ("term":"definition"):(mistakes)
//! ```
//!
//! There is no escaping, so terms and definitions containing `"` cannot be
//! stored.

use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::deck::Card;
use crate::error::CodecError;
use crate::session::{CardRecord, Session};

static CARD_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\("([^"]+)":"([^"]+)"\):\((\d+)\)$"#).unwrap());

/// Encode records, one line each, in the order given.
pub fn encode(records: &[CardRecord]) -> String {
    let mut out = String::new();
    for record in records {
        if record.card.term.contains('"') || record.card.definition.contains('"') {
            tracing::warn!(
                term = %record.card.term,
                "card contains a double quote and will not import cleanly"
            );
        }
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "(\"{}\":\"{}\"):({})",
            record.card.term, record.card.definition, record.mistakes
        );
    }
    out
}

/// Parse a single non-empty line.
pub fn decode_line(line: &str) -> Option<CardRecord> {
    let caps = CARD_LINE.captures(line)?;
    let mistakes = caps[3].parse::<u32>().ok()?;
    Some(CardRecord {
        card: Card::new(&caps[1], &caps[2]),
        mistakes,
    })
}

/// Parse a whole deck file. Blank lines are skipped; any other line that
/// does not parse rejects the whole content.
pub fn decode(content: &str) -> Result<Vec<CardRecord>, CodecError> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            decode_line(line).ok_or_else(|| CodecError::Malformed {
                line_no,
                line: line.to_string(),
            })
        })
        .collect()
}

/// Read `path` and merge its cards into `session`.
///
/// Nothing is applied unless every line parses. Returns the number of cards
/// loaded.
pub fn import_file(path: &Path, session: &mut Session) -> Result<usize, CodecError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CodecError::FileNotFound(path.to_path_buf()),
        _ => CodecError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let records = decode(&content)?;
    let loaded = session.apply_records(records);
    tracing::info!(path = %path.display(), loaded, "deck imported");
    Ok(loaded)
}

/// Write every card in `session` to `path`, replacing the file.
///
/// Returns the number of cards saved.
pub fn export_file(path: &Path, session: &Session) -> Result<usize, CodecError> {
    let records = session.records();
    std::fs::write(path, encode(&records)).map_err(|e| CodecError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), saved = records.len(), "deck exported");
    Ok(records.len())
}
