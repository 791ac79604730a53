//! JSON Lines lexicon parsing
//!
//! Each non-blank line holds one record such as
//! `{"word": "crane", "score": 1, "frequency": 100.0}`. Records that cannot be
//! used are skipped with a warning so a few bad lines never sink a whole load.
//!
//! `score` is the usage rank and must be a whole number; `3` and `3.0` are both
//! accepted, `2.5` is not.

use super::LexiconEntry;
use crate::core::{Word, WordError};
use serde::Deserialize;
use std::io::{self, BufRead};
use thiserror::Error;

/// Why a single record was rejected
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("score must be a whole number, got {0}")]
    InvalidScore(serde_json::Number),
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    word: Option<String>,
    #[serde(alias = "usage_rank")]
    score: Option<serde_json::Number>,
    frequency: Option<f64>,
}

/// Parse one JSON record into an entry
///
/// # Errors
/// Returns `RecordError` if the line is not a JSON object with a valid
/// `word`, a whole-number `score` and a numeric `frequency`.
///
/// # Examples
/// ```
/// use wordle_opener::lexicon::loader::parse_record;
///
/// let entry = parse_record(r#"{"word": "Crane", "score": 3, "frequency": 12.5}"#).unwrap();
/// assert_eq!(entry.word.text(), "crane");
/// assert_eq!(entry.usage_rank, 3);
///
/// assert!(parse_record(r#"{"word": "crane", "score": 3}"#).is_err());
/// ```
pub fn parse_record(line: &str) -> Result<LexiconEntry, RecordError> {
    let raw: RawRecord = serde_json::from_str(line)?;

    let word = raw.word.ok_or(RecordError::MissingField("word"))?;
    let score = raw.score.ok_or(RecordError::MissingField("score"))?;
    let usage_rank = whole_number(&score).ok_or(RecordError::InvalidScore(score))?;
    let frequency = raw
        .frequency
        .ok_or(RecordError::MissingField("frequency"))?;

    Ok(LexiconEntry::new(Word::new(word)?, usage_rank, frequency))
}

fn whole_number(number: &serde_json::Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Read every record from `reader`, returning the usable entries and the number skipped
///
/// Blank lines are ignored and do not count as skipped.
///
/// # Errors
/// Returns an I/O error only if the underlying reader fails.
pub fn read_records<R: BufRead>(reader: R) -> io::Result<(Vec<LexiconEntry>, usize)> {
    let mut entries = Vec::new();
    let mut skipped = 0;

    for (i, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let Ok(text) = std::str::from_utf8(&line) else {
            log::warn!("Skipping lexicon line {}: not valid UTF-8", i + 1);
            skipped += 1;
            continue;
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_record(trimmed) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                log::warn!("Skipping lexicon line {}: {e}", i + 1);
                skipped += 1;
            }
        }
    }

    Ok((entries, skipped))
}
