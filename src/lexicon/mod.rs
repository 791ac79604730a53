//! Lexicon of candidate words with usage metadata
//!
//! A `Lexicon` is built once, never mutated afterwards, and shared by reference
//! with every solve (including concurrent ones in a sweep).

mod embedded;
pub mod loader;

pub use embedded::SAMPLE_LEXICON;

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::io::{self, BufRead};
use std::path::Path;
use thiserror::Error;

/// A single lexicon record
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    pub word: Word,
    /// Lower ranks score higher when ordering candidates
    pub usage_rank: i64,
    pub frequency: f64,
}

impl LexiconEntry {
    #[must_use]
    pub const fn new(word: Word, usage_rank: i64, frequency: f64) -> Self {
        Self {
            word,
            usage_rank,
            frequency,
        }
    }
}

/// Extremes of the usage metadata over a whole lexicon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolStats {
    pub min_usage: i64,
    pub max_usage: i64,
    pub min_frequency: f64,
    pub max_frequency: f64,
}

impl PoolStats {
    /// Compute the extremes of `entries`, or `None` when there are none
    #[must_use]
    pub fn from_entries(entries: &[LexiconEntry]) -> Option<Self> {
        let first = entries.first()?;
        let seed = Self {
            min_usage: first.usage_rank,
            max_usage: first.usage_rank,
            min_frequency: first.frequency,
            max_frequency: first.frequency,
        };

        Some(entries.iter().fold(seed, |stats, entry| Self {
            min_usage: stats.min_usage.min(entry.usage_rank),
            max_usage: stats.max_usage.max(entry.usage_rank),
            min_frequency: stats.min_frequency.min(entry.frequency),
            max_frequency: stats.max_frequency.max(entry.frequency),
        }))
    }

    /// Width of the usage-rank range; 1 when every rank is equal
    #[must_use]
    pub fn usage_span(&self) -> f64 {
        let span = self.max_usage as f64 - self.min_usage as f64;
        if span > 0.0 { span } else { 1.0 }
    }

    /// Width of the frequency range; 1 when every frequency is equal
    #[must_use]
    pub fn frequency_span(&self) -> f64 {
        let span = self.max_frequency - self.min_frequency;
        if span > 0.0 { span } else { 1.0 }
    }
}

/// Counts from building a lexicon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub parsed: usize,
    pub skipped: usize,
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon: {0}")]
    Io(#[from] io::Error),
    #[error("lexicon contains no usable records")]
    Empty,
}

/// Immutable word collection with a lookup index and precomputed pool statistics
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    index: FxHashMap<String, usize>,
    stats: PoolStats,
    report: LoadReport,
}

impl Lexicon {
    /// Build a lexicon from already-validated entries
    ///
    /// Repeated words keep their first occurrence; later copies are skipped with a warning.
    ///
    /// # Errors
    /// Returns `LexiconError::Empty` if `entries` is empty.
    pub fn from_entries(entries: Vec<LexiconEntry>) -> Result<Self, LexiconError> {
        Self::build(entries, 0)
    }

    /// Parse a JSON Lines lexicon held in memory
    ///
    /// # Errors
    /// Returns `LexiconError::Empty` if no record survives parsing.
    ///
    /// # Examples
    /// ```
    /// use wordle_opener::lexicon::Lexicon;
    ///
    /// let text = r#"{"word": "crane", "score": 1, "frequency": 100}
    /// {"word": "slate", "score": 2}
    /// {"word": "torch", "score": 3, "frequency": 10}"#;
    ///
    /// let lexicon = Lexicon::parse(text).unwrap();
    /// assert_eq!(lexicon.len(), 2);
    /// assert_eq!(lexicon.report().skipped, 1);
    /// ```
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        Self::from_reader(text.as_bytes())
    }

    /// Parse a JSON Lines lexicon from any buffered reader
    ///
    /// # Errors
    /// Returns an error if reading fails or no record survives parsing.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        let (entries, skipped) = loader::read_records(reader)?;
        Self::build(entries, skipped)
    }

    /// Load a JSON Lines lexicon from a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or no record survives parsing.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        log::info!("Parsing lexicon {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(io::BufReader::new(file))
    }

    /// The lexicon bundled with the crate
    ///
    /// # Errors
    /// Only fails if the bundled data is corrupt.
    pub fn sample() -> Result<Self, LexiconError> {
        Self::parse(SAMPLE_LEXICON)
    }

    fn build(entries: Vec<LexiconEntry>, mut skipped: usize) -> Result<Self, LexiconError> {
        let mut index = FxHashMap::default();
        let mut unique = Vec::with_capacity(entries.len());

        for entry in entries {
            if index.contains_key(entry.word.text()) {
                log::warn!("Skipping duplicate lexicon word '{}'", entry.word);
                skipped += 1;
                continue;
            }
            index.insert(entry.word.text().to_string(), unique.len());
            unique.push(entry);
        }

        let stats = PoolStats::from_entries(&unique).ok_or(LexiconError::Empty)?;
        let report = LoadReport {
            parsed: unique.len(),
            skipped,
        };
        log::info!(
            "Loaded {} lexicon words ({} skipped)",
            report.parsed,
            report.skipped
        );

        Ok(Self {
            entries: unique,
            index,
            stats,
            report,
        })
    }

    /// All entries in load order
    #[must_use]
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty lexicons
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `word` in load order (case-insensitive)
    #[must_use]
    pub fn position(&self, word: &str) -> Option<usize> {
        self.index.get(word.trim().to_lowercase().as_str()).copied()
    }

    /// Look up an entry by its text (case-insensitive)
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.position(word).map(|i| &self.entries[i])
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// Usage and frequency extremes over the whole lexicon
    #[must_use]
    pub const fn stats(&self) -> &PoolStats {
        &self.stats
    }

    #[must_use]
    pub const fn report(&self) -> LoadReport {
        self.report
    }
}
