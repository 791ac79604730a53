//! Candidate scoring and ordering
//!
//! A word's score blends its normalized usage rank and frequency:
//!
//! `score = scale × (1 − usage_norm) × decay^frequency_norm`
//!
//! Both signals are normalized against the extremes of the whole lexicon, not
//! the current candidate pool, so scores stay comparable as the pool shrinks.

use crate::lexicon::{LexiconEntry, PoolStats};
use thiserror::Error;

/// Tunable coefficients of the scoring heuristic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingConfig {
    /// Overall scale `K`; does not affect ordering
    pub scale: f64,
    /// Frequency decay base, strictly between 0 and 1
    pub decay: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RankingConfigError {
    #[error("scale must be a positive finite number, got {0}")]
    InvalidScale(f64),
    #[error("decay must lie strictly between 0 and 1, got {0}")]
    InvalidDecay(f64),
}

impl RankingConfig {
    /// Default scale `K`
    pub const DEFAULT_SCALE: f64 = 100.0;
    /// Default decay base
    pub const DEFAULT_DECAY: f64 = 0.5;

    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `RankingConfigError` if `scale` is not positive or `decay` is outside (0, 1).
    pub fn new(scale: f64, decay: f64) -> Result<Self, RankingConfigError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RankingConfigError::InvalidScale(scale));
        }
        if !(decay > 0.0 && decay < 1.0) {
            return Err(RankingConfigError::InvalidDecay(decay));
        }
        Ok(Self { scale, decay })
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            scale: Self::DEFAULT_SCALE,
            decay: Self::DEFAULT_DECAY,
        }
    }
}

/// Scores entries against fixed pool statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranker {
    stats: PoolStats,
    config: RankingConfig,
}

impl Ranker {
    #[must_use]
    pub const fn new(stats: PoolStats, config: RankingConfig) -> Self {
        Self { stats, config }
    }

    /// Score a single entry; higher is tried first
    ///
    /// # Examples
    /// ```
    /// use wordle_opener::core::Word;
    /// use wordle_opener::lexicon::{LexiconEntry, PoolStats};
    /// use wordle_opener::solver::{Ranker, RankingConfig};
    ///
    /// let entries = vec![
    ///     LexiconEntry::new(Word::new("crane").unwrap(), 1, 100.0),
    ///     LexiconEntry::new(Word::new("torch").unwrap(), 3, 10.0),
    /// ];
    /// let stats = PoolStats::from_entries(&entries).unwrap();
    /// let ranker = Ranker::new(stats, RankingConfig::default());
    ///
    /// assert!(ranker.rank(&entries[0]) > ranker.rank(&entries[1]));
    /// assert_eq!(ranker.rank(&entries[1]), 0.0);
    /// ```
    #[must_use]
    pub fn rank(&self, entry: &LexiconEntry) -> f64 {
        let usage_norm =
            (entry.usage_rank as f64 - self.stats.min_usage as f64) / self.stats.usage_span();
        let frequency_norm =
            (entry.frequency - self.stats.min_frequency) / self.stats.frequency_span();

        self.config.scale * (1.0 - usage_norm) * self.config.decay.powf(frequency_norm)
    }

    /// Order candidates by descending score
    ///
    /// The sort is stable: entries with equal scores keep their input order.
    #[must_use]
    pub fn order<'a>(&self, candidates: &[&'a LexiconEntry]) -> Vec<&'a LexiconEntry> {
        let mut scored: Vec<(f64, &'a LexiconEntry)> = candidates
            .iter()
            .map(|&entry| (self.rank(entry), entry))
            .collect();

        scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));

        scored.into_iter().map(|(_, entry)| entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn entries() -> Vec<LexiconEntry> {
        vec![
            LexiconEntry::new(Word::new("crane").unwrap(), 1, 100.0),
            LexiconEntry::new(Word::new("slate").unwrap(), 2, 90.0),
            LexiconEntry::new(Word::new("torch").unwrap(), 3, 10.0),
        ]
    }

    fn ranker(entries: &[LexiconEntry], config: RankingConfig) -> Ranker {
        Ranker::new(PoolStats::from_entries(entries).unwrap(), config)
    }

    #[test]
    fn scores_follow_formula() {
        let entries = entries();
        let ranker = ranker(&entries, RankingConfig::new(10.0, 0.5).unwrap());

        // usage 0, frequency 1
        assert!((ranker.rank(&entries[0]) - 5.0).abs() < 1e-9);
        // usage 0.5, frequency 80/90
        let expected = 10.0 * 0.5 * 0.5_f64.powf(80.0 / 90.0);
        assert!((ranker.rank(&entries[1]) - expected).abs() < 1e-9);
        // usage 1 always scores zero
        assert!(ranker.rank(&entries[2]).abs() < 1e-9);
    }

    #[test]
    fn order_is_descending() {
        let entries = entries();
        let ranker = ranker(&entries, RankingConfig::default());
        let refs: Vec<&LexiconEntry> = entries.iter().rev().collect();

        let ordered: Vec<&str> = ranker.order(&refs).iter().map(|e| e.word.text()).collect();
        assert_eq!(ordered, vec!["crane", "slate", "torch"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let entries = vec![
            LexiconEntry::new(Word::new("ghost").unwrap(), 5, 3.0),
            LexiconEntry::new(Word::new("abide").unwrap(), 5, 3.0),
            LexiconEntry::new(Word::new("mimic").unwrap(), 5, 3.0),
        ];
        let ranker = ranker(&entries, RankingConfig::default());
        let refs: Vec<&LexiconEntry> = entries.iter().collect();

        let first: Vec<&str> = ranker.order(&refs).iter().map(|e| e.word.text()).collect();
        let second: Vec<&str> = ranker.order(&refs).iter().map(|e| e.word.text()).collect();
        assert_eq!(first, vec!["ghost", "abide", "mimic"]);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_spans_do_not_divide_by_zero() {
        let entries = vec![LexiconEntry::new(Word::new("crane").unwrap(), 7, 2.0)];
        let ranker = ranker(&entries, RankingConfig::default());
        let score = ranker.rank(&entries[0]);
        assert!(score.is_finite());
        assert!((score - RankingConfig::DEFAULT_SCALE).abs() < 1e-9);
    }

    #[test]
    fn extreme_ranks_stay_in_range() {
        let entries = vec![
            LexiconEntry::new(Word::new("crane").unwrap(), -9_000_000_000_000_000_000, 1.0),
            LexiconEntry::new(Word::new("torch").unwrap(), 9_000_000_000_000_000_000, 1.0),
        ];
        let ranker = ranker(&entries, RankingConfig::default());

        assert!((ranker.rank(&entries[0]) - RankingConfig::DEFAULT_SCALE).abs() < 1e-9);
        assert!(ranker.rank(&entries[1]).abs() < 1e-9);
    }

    #[test]
    fn decay_changes_ordering() {
        // Lower rank but much more frequent vs. slightly higher rank, rare
        let entries = vec![
            LexiconEntry::new(Word::new("crane").unwrap(), 1, 100.0),
            LexiconEntry::new(Word::new("slate").unwrap(), 2, 0.0),
            LexiconEntry::new(Word::new("torch").unwrap(), 11, 50.0),
        ];
        let refs: Vec<&LexiconEntry> = entries.iter().collect();

        let gentle = ranker(&entries, RankingConfig::new(1.0, 0.99).unwrap());
        let steep = ranker(&entries, RankingConfig::new(1.0, 0.01).unwrap());

        assert_eq!(gentle.order(&refs)[0].word.text(), "crane");
        assert_eq!(steep.order(&refs)[0].word.text(), "slate");
    }

    #[test]
    fn config_validation() {
        assert!(RankingConfig::new(1.0, 0.5).is_ok());
        assert_eq!(
            RankingConfig::new(0.0, 0.5),
            Err(RankingConfigError::InvalidScale(0.0))
        );
        assert_eq!(
            RankingConfig::new(1.0, 1.0),
            Err(RankingConfigError::InvalidDecay(1.0))
        );
        assert!(RankingConfig::new(f64::NAN, 0.5).is_err());
        assert!(RankingConfig::new(1.0, f64::NAN).is_err());
    }
}
