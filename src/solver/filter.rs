//! Candidate filtering against accumulated constraints

use crate::core::ConstraintState;
use crate::lexicon::LexiconEntry;

/// Keep the candidates consistent with `state`, preserving their order
///
/// A word survives when it contains every required letter, none of the excluded
/// letters, every confirmed letter in place, and no letter at a position where
/// that letter was ruled out. The function is pure, so filtering an already
/// filtered pool with the same state returns it unchanged.
///
/// # Examples
/// ```
/// use wordle_opener::core::{ConstraintState, Word};
/// use wordle_opener::lexicon::LexiconEntry;
/// use wordle_opener::solver::filter_candidates;
///
/// let entries = vec![
///     LexiconEntry::new(Word::new("crane").unwrap(), 1, 100.0),
///     LexiconEntry::new(Word::new("slate").unwrap(), 2, 90.0),
///     LexiconEntry::new(Word::new("torch").unwrap(), 3, 10.0),
/// ];
/// let pool: Vec<&LexiconEntry> = entries.iter().collect();
///
/// let state = ConstraintState::new()
///     .evaluate_guess(&Word::new("crane").unwrap(), &Word::new("torch").unwrap());
/// let survivors = filter_candidates(&pool, &state);
///
/// assert_eq!(survivors.len(), 1);
/// assert_eq!(survivors[0].word.text(), "torch");
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    candidates: &[&'a LexiconEntry],
    state: &ConstraintState,
) -> Vec<&'a LexiconEntry> {
    if state.is_empty() {
        return candidates.to_vec();
    }

    candidates
        .iter()
        .copied()
        .filter(|entry| state.admits(&entry.word))
        .collect()
}
