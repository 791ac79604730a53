//! Accumulated knowledge about the secret word
//!
//! A `ConstraintState` only ever grows during a solve: letters get excluded,
//! required, pinned to a position or ruled out at a position, and nothing is
//! removed until the solve ends.

use super::{Feedback, LetterFeedback, LetterSet, WORD_LENGTH, Word};
use thiserror::Error;

/// Contradictory or malformed constraint input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("letter '{letter}' cannot be both excluded and present in the secret")]
    Conflict { letter: char },
    #[error("letter '{letter}' cannot be both confirmed and excluded at position {}", .position + 1)]
    PositionConflict { letter: char, position: usize },
    #[error("position {} already holds '{existing}'", .position + 1)]
    AlreadyConfirmed { existing: char, position: usize },
    #[error("position must be between 1 and 5, got {0}")]
    InvalidPosition(usize),
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
}

/// Everything learned about the secret so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintState {
    excluded: LetterSet,
    required: LetterSet,
    confirmed: [Option<u8>; WORD_LENGTH],
    position_exclusions: [LetterSet; WORD_LENGTH],
}

fn letter_byte(letter: char) -> Result<u8, ConstraintError> {
    if letter.is_ascii_alphabetic() {
        Ok(letter.to_ascii_lowercase() as u8)
    } else {
        Err(ConstraintError::InvalidLetter(letter))
    }
}

impl ConstraintState {
    /// An empty state that admits every word
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters known to be absent from the secret
    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    /// Letters known to be somewhere in the secret
    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    #[inline]
    #[must_use]
    pub const fn confirmed(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.confirmed
    }

    #[inline]
    #[must_use]
    pub const fn position_exclusions(&self) -> &[LetterSet; WORD_LENGTH] {
        &self.position_exclusions
    }

    /// True when no feedback has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fold the result of guessing `guess` against a known `secret` into the state
    ///
    /// Each letter is classified on its own: a positional match pins it, any other
    /// occurrence in the secret makes it required and rules it out at this position,
    /// and everything else is excluded.
    ///
    /// # Examples
    /// ```
    /// use wordle_opener::core::{ConstraintState, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("torch").unwrap();
    /// let state = ConstraintState::new().evaluate_guess(&guess, &secret);
    ///
    /// assert_eq!(state.required().to_string(), "cr");
    /// assert_eq!(state.excluded().to_string(), "aen");
    /// assert!(state.admits(&secret));
    /// assert!(!state.admits(&guess));
    /// ```
    #[must_use]
    pub fn evaluate_guess(&self, guess: &Word, secret: &Word) -> Self {
        let mut next = *self;

        for (position, &letter) in guess.chars().iter().enumerate() {
            if letter == secret.char_at(position) {
                next.confirmed[position] = Some(letter);
            } else if secret.has_letter(letter) {
                next.required.insert(letter);
                next.position_exclusions[position].insert(letter);
            } else {
                next.excluded.insert(letter);
            }
        }

        next
    }

    /// Fold externally reported feedback for `guess` into the state
    ///
    /// An absent mark for a letter that is correct or present elsewhere in the same
    /// guess, or that is already known to be in the secret, only rules the letter
    /// out at that position. This keeps the excluded and required sets disjoint when
    /// a reporter counts repeated letters.
    ///
    /// # Errors
    /// Returns `ConstraintError` if the feedback contradicts what is already known.
    pub fn apply_feedback(&self, guess: &Word, feedback: &Feedback) -> Result<Self, ConstraintError> {
        let mut next = *self;

        let marked_in_secret: LetterSet = guess
            .chars()
            .iter()
            .zip(feedback.letters())
            .filter(|(_, f)| **f != LetterFeedback::Absent)
            .map(|(&letter, _)| letter)
            .collect();

        for (position, (&letter, &mark)) in guess.chars().iter().zip(feedback.letters()).enumerate()
        {
            match mark {
                LetterFeedback::Correct => next.pin(position, letter)?,
                LetterFeedback::Present => {
                    next.required.insert(letter);
                    next.position_exclusions[position].insert(letter);
                }
                LetterFeedback::Absent => {
                    if marked_in_secret.contains(letter) || next.known_present().contains(letter) {
                        next.position_exclusions[position].insert(letter);
                    } else {
                        next.excluded.insert(letter);
                    }
                }
            }
        }

        next.validated()
    }

    /// Record that `letter` does not occur anywhere in the secret
    ///
    /// # Errors
    /// Returns `ConstraintError` for non-letters or a letter already known to be present.
    pub fn exclude(&self, letter: char) -> Result<Self, ConstraintError> {
        let letter = letter_byte(letter)?;
        let mut next = *self;
        next.excluded.insert(letter);
        next.validated()
    }

    /// Record that `letter` occurs somewhere in the secret
    ///
    /// # Errors
    /// Returns `ConstraintError` for non-letters or a letter already excluded.
    pub fn require(&self, letter: char) -> Result<Self, ConstraintError> {
        let letter = letter_byte(letter)?;
        let mut next = *self;
        next.required.insert(letter);
        next.validated()
    }

    /// Record that `letter` is in the secret but not at `position` (0-based)
    ///
    /// # Errors
    /// Returns `ConstraintError` for a bad position or letter, or a contradiction.
    pub fn exclude_at(&self, position: usize, letter: char) -> Result<Self, ConstraintError> {
        if position >= WORD_LENGTH {
            return Err(ConstraintError::InvalidPosition(position + 1));
        }
        let letter = letter_byte(letter)?;
        let mut next = *self;
        next.required.insert(letter);
        next.position_exclusions[position].insert(letter);
        next.validated()
    }

    /// Record that the secret has `letter` at `position` (0-based)
    ///
    /// # Errors
    /// Returns `ConstraintError` for a bad position or letter, or a contradiction.
    pub fn confirm_at(&self, position: usize, letter: char) -> Result<Self, ConstraintError> {
        if position >= WORD_LENGTH {
            return Err(ConstraintError::InvalidPosition(position + 1));
        }
        let letter = letter_byte(letter)?;
        let mut next = *self;
        next.pin(position, letter)?;
        next.validated()
    }

    /// Whether `word` is consistent with everything recorded so far
    ///
    /// Global membership rules are checked before the per-position scan.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let letters = word.letters();

        if !self.required.is_subset(letters) || self.excluded.intersects(letters) {
            return false;
        }

        word.chars()
            .iter()
            .zip(self.confirmed.iter().zip(&self.position_exclusions))
            .all(|(&letter, (confirmed, ruled_out))| {
                confirmed.is_none_or(|pinned| pinned == letter) && !ruled_out.contains(letter)
            })
    }

    fn pin(&mut self, position: usize, letter: u8) -> Result<(), ConstraintError> {
        match self.confirmed[position] {
            Some(existing) if existing != letter => Err(ConstraintError::AlreadyConfirmed {
                existing: char::from(existing),
                position,
            }),
            _ => {
                self.confirmed[position] = Some(letter);
                Ok(())
            }
        }
    }

    fn known_present(&self) -> LetterSet {
        self.confirmed.iter().flatten().copied().collect::<LetterSet>().union(self.required)
    }

    fn validated(self) -> Result<Self, ConstraintError> {
        if let Some(letter) = self.excluded.intersection(self.known_present()).iter().next() {
            return Err(ConstraintError::Conflict {
                letter: char::from(letter),
            });
        }

        for (position, (confirmed, ruled_out)) in
            self.confirmed.iter().zip(&self.position_exclusions).enumerate()
        {
            if let Some(letter) = *confirmed
                && ruled_out.contains(letter)
            {
                return Err(ConstraintError::PositionConflict {
                    letter: char::from(letter),
                    position,
                });
            }
        }

        Ok(self)
    }
}
