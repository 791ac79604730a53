//! Per-letter guess feedback
//!
//! Each position of a guess is classified by plain membership against the secret:
//! - Correct: the letter sits at this position in the secret
//! - Present: the letter occurs somewhere else in the secret
//! - Absent: the letter does not occur in the secret
//!
//! Occurrences are not counted, so a repeated guess letter is marked Present at
//! every non-matching position whenever the secret contains it at all.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

impl LetterFeedback {
    /// Parse one feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const SOLVED: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(letters: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// Classify every letter of `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_opener::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("torch").unwrap();
    ///
    /// // C and R occur in TORCH but elsewhere; A, N, E do not occur at all
    /// assert_eq!(Feedback::calculate(&guess, &secret).to_string(), "YY---");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *slot = if letter == secret.char_at(i) {
                LetterFeedback::Correct
            } else if secret.has_letter(letter) {
                LetterFeedback::Present
            } else {
                LetterFeedback::Absent
            };
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterFeedback {
        self.0[position]
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_opener::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Feedback::parse("GGG").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = LetterFeedback::from_char(ch)?;
        }

        Some(Self(result))
    }

    /// Convert feedback to an emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|f| match f {
                LetterFeedback::Correct => '🟩',
                LetterFeedback::Present => '🟨',
                LetterFeedback::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, secret: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn all_absent() {
        let fb = feedback("abcde", "fghij");
        assert_eq!(fb.to_string(), "-----");
        assert!(fb.letters().iter().all(|&f| f == LetterFeedback::Absent));
    }

    #[test]
    fn guessing_the_secret_is_solved() {
        for word in ["crane", "slate", "aaaaa", "speed"] {
            assert!(feedback(word, word).is_solved());
        }
        assert_eq!(Feedback::SOLVED.to_string(), "GGGGG");
    }

    #[test]
    fn crane_against_slate() {
        // C(absent) R(absent) A(correct) N(absent) E(correct)
        let fb = feedback("crane", "slate");
        assert_eq!(fb.to_string(), "--G-G");
        assert!(!fb.is_solved());
    }

    #[test]
    fn repeated_letters_use_membership_only() {
        // SPEED vs ERASE: both E's are present, no occurrence accounting
        assert_eq!(feedback("speed", "erase").to_string(), "Y-YY-");

        // ROBOT vs FLOOR: first O present, second O correct
        assert_eq!(feedback("robot", "floor").to_string(), "YY-G-");

        // Secret with one E still marks every guessed E present
        assert_eq!(feedback("eerie", "crane").to_string(), "YYY-G");
    }

    #[test]
    fn parse_valid() {
        let p1 = Feedback::parse("GYG--").unwrap();
        let p2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Feedback::parse(" gyg_. ").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.at(0), LetterFeedback::Correct);
        assert_eq!(p1.at(1), LetterFeedback::Present);
        assert_eq!(p1.at(4), LetterFeedback::Absent);
    }

    #[test]
    fn parse_invalid() {
        assert!(Feedback::parse("GYGGYX").is_none());
        assert!(Feedback::parse("GYG").is_none());
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
        assert!("GXGGY".parse::<Feedback>().is_err());
    }

    #[test]
    fn emoji_rendering() {
        let fb = Feedback::parse("GY-GY").unwrap();
        assert_eq!(fb.to_emoji(), "🟩🟨⬜🟩🟨");
    }
}
