//! Compact set of lowercase ASCII letters
//!
//! Each letter `a..=z` maps to one bit of a `u32`, so membership, subset and
//! intersection tests are single bitwise operations.

use std::fmt;

/// A set of lowercase ASCII letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

#[inline]
const fn bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build a set from every ASCII letter in `text`, ignoring anything else
    ///
    /// # Examples
    /// ```
    /// use wordle_opener::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters("Crane!");
    /// assert!(set.contains(b'c'));
    /// assert_eq!(set.len(), 5);
    /// ```
    #[must_use]
    pub fn from_letters(text: &str) -> Self {
        text.bytes()
            .filter(u8::is_ascii_alphabetic)
            .map(|b| b.to_ascii_lowercase())
            .collect()
    }

    /// Add a letter; non-lowercase bytes are ignored
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.0 |= bit(letter);
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & bit(letter) != 0
    }

    /// Every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
