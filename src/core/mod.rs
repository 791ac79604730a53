//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable values.

mod constraints;
mod feedback;
mod letters;
mod word;

pub use constraints::{ConstraintError, ConstraintState};
pub use feedback::{Feedback, LetterFeedback};
pub use letters::LetterSet;
pub use word::{WORD_LENGTH, Word, WordError};
