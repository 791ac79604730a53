//! Formatting utilities for terminal output

use crate::core::{ConstraintState, Feedback, LetterFeedback, LetterSet, Word};
use colored::Colorize;

/// Render a guess with each letter tinted by its feedback
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.letters())
        .map(|(&letter, mark)| {
            let tile = format!(" {} ", char::from(letter).to_ascii_uppercase());
            match mark {
                LetterFeedback::Correct => tile.black().on_green().bold().to_string(),
                LetterFeedback::Present => tile.black().on_yellow().bold().to_string(),
                LetterFeedback::Absent => tile.bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = ((ratio * width as f64) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Upper-cased letters of a set, or a dash when it is empty
#[must_use]
pub fn letter_list(set: LetterSet) -> String {
    if set.is_empty() {
        "-".to_string()
    } else {
        set.to_string().to_uppercase()
    }
}

/// Confirmed letters as a board row, e.g. `__A_E`
#[must_use]
pub fn confirmed_row(state: &ConstraintState) -> String {
    state
        .confirmed()
        .iter()
        .map(|slot| slot.map_or('_', |letter| char::from(letter).to_ascii_uppercase()))
        .collect()
}

/// Position exclusions as `1:C 2:R`, 1-based, or a dash when there are none
#[must_use]
pub fn position_exclusion_list(state: &ConstraintState) -> String {
    let parts: Vec<String> = state
        .position_exclusions()
        .iter()
        .enumerate()
        .filter(|(_, set)| !set.is_empty())
        .map(|(i, &set)| format!("{}:{}", i + 1, letter_list(set)))
        .collect();

    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full_and_clamped() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(5.0, 0.0, 3), "░░░");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn constraint_rows() {
        let state = ConstraintState::new()
            .evaluate_guess(&Word::new("crane").unwrap(), &Word::new("torch").unwrap())
            .evaluate_guess(&Word::new("north").unwrap(), &Word::new("torch").unwrap());

        assert_eq!(confirmed_row(&state), "_OR_H");
        assert_eq!(letter_list(state.excluded()), "AEN");
        assert_eq!(letter_list(state.required()), "CRT");
        assert_eq!(position_exclusion_list(&state), "1:C 2:R 4:T");
        assert_eq!(position_exclusion_list(&ConstraintState::new()), "-");
    }

    #[test]
    fn colored_guess_keeps_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::parse("GY---").unwrap();
        assert_eq!(colored_guess(&guess, &feedback), " C  R  A  N  E ");
    }
}
