//! Word solving command
//!
//! Solves a specific secret word and returns the solution path.

use crate::solver::{SolveError, SolveTrace, Solver};

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: String,
    /// First guess; the top-ranked lexicon word when `None`
    pub opener: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            opener: None,
        }
    }

    #[must_use]
    pub fn with_opener(mut self, opener: impl Into<String>) -> Self {
        self.opener = Some(opener.into());
        self
    }
}

/// Solve a specific word, recording every guess
///
/// # Errors
///
/// Returns an error if:
/// - The secret or opener is not a valid word or not in the lexicon
/// - The candidate pool empties before the secret is found
/// - The guess ceiling is reached
pub fn solve_word(config: &SolveConfig, solver: &Solver<'_>) -> Result<SolveTrace, SolveError> {
    let opener = match &config.opener {
        Some(word) => word.as_str(),
        None => solver
            .best_opener()
            .map(|entry| entry.word.text())
            .unwrap_or(config.secret.as_str()),
    };

    log::info!("Solving '{}' starting from '{opener}'", config.secret);
    solver.solve_traced(opener, &config.secret)
}
