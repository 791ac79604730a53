//! Wordle Opener
//!
//! A greedy Wordle solver that ranks words by historical usage and frequency,
//! narrows the lexicon from guess feedback, and sweeps opening words to find
//! the one with the lowest average solve length.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_opener::lexicon::Lexicon;
//! use wordle_opener::solver::{Solver, SolverConfig};
//!
//! let lexicon = Lexicon::sample().unwrap();
//! let solver = Solver::new(&lexicon, SolverConfig::default());
//!
//! let guesses = solver.solve("crane", "torch").unwrap();
//! assert!(guesses >= 2);
//! ```

// Core domain types
pub mod core;

// Word list loading
pub mod lexicon;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
