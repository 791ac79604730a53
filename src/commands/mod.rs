//! Command implementations

pub mod interactive;
pub mod rank;
pub mod solve;
pub mod sweep;

pub use interactive::{InputError, ManualConstraints, run_interactive};
pub use rank::{RankedWord, rank_words};
pub use solve::{SolveConfig, solve_word};
pub use sweep::{SweepConfig, SweepLog, SweepSummary, run_sweep, select_secrets};
