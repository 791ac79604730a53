//! Wordle solving algorithms
//!
//! Filtering, ranking, the per-secret solve loop, and the opener sweep built on it.

pub mod batch;
mod engine;
mod filter;
mod ranking;

pub use batch::{OpenerReport, best_report, evaluate_opener, evaluate_openers};
pub use engine::{GuessStep, Session, SolveError, SolvePhase, SolveTrace, Solver, SolverConfig};
pub use filter::filter_candidates;
pub use ranking::{Ranker, RankingConfig, RankingConfigError};
