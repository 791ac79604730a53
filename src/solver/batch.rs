//! Opener evaluation across many secrets
//!
//! Every (opener, secret) pair is an independent solve against the shared
//! read-only lexicon, so openers are spread over the rayon pool with no locking.

use super::engine::Solver;
use crate::lexicon::{Lexicon, LexiconEntry};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::mpsc;

/// Average solve length for one opener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenerReport {
    pub word: String,
    pub average_guess_count: f64,
    /// Secrets solved; not persisted
    #[serde(skip)]
    pub solved: usize,
    /// Secrets whose solve failed and were left out of the average; not persisted
    #[serde(skip)]
    pub failed: usize,
}

/// Average guess count of `opener` over `secrets`
///
/// Failing pairs are logged and excluded from the mean. Returns `None` when no
/// pair could be solved at all.
///
/// # Examples
/// ```
/// use wordle_opener::lexicon::{Lexicon, LexiconEntry};
/// use wordle_opener::solver::{Solver, SolverConfig, evaluate_opener};
///
/// let lexicon = Lexicon::parse(
///     r#"{"word": "crane", "score": 1, "frequency": 100}
///        {"word": "slate", "score": 2, "frequency": 90}"#,
/// )
/// .unwrap();
/// let solver = Solver::new(&lexicon, SolverConfig::default());
/// let secrets: Vec<&LexiconEntry> = lexicon.entries().iter().collect();
///
/// let report = evaluate_opener(&solver, "crane", &secrets).unwrap();
/// assert_eq!(report.average_guess_count, 1.5);
/// ```
#[must_use]
pub fn evaluate_opener(
    solver: &Solver<'_>,
    opener: &str,
    secrets: &[&LexiconEntry],
) -> Option<OpenerReport> {
    let mut total = 0;
    let mut solved = 0;
    let mut failed = 0;

    for secret in secrets {
        match solver.solve(opener, secret.word.text()) {
            Ok(guesses) => {
                total += guesses;
                solved += 1;
            }
            Err(e) => {
                log::debug!("{opener} x {}: {e}", secret.word);
                failed += 1;
            }
        }
    }

    if solved == 0 {
        log::warn!("Opener '{opener}' failed against every secret");
        return None;
    }

    Some(OpenerReport {
        word: opener.to_string(),
        average_guess_count: total as f64 / solved as f64,
        solved,
        failed,
    })
}

/// Evaluate every opener in parallel, handing each report to `on_report` as it completes
///
/// `on_report` runs on the calling thread, so it may write to files or progress
/// bars without synchronization. Reports arrive in completion order; the returned
/// list is sorted by lexicon order. The sweep always runs to completion, and the
/// first error from `on_report` is returned at the end.
///
/// # Errors
/// Returns the first error produced by `on_report`.
pub fn evaluate_openers<F, E>(
    solver: &Solver<'_>,
    openers: &[&LexiconEntry],
    secrets: &[&LexiconEntry],
    mut on_report: F,
) -> Result<Vec<OpenerReport>, E>
where
    F: FnMut(&OpenerReport) -> Result<(), E>,
{
    let (tx, rx) = mpsc::channel();

    let (mut reports, first_error) = std::thread::scope(|scope| {
        scope.spawn(move || {
            openers.par_iter().for_each_with(tx, |tx, opener| {
                if let Some(report) = evaluate_opener(solver, opener.word.text(), secrets) {
                    // The receiver outlives every sender
                    let _ = tx.send(report);
                }
            });
        });

        let mut reports = Vec::with_capacity(openers.len());
        let mut first_error = None;
        for report in rx {
            if first_error.is_none()
                && let Err(e) = on_report(&report)
            {
                first_error = Some(e);
            }
            reports.push(report);
        }
        (reports, first_error)
    });

    if let Some(e) = first_error {
        return Err(e);
    }

    let lexicon = solver.lexicon();
    reports.sort_by_key(|report| lexicon.position(&report.word));
    Ok(reports)
}

/// The opener with the lowest average; ties go to the earlier lexicon word
#[must_use]
pub fn best_report<'r>(reports: &'r [OpenerReport], lexicon: &Lexicon) -> Option<&'r OpenerReport> {
    reports.iter().min_by(|a, b| {
        a.average_guess_count
            .total_cmp(&b.average_guess_count)
            .then_with(|| lexicon.position(&a.word).cmp(&lexicon.position(&b.word)))
    })
}
