//! Opener sweep command
//!
//! Evaluates candidate openers against the lexicon, appending one JSON line per
//! opener so an interrupted sweep can pick up where it stopped.

use crate::lexicon::{Lexicon, LexiconEntry};
use crate::solver::{OpenerReport, Solver, best_report, evaluate_openers};
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Configuration for an opener sweep
#[derive(Debug, Clone, Default)]
pub struct SweepConfig {
    /// Openers to evaluate; every lexicon word when empty
    pub openers: Vec<String>,
    /// Evaluate only the `limit` top-ranked openers
    pub limit: Option<usize>,
    /// Evaluate against this many randomly chosen secrets instead of all of them
    pub sample: Option<usize>,
    pub seed: u64,
    /// Append-only results file; openers already present are skipped
    pub output: Option<PathBuf>,
    pub show_progress: bool,
}

/// Outcome of a sweep, including openers resumed from an earlier run
#[derive(Debug)]
pub struct SweepSummary {
    pub secrets: usize,
    pub evaluated: usize,
    pub resumed: usize,
    pub failed_pairs: usize,
    pub duration: Duration,
    pub best: Option<OpenerReport>,
}

/// Append-only JSON Lines record of opener reports
pub struct SweepLog {
    file: File,
    previous: Vec<OpenerReport>,
    completed: FxHashSet<String>,
}

impl SweepLog {
    /// Open `path` for appending, loading any reports it already holds
    ///
    /// Lines that do not parse, such as one cut short by an interrupted run, are
    /// skipped with a warning. A cut-short last line is terminated before anything
    /// new is appended.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read or opened for appending.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let mut previous = Vec::new();
        let mut unterminated = false;

        if path.exists() {
            let reader = BufReader::new(File::open(path)?);
            for (number, line) in reader.split(b'\n').enumerate() {
                let line = line?;
                if line.iter().all(u8::is_ascii_whitespace) {
                    continue;
                }
                match serde_json::from_slice::<OpenerReport>(&line) {
                    Ok(report) => previous.push(report),
                    Err(e) => log::warn!("{}:{}: skipping record: {e}", path.display(), number + 1),
                }
            }
            unterminated = fs::read(path)?.last().is_some_and(|&byte| byte != b'\n');
            log::info!(
                "Resuming from {} ({} openers done)",
                path.display(),
                previous.len()
            );
        }

        let completed = previous.iter().map(|r| r.word.clone()).collect();
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        if unterminated {
            file.write_all(b"\n")?;
            file.flush()?;
        }

        Ok(Self {
            file,
            previous,
            completed,
        })
    }

    /// Reports loaded from an earlier run
    #[must_use]
    pub fn previous(&self) -> &[OpenerReport] {
        &self.previous
    }

    #[must_use]
    pub fn is_complete(&self, word: &str) -> bool {
        self.completed.contains(word)
    }

    /// Write one report and flush it to disk
    ///
    /// # Errors
    /// Returns an I/O error if the record cannot be written.
    pub fn append(&mut self, report: &OpenerReport) -> io::Result<()> {
        let line = serde_json::to_string(report)?;
        writeln!(self.file, "{line}")?;
        self.file.flush()?;
        self.completed.insert(report.word.clone());
        Ok(())
    }
}

/// Secrets to evaluate against, in lexicon order
///
/// With `sample`, picks that many distinct secrets reproducibly from `seed`.
#[must_use]
pub fn select_secrets(lexicon: &Lexicon, sample: Option<usize>, seed: u64) -> Vec<&LexiconEntry> {
    let entries = lexicon.entries();

    match sample {
        Some(amount) if amount < entries.len() => {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut indices = rand::seq::index::sample(&mut rng, entries.len(), amount).into_vec();
            indices.sort_unstable();
            indices.into_iter().map(|i| &entries[i]).collect()
        }
        _ => entries.iter().collect(),
    }
}

fn select_openers<'a>(
    solver: &Solver<'a>,
    config: &SweepConfig,
) -> anyhow::Result<Vec<&'a LexiconEntry>> {
    let mut openers = if config.openers.is_empty() {
        solver.ranked().to_vec()
    } else {
        config
            .openers
            .iter()
            .map(|word| {
                solver
                    .lookup(word)
                    .with_context(|| format!("invalid opener '{word}'"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    let mut seen = FxHashSet::default();
    openers.retain(|entry| seen.insert(entry.word.text()));

    if let Some(limit) = config.limit {
        openers.truncate(limit);
    }
    Ok(openers)
}

/// Run an opener sweep
///
/// # Errors
///
/// Returns an error if:
/// - A requested opener is not in the lexicon
/// - The sweep log cannot be opened or written
pub fn run_sweep(solver: &Solver<'_>, config: &SweepConfig) -> anyhow::Result<SweepSummary> {
    let start = Instant::now();
    let lexicon = solver.lexicon();
    let secrets = select_secrets(lexicon, config.sample, config.seed);
    let mut openers = select_openers(solver, config)?;

    let mut log = match &config.output {
        Some(path) => Some(
            SweepLog::open(path)
                .with_context(|| format!("failed to open sweep log {}", path.display()))?,
        ),
        None => None,
    };

    let requested = openers.len();
    if let Some(log) = &log {
        openers.retain(|entry| !log.is_complete(entry.word.text()));
    }
    let resumed = requested - openers.len();
    let previous: Vec<OpenerReport> = log
        .as_ref()
        .map(|log| {
            log.previous()
                .iter()
                .filter(|report| lexicon.contains(&report.word))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    log::info!(
        "Evaluating {} openers against {} secrets ({resumed} already done)",
        openers.len(),
        secrets.len()
    );

    let pb = if config.show_progress {
        ProgressBar::new(openers.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let reports = evaluate_openers(solver, &openers, &secrets, |report| -> io::Result<()> {
        pb.inc(1);
        pb.set_message(format!(
            "{} {:.3}",
            report.word, report.average_guess_count
        ));
        if let Some(log) = log.as_mut() {
            log.append(report)?;
        }
        Ok(())
    })
    .context("failed to write sweep log")?;

    pb.finish_with_message("Complete!");

    let failed_pairs = reports.iter().map(|r| r.failed).sum();
    let evaluated = reports.len();
    let mut all = previous;
    all.extend(reports);
    let best = best_report(&all, lexicon).cloned();

    Ok(SweepSummary {
        secrets: secrets.len(),
        evaluated,
        resumed,
        failed_pairs,
        duration: start.elapsed(),
        best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use std::fs;

    fn config_for(openers: &[&str], output: Option<PathBuf>) -> SweepConfig {
        SweepConfig {
            openers: openers.iter().map(ToString::to_string).collect(),
            output,
            ..SweepConfig::default()
        }
    }

    #[test]
    fn sample_is_reproducible_and_ordered() {
        let lexicon = Lexicon::sample().unwrap();

        let first = select_secrets(&lexicon, Some(10), 7);
        let second = select_secrets(&lexicon, Some(10), 7);
        let words = |v: &[&LexiconEntry]| v.iter().map(|e| e.word.text().to_string()).collect::<Vec<_>>();

        assert_eq!(first.len(), 10);
        assert_eq!(words(&first), words(&second));

        let positions: Vec<usize> = first
            .iter()
            .map(|e| lexicon.position(e.word.text()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn oversized_sample_uses_everything() {
        let lexicon = Lexicon::sample().unwrap();
        assert_eq!(select_secrets(&lexicon, Some(10_000), 1).len(), lexicon.len());
        assert_eq!(select_secrets(&lexicon, None, 1).len(), lexicon.len());
    }

    #[test]
    fn limit_takes_top_ranked_openers() {
        let lexicon = Lexicon::sample().unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());
        let config = SweepConfig {
            limit: Some(3),
            ..SweepConfig::default()
        };

        let openers = select_openers(&solver, &config).unwrap();
        assert_eq!(openers, solver.ranked()[..3].to_vec());
    }

    #[test]
    fn unknown_opener_is_rejected() {
        let lexicon = Lexicon::sample().unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        assert!(run_sweep(&solver, &config_for(&["qqqqq"], None)).is_err());
    }

    #[test]
    fn sweep_appends_and_resumes() {
        let lexicon = Lexicon::sample().unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.jsonl");

        let config = config_for(&["crane", "slate", "crane"], Some(path.clone()));
        let summary = run_sweep(&solver, &config).unwrap();
        assert_eq!(summary.evaluated, 2);
        assert_eq!(summary.resumed, 0);
        assert_eq!(summary.secrets, lexicon.len());

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.lines().all(|l| l.contains("\"average_guess_count\"")));

        let rerun = run_sweep(&solver, &config).unwrap();
        assert_eq!(rerun.evaluated, 0);
        assert_eq!(rerun.resumed, 2);
        assert_eq!(rerun.best, summary.best);
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
    }

    #[test]
    fn log_skips_truncated_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.jsonl");
        fs::write(
            &path,
            "{\"word\":\"crane\",\"average_guess_count\":3.5}\n{\"word\":\"sla",
        )
        .unwrap();

        let log = SweepLog::open(&path).unwrap();
        assert_eq!(log.previous().len(), 1);
        assert!(log.is_complete("crane"));
        assert!(!log.is_complete("slate"));
    }

    #[test]
    fn append_after_truncated_line_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.jsonl");
        fs::write(
            &path,
            "{\"word\":\"crane\",\"average_guess_count\":3.5}\n{\"word\":\"sla",
        )
        .unwrap();

        let mut log = SweepLog::open(&path).unwrap();
        log.append(&OpenerReport {
            word: "torch".to_string(),
            average_guess_count: 2.0,
            solved: 1,
            failed: 0,
        })
        .unwrap();
        drop(log);

        let reopened = SweepLog::open(&path).unwrap();
        assert!(reopened.is_complete("crane"));
        assert!(reopened.is_complete("torch"));
        assert_eq!(reopened.previous().len(), 2);
    }

    #[test]
    fn best_spans_previous_and_new_reports() {
        let lexicon = Lexicon::sample().unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.jsonl");
        fs::write(&path, "{\"word\":\"pizza\",\"average_guess_count\":0.5}\n").unwrap();

        let summary = run_sweep(&solver, &config_for(&["crane"], Some(path))).unwrap();
        assert_eq!(summary.evaluated, 1);
        assert_eq!(summary.best.unwrap().word, "pizza");
    }
}
