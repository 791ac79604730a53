//! Main Wordle solver interface
//!
//! A `Solver` owns the lexicon ranking; each solve runs in its own `Session`
//! holding the constraint state and candidate pool for one secret.

use super::filter::filter_candidates;
use super::ranking::{Ranker, RankingConfig};
use crate::core::{ConstraintState, Feedback, Word, WordError};
use crate::lexicon::{Lexicon, LexiconEntry};
use thiserror::Error;

/// Solver settings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolverConfig {
    pub ranking: RankingConfig,
    /// Guess ceiling per solve; defaults to the lexicon size
    pub max_guesses: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("'{word}' is not a valid word: {source}")]
    InvalidWord { word: String, source: WordError },
    #[error("'{0}' is not in the lexicon")]
    NotInLexicon(String),
    #[error("ran out of candidates for '{secret}' after {guesses} guesses")]
    Exhausted { secret: String, guesses: usize },
    #[error("gave up on '{secret}' after {limit} guesses")]
    GuessLimitExceeded { secret: String, limit: usize },
}

/// Lifecycle of a single solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolvePhase {
    Initialized,
    AwaitingGuess,
    Evaluating,
    Solved,
    Exhausted,
}

/// One guess and its effect on the candidate pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Full record of a completed solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveTrace {
    pub opener: Word,
    pub secret: Word,
    pub steps: Vec<GuessStep>,
}

impl SolveTrace {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }
}

/// Ranks a lexicon once and runs solves against it
///
/// The solver is immutable after construction and can be shared across threads;
/// every solve gets its own constraint state and candidate pool.
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
    ranker: Ranker,
    ranked: Vec<&'a LexiconEntry>,
    max_guesses: usize,
}

impl<'a> Solver<'a> {
    /// Create a solver over `lexicon`
    ///
    /// # Examples
    /// ```
    /// use wordle_opener::lexicon::Lexicon;
    /// use wordle_opener::solver::{Solver, SolverConfig};
    ///
    /// let lexicon = Lexicon::parse(
    ///     r#"{"word": "crane", "score": 1, "frequency": 100}
    ///        {"word": "slate", "score": 2, "frequency": 90}
    ///        {"word": "torch", "score": 3, "frequency": 10}"#,
    /// )
    /// .unwrap();
    /// let solver = Solver::new(&lexicon, SolverConfig::default());
    ///
    /// assert_eq!(solver.solve("crane", "torch"), Ok(2));
    /// assert_eq!(solver.solve("torch", "torch"), Ok(1));
    /// ```
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, config: SolverConfig) -> Self {
        let ranker = Ranker::new(*lexicon.stats(), config.ranking);
        let all: Vec<&'a LexiconEntry> = lexicon.entries().iter().collect();
        let ranked = ranker.order(&all);
        let max_guesses = config.max_guesses.unwrap_or(lexicon.len()).max(1);

        Self {
            lexicon,
            ranker,
            ranked,
            max_guesses,
        }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[must_use]
    pub const fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    /// The whole lexicon in descending score order
    #[must_use]
    pub fn ranked(&self) -> &[&'a LexiconEntry] {
        &self.ranked
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// The highest-ranked word in the lexicon
    #[must_use]
    pub fn best_opener(&self) -> Option<&'a LexiconEntry> {
        self.ranked.first().copied()
    }

    /// Ranked candidates consistent with `state`
    ///
    /// Filtering keeps the input order, so the result is already ranked.
    #[must_use]
    pub fn candidates(&self, state: &ConstraintState) -> Vec<&'a LexiconEntry> {
        filter_candidates(&self.ranked, state)
    }

    /// The top-ranked candidate consistent with `state`
    #[must_use]
    pub fn suggest(&self, state: &ConstraintState) -> Option<&'a LexiconEntry> {
        self.ranked
            .iter()
            .copied()
            .find(|entry| state.admits(&entry.word))
    }

    /// Resolve a user-supplied word to its lexicon entry
    ///
    /// # Errors
    /// Returns `SolveError` if `word` is malformed or not in the lexicon.
    pub fn lookup(&self, word: &str) -> Result<&'a LexiconEntry, SolveError> {
        let parsed = Word::new(word).map_err(|source| SolveError::InvalidWord {
            word: word.to_string(),
            source,
        })?;

        self.lexicon
            .get(parsed.text())
            .ok_or_else(|| SolveError::NotInLexicon(parsed.text().to_string()))
    }

    /// Start a solve for `secret` opening with `opener`
    ///
    /// # Errors
    /// Returns `SolveError` if either word is malformed or not in the lexicon.
    pub fn session(&self, opener: &str, secret: &str) -> Result<Session<'_>, SolveError> {
        let opener = self.lookup(opener)?;
        let secret = self.lookup(secret)?;

        Ok(Session {
            solver: self,
            opener,
            secret,
            state: ConstraintState::new(),
            candidates: self.ranked.clone(),
            guesses: 0,
            phase: SolvePhase::Initialized,
        })
    }

    /// Number of guesses needed to find `secret` starting from `opener`
    ///
    /// # Errors
    /// Returns `SolveError` for invalid input, an emptied candidate pool, or
    /// hitting the guess ceiling.
    pub fn solve(&self, opener: &str, secret: &str) -> Result<usize, SolveError> {
        let mut session = self.session(opener, secret)?;
        while session.advance()?.is_some() {}
        Ok(session.guesses())
    }

    /// Like [`Solver::solve`], but keeps every guess and its feedback
    ///
    /// # Errors
    /// Same as [`Solver::solve`].
    pub fn solve_traced(&self, opener: &str, secret: &str) -> Result<SolveTrace, SolveError> {
        let mut session = self.session(opener, secret)?;
        let mut steps = Vec::new();
        while let Some(step) = session.advance()? {
            steps.push(step);
        }

        Ok(SolveTrace {
            opener: session.opener.word.clone(),
            secret: session.secret.word.clone(),
            steps,
        })
    }
}

/// State of one in-progress solve
pub struct Session<'a> {
    solver: &'a Solver<'a>,
    opener: &'a LexiconEntry,
    secret: &'a LexiconEntry,
    state: ConstraintState,
    candidates: Vec<&'a LexiconEntry>,
    guesses: usize,
    phase: SolvePhase,
}

impl<'a> Session<'a> {
    #[must_use]
    pub const fn phase(&self) -> SolvePhase {
        self.phase
    }

    /// Guesses made so far
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }

    /// Surviving candidates in ranked order
    #[must_use]
    pub fn candidates(&self) -> &[&'a LexiconEntry] {
        &self.candidates
    }

    /// Make and evaluate the next guess
    ///
    /// Returns `Ok(None)` once the secret has been found.
    ///
    /// # Errors
    /// Returns `SolveError::Exhausted` if no candidate is left to guess, and
    /// `SolveError::GuessLimitExceeded` if the guess ceiling is reached.
    pub fn advance(&mut self) -> Result<Option<GuessStep>, SolveError> {
        loop {
            match self.phase {
                SolvePhase::Initialized => self.phase = SolvePhase::AwaitingGuess,
                SolvePhase::Solved => return Ok(None),
                SolvePhase::Exhausted => {
                    return Err(SolveError::Exhausted {
                        secret: self.secret.word.text().to_string(),
                        guesses: self.guesses,
                    });
                }
                // Evaluating never outlives a single call
                SolvePhase::AwaitingGuess | SolvePhase::Evaluating => {
                    let guess = if self.guesses == 0 {
                        self.opener
                    } else if let Some(&top) = self.candidates.first() {
                        top
                    } else {
                        log::debug!("No candidates left for '{}'", self.secret.word);
                        self.phase = SolvePhase::Exhausted;
                        continue;
                    };

                    if self.guesses >= self.solver.max_guesses {
                        return Err(SolveError::GuessLimitExceeded {
                            secret: self.secret.word.text().to_string(),
                            limit: self.solver.max_guesses,
                        });
                    }

                    self.guesses += 1;
                    self.phase = SolvePhase::Evaluating;
                    return Ok(Some(self.evaluate(guess)));
                }
            }
        }
    }

    fn evaluate(&mut self, guess: &'a LexiconEntry) -> GuessStep {
        let secret = &self.secret.word;
        let candidates_before = self.candidates.len();
        let feedback = Feedback::calculate(&guess.word, secret);

        if guess.word == *secret {
            self.phase = SolvePhase::Solved;
            self.candidates.retain(|entry| entry.word == *secret);
        } else {
            self.state = self.state.evaluate_guess(&guess.word, secret);
            self.candidates = filter_candidates(&self.candidates, &self.state);
            self.phase = SolvePhase::AwaitingGuess;
        }

        log::trace!(
            "{} x {}: guess {} {} ({} -> {} candidates)",
            self.opener.word,
            secret,
            self.guesses,
            guess.word,
            candidates_before,
            self.candidates.len()
        );

        GuessStep {
            guess: guess.word.clone(),
            feedback,
            candidates_before,
            candidates_after: self.candidates.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_lexicon() -> Lexicon {
        Lexicon::parse(
            r#"{"word": "crane", "score": 1, "frequency": 100}
{"word": "slate", "score": 2, "frequency": 90}
{"word": "torch", "score": 3, "frequency": 10}"#,
        )
        .unwrap()
    }

    #[test]
    fn ranked_lexicon_prefers_low_usage_rank() {
        let lexicon = tiny_lexicon();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        let ranked: Vec<&str> = solver.ranked().iter().map(|e| e.word.text()).collect();
        assert_eq!(ranked, vec!["crane", "slate", "torch"]);
        assert_eq!(solver.best_opener().unwrap().word.text(), "crane");
        assert_eq!(solver.max_guesses(), 3);
    }

    #[test]
    fn guessing_the_secret_first_takes_one_guess() {
        let lexicon = Lexicon::sample().unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        for entry in lexicon.entries() {
            let word = entry.word.text();
            assert_eq!(solver.solve(word, word), Ok(1));
        }
    }

    #[test]
    fn crane_then_torch() {
        let lexicon = tiny_lexicon();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        let trace = solver.solve_traced("crane", "torch").unwrap();
        let guesses: Vec<&str> = trace.steps.iter().map(|s| s.guess.text()).collect();

        assert_eq!(guesses, vec!["crane", "torch"]);
        assert_eq!(trace.guess_count(), 2);
        assert_eq!(trace.steps[0].feedback.to_string(), "YY---");
        assert_eq!(trace.steps[0].candidates_before, 3);
        assert_eq!(trace.steps[0].candidates_after, 1);
        assert!(trace.steps[1].feedback.is_solved());
    }

    #[test]
    fn slate_then_torch() {
        let lexicon = tiny_lexicon();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        // SLATE leaves T as required, which rules out CRANE
        let trace = solver.solve_traced("slate", "torch").unwrap();
        let guesses: Vec<&str> = trace.steps.iter().map(|s| s.guess.text()).collect();
        assert_eq!(guesses, vec!["slate", "torch"]);
    }

    #[test]
    fn empty_pool_exhausts_the_session() {
        let lexicon = tiny_lexicon();
        let solver = Solver::new(&lexicon, SolverConfig::default());
        let mut session = solver.session("crane", "torch").unwrap();

        session.advance().unwrap().unwrap();
        // A fact the secret contradicts empties the pool
        session.state = session.state.exclude('h').unwrap();
        session.candidates = filter_candidates(&session.candidates, &session.state);
        assert!(session.candidates().is_empty());

        let expected: Result<Option<GuessStep>, _> = Err(SolveError::Exhausted {
            secret: "torch".to_string(),
            guesses: 1,
        });
        assert_eq!(session.advance(), expected);
        assert_eq!(session.phase(), SolvePhase::Exhausted);
        assert_eq!(session.advance(), expected);
    }

    #[test]
    fn every_pair_terminates_within_lexicon_size() {
        let lexicon = Lexicon::sample().unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        for opener in lexicon.entries().iter().step_by(7) {
            for secret in lexicon.entries() {
                let count = solver
                    .solve(opener.word.text(), secret.word.text())
                    .unwrap();
                assert!(count >= 1);
                assert!(count <= lexicon.len());
            }
        }
    }

    #[test]
    fn solves_are_deterministic() {
        let lexicon = Lexicon::sample().unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        let first = solver.solve_traced("audio", "shore").unwrap();
        let second = solver.solve_traced("audio", "shore").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn candidate_pool_shrinks_every_guess() {
        let lexicon = Lexicon::sample().unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        let trace = solver.solve_traced("crane", "vivid").unwrap();
        for step in &trace.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(trace.steps.last().unwrap().guess.text(), "vivid");
    }

    #[test]
    fn invalid_inputs_fail_before_solving() {
        let lexicon = tiny_lexicon();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        assert_eq!(
            solver.solve("crane", "pizza"),
            Err(SolveError::NotInLexicon("pizza".to_string()))
        );
        assert!(matches!(
            solver.solve("cranes", "torch"),
            Err(SolveError::InvalidWord {
                source: WordError::InvalidLength(6),
                ..
            })
        ));
        assert_eq!(solver.solve("CRANE", "Torch"), Ok(2));
    }

    #[test]
    fn guess_ceiling_is_enforced() {
        let lexicon = tiny_lexicon();
        let config = SolverConfig {
            max_guesses: Some(1),
            ..SolverConfig::default()
        };
        let solver = Solver::new(&lexicon, config);

        assert_eq!(
            solver.solve("crane", "torch"),
            Err(SolveError::GuessLimitExceeded {
                secret: "torch".to_string(),
                limit: 1
            })
        );
        assert_eq!(solver.solve("torch", "torch"), Ok(1));
    }

    #[test]
    fn session_walks_through_phases() {
        let lexicon = tiny_lexicon();
        let solver = Solver::new(&lexicon, SolverConfig::default());
        let mut session = solver.session("crane", "torch").unwrap();

        assert_eq!(session.phase(), SolvePhase::Initialized);
        assert_eq!(session.candidates().len(), 3);

        let step = session.advance().unwrap().unwrap();
        assert_eq!(step.guess.text(), "crane");
        assert_eq!(session.phase(), SolvePhase::AwaitingGuess);
        assert_eq!(session.guesses(), 1);
        assert!(session.state().required().contains(b'c'));

        session.advance().unwrap().unwrap();
        assert_eq!(session.phase(), SolvePhase::Solved);
        assert_eq!(session.advance(), Ok(None));
        assert_eq!(session.guesses(), 2);
    }

    #[test]
    fn suggest_matches_top_candidate() {
        let lexicon = Lexicon::sample().unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());
        let state = ConstraintState::new().require('z').unwrap();

        let candidates = solver.candidates(&state);
        assert_eq!(solver.suggest(&state), candidates.first().copied());
        assert_eq!(
            solver.suggest(&ConstraintState::new()),
            solver.best_opener()
        );
    }
}
