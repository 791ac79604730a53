//! Lexicon ranking command
//!
//! Lists the words the solver would try first, with their scores.

use crate::solver::Solver;

/// A lexicon word with its ranking score
pub struct RankedWord {
    pub word: String,
    pub usage_rank: i64,
    pub frequency: f64,
    pub score: f64,
}

/// The `top` highest-scoring words in ranked order
#[must_use]
pub fn rank_words(solver: &Solver<'_>, top: usize) -> Vec<RankedWord> {
    let ranker = solver.ranker();

    solver
        .ranked()
        .iter()
        .take(top)
        .map(|entry| RankedWord {
            word: entry.word.text().to_string(),
            usage_rank: entry.usage_rank,
            frequency: entry.frequency,
            score: ranker.rank(entry),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::solver::SolverConfig;

    #[test]
    fn rank_words_is_descending_and_limited() {
        let lexicon = Lexicon::sample().unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        let ranked = rank_words(&solver, 10);
        assert_eq!(ranked.len(), 10);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(ranked[0].word, solver.best_opener().unwrap().word.text());
    }

    #[test]
    fn rank_words_caps_at_lexicon_size() {
        let lexicon = Lexicon::parse(r#"{"word": "crane", "score": 1, "frequency": 1}"#).unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        assert_eq!(rank_words(&solver, 50).len(), 1);
    }
}
