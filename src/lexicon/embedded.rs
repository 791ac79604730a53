//! Lexicon compiled into the binary

/// JSON Lines sample lexicon used when no `--lexicon` path is given
pub const SAMPLE_LEXICON: &str = include_str!("../../data/sample_lexicon.jsonl");
