//! Interactive CLI mode
//!
//! Suggests a guess each round and narrows the candidates from what the user
//! reports back, either as a feedback pattern for the suggestion or as letters
//! entered by hand.

use crate::core::{ConstraintError, ConstraintState, Feedback, WORD_LENGTH};
use crate::output::formatters::{confirmed_row, letter_list, position_exclusion_list};
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Most candidates listed in a round
const SHOWN_CANDIDATES: usize = 10;

/// Malformed manual constraint input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected position:letters such as '1:r', got '{0}'")]
    InvalidPositionSpec(String),
    #[error("confirmed letters must be 5 characters of letters or '_', got '{0}'")]
    InvalidPattern(String),
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

/// Constraints typed in by hand; positions are 0-based
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualConstraints {
    pub excluded: Vec<char>,
    pub required: Vec<char>,
    pub position_exclusions: Vec<(usize, char)>,
    pub confirmed: Vec<(usize, char)>,
}

impl ManualConstraints {
    /// Parse the four manual prompts
    ///
    /// `positions` holds 1-based `position:letters` groups (`1:r 3:ae`) and
    /// `confirmed` a board row where `_` marks an unknown slot (`__a_e`).
    /// Blank answers contribute nothing.
    ///
    /// # Errors
    /// Returns `InputError` if a position group or the confirmed row is malformed.
    pub fn parse(
        excluded: &str,
        required: &str,
        positions: &str,
        confirmed: &str,
    ) -> Result<Self, InputError> {
        Ok(Self {
            excluded: letters(excluded),
            required: letters(required),
            position_exclusions: parse_positions(positions)?,
            confirmed: parse_confirmed(confirmed)?,
        })
    }

    /// Fold these constraints into `state`
    ///
    /// # Errors
    /// Returns `ConstraintError` if they contradict each other or `state`.
    pub fn apply(&self, state: &ConstraintState) -> Result<ConstraintState, ConstraintError> {
        let mut next = *state;
        for &(position, letter) in &self.confirmed {
            next = next.confirm_at(position, letter)?;
        }
        for &(position, letter) in &self.position_exclusions {
            next = next.exclude_at(position, letter)?;
        }
        for &letter in &self.required {
            next = next.require(letter)?;
        }
        for &letter in &self.excluded {
            next = next.exclude(letter)?;
        }
        Ok(next)
    }
}

fn letters(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect()
}

fn parse_positions(text: &str) -> Result<Vec<(usize, char)>, InputError> {
    let mut parsed = Vec::new();

    for group in text.split_whitespace() {
        let (position, group_letters) = group
            .split_once(':')
            .ok_or_else(|| InputError::InvalidPositionSpec(group.to_string()))?;
        let position: usize = position
            .parse()
            .map_err(|_| InputError::InvalidPositionSpec(group.to_string()))?;
        if !(1..=WORD_LENGTH).contains(&position) {
            return Err(ConstraintError::InvalidPosition(position).into());
        }
        if group_letters.is_empty() {
            return Err(InputError::InvalidPositionSpec(group.to_string()));
        }

        parsed.extend(group_letters.chars().map(|letter| (position - 1, letter)));
    }

    Ok(parsed)
}

fn parse_confirmed(text: &str) -> Result<Vec<(usize, char)>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    if text.chars().count() != WORD_LENGTH {
        return Err(InputError::InvalidPattern(text.to_string()));
    }

    Ok(text
        .chars()
        .enumerate()
        .filter(|(_, c)| !matches!(c, '_' | '.' | '-'))
        .collect())
}

/// Print `message`, then read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask the four manual questions; `None` at end of input
fn read_manual<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<[String; 4]>> {
    let questions = [
        "Letters not in the word",
        "Letters in the word",
        "Letters ruled out at a position (e.g. 1:r 3:ae)",
        "Confirmed letters (e.g. __a_e)",
    ];

    let mut answers: [String; 4] = Default::default();
    for (answer, question) in answers.iter_mut().zip(questions) {
        match prompt(input, output, question)? {
            Some(line) => *answer = line,
            None => return Ok(None),
        }
    }
    Ok(Some(answers))
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "candidate" } else { "candidates" }
}

/// Run the interactive solver over `input` and `output`
///
/// Returns when the user quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive loop handles every command inline
pub fn run_interactive<R: BufRead, W: Write>(
    solver: &Solver<'_>,
    mut input: R,
    mut output: W,
) -> anyhow::Result<()> {
    writeln!(output, "\n{}", "Wordle Solver - Interactive Mode".bright_cyan().bold())?;
    writeln!(output, "After each guess, enter the feedback for the suggestion:")?;
    writeln!(output, "  - G/g/🟩 for correct position")?;
    writeln!(output, "  - Y/y/🟨 for wrong position")?;
    writeln!(output, "  - -/_/⬜ for not in word")?;
    writeln!(output, "  - or press Enter to type the constraints yourself")?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last step\n")?;

    let mut state = ConstraintState::new();
    let mut undo: Vec<ConstraintState> = Vec::new();

    loop {
        let candidates = solver.candidates(&state);
        let turn = undo.len() + 1;

        writeln!(output, "{}", "─".repeat(60))?;
        writeln!(
            output,
            "Turn {turn}: {} {} remaining",
            candidates.len(),
            plural(candidates.len())
        )?;
        if !state.is_empty() {
            writeln!(
                output,
                "  Confirmed: {}  Present: {}  Absent: {}  Not at: {}",
                confirmed_row(&state),
                letter_list(state.required()),
                letter_list(state.excluded()),
                position_exclusion_list(&state)
            )?;
        }

        let suggestion = candidates.first().copied();
        match suggestion {
            Some(entry) => {
                writeln!(
                    output,
                    "\n📊 Suggested guess: {}",
                    entry.word.text().to_uppercase().bright_yellow().bold()
                )?;
                let shown: Vec<String> = candidates
                    .iter()
                    .take(SHOWN_CANDIDATES)
                    .map(|c| c.word.text().to_uppercase())
                    .collect();
                writeln!(output, "   Top candidates: {}\n", shown.join(" "))?;
            }
            None => {
                writeln!(
                    output,
                    "\n{}",
                    "❌ No candidates remain! Type 'undo' to go back, or 'new' to start over."
                        .red()
                )?;
            }
        }

        let Some(line) = prompt(&mut input, &mut output, "Feedback (G/Y/-), Enter, or command")?
        else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                state = ConstraintState::new();
                undo.clear();
                writeln!(output, "\n🔄 New game started!\n")?;
            }
            "undo" | "u" => match undo.pop() {
                Some(previous) => {
                    state = previous;
                    writeln!(output, "✓ Undone! Back to turn {}\n", undo.len() + 1)?;
                }
                None => writeln!(output, "Nothing to undo!\n")?,
            },
            "" => {
                let Some([excluded, required, positions, confirmed]) =
                    read_manual(&mut input, &mut output)?
                else {
                    return Ok(());
                };

                let next = ManualConstraints::parse(&excluded, &required, &positions, &confirmed)
                    .and_then(|manual| manual.apply(&state).map_err(InputError::from));
                match next {
                    Ok(next) => {
                        log::debug!("Manual constraints applied: {next:?}");
                        undo.push(state);
                        state = next;
                    }
                    Err(e) => writeln!(output, "❌ {e}\n")?,
                }
            }
            pattern => {
                let Some(feedback) = Feedback::parse(pattern) else {
                    writeln!(output, "❌ Invalid pattern! Use G/Y/- such as 'GY--G'\n")?;
                    continue;
                };
                let Some(entry) = suggestion else {
                    writeln!(output, "❌ There is no suggestion to give feedback on\n")?;
                    continue;
                };

                if feedback.is_solved() {
                    writeln!(
                        output,
                        "\n{}",
                        format!(
                            "🎉 Solved with {} in {turn} {}!",
                            entry.word.text().to_uppercase(),
                            if turn == 1 { "guess" } else { "guesses" }
                        )
                        .bright_green()
                        .bold()
                    )?;
                    state = ConstraintState::new();
                    undo.clear();
                    writeln!(output, "\n🔄 New game started!\n")?;
                    continue;
                }

                match state.apply_feedback(&entry.word, &feedback) {
                    Ok(next) => {
                        undo.push(state);
                        state = next;
                    }
                    Err(e) => writeln!(output, "❌ {e}\n")?,
                }
            }
        }
    }
}
