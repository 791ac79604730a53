//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{RankedWord, SweepSummary};
use crate::solver::SolveTrace;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(trace: &SolveTrace, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  (opener {})",
        trace.secret.text().to_uppercase().bright_yellow().bold(),
        trace.opener.text().to_uppercase()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in trace.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.guess, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    let count = trace.guess_count();
    println!();
    println!(
        "{}",
        format!(
            "✅ Solved in {count} {}!",
            if count == 1 { "guess" } else { "guesses" }
        )
        .green()
        .bold()
    );
}

/// Print the highest-ranked lexicon words
pub fn print_ranking(words: &[RankedWord]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TOP RANKED WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let max_score = words.first().map_or(0.0, |w| w.score);
    for (i, word) in words.iter().enumerate() {
        let bar = create_progress_bar(word.score, max_score, 20);
        println!(
            "  {:>3}. {}  [{}] {}  rank {:>5}  freq {:>8.2}",
            i + 1,
            word.word.to_uppercase().bright_white().bold(),
            bar.green(),
            format!("{:8.3}", word.score).bright_yellow(),
            word.usage_rank,
            word.frequency
        );
    }
}

/// Print the outcome of an opener sweep
pub fn print_sweep_summary(summary: &SweepSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SWEEP RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Secrets per opener: {}", summary.secrets);
    println!("   Openers evaluated:  {}", summary.evaluated);
    println!("   Openers resumed:    {}", summary.resumed);
    if summary.failed_pairs > 0 {
        println!(
            "   Failed pairs:       {}",
            summary.failed_pairs.to_string().yellow()
        );
    }
    println!(
        "   Time taken:         {:.2}s",
        summary.duration.as_secs_f64()
    );

    match &summary.best {
        Some(best) => println!(
            "\n🏆 Best opener: {} ({} guesses on average)",
            best.word.to_uppercase().bright_green().bold(),
            format!("{:.3}", best.average_guess_count).bright_yellow()
        ),
        None => println!("\n{}", "❌ No opener produced a result".red().bold()),
    }
}
