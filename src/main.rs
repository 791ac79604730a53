//! Wordle Opener - CLI
//!
//! Interactive solving, single-word traces, lexicon ranking, and opener sweeps.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_opener::{
    commands::{SolveConfig, SweepConfig, rank_words, run_interactive, run_sweep, solve_word},
    lexicon::Lexicon,
    output::{print_ranking, print_solve_result, print_sweep_summary},
    solver::{RankingConfig, Solver, SolverConfig},
};

#[derive(Parser)]
#[command(
    name = "wordle_opener",
    about = "Greedy Wordle solver and opening-word sweeper",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON Lines lexicon; the bundled sample lexicon when omitted
    #[arg(short = 'l', long, global = true)]
    lexicon: Option<PathBuf>,

    /// Score scale K
    #[arg(long, global = true, default_value_t = RankingConfig::DEFAULT_SCALE)]
    scale: f64,

    /// Frequency decay base, between 0 and 1
    #[arg(long, global = true, default_value_t = RankingConfig::DEFAULT_DECAY)]
    decay: f64,

    /// Guess ceiling per solve (default: lexicon size)
    #[arg(long, global = true)]
    max_guesses: Option<usize>,

    /// Debug logging
    #[arg(short, long, global = true, conflicts_with = "silent")]
    verbose: bool,

    /// Errors only, no progress bars
    #[arg(short, long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver (default)
    Interactive,

    /// Solve a specific secret word
    Solve {
        /// The secret word to solve
        secret: String,

        /// First guess (default: top-ranked word)
        #[arg(short, long)]
        opener: Option<String>,
    },

    /// Find the opener with the lowest average guess count
    Sweep {
        /// Openers to evaluate (default: every lexicon word)
        #[arg(long, num_args = 1..)]
        openers: Vec<String>,

        /// Evaluate only the N top-ranked openers
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Evaluate against N randomly chosen secrets
        #[arg(long)]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Append results here; openers already recorded are skipped
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the top-ranked words
    Rank {
        /// Number of words to show
        #[arg(short = 'n', long, default_value_t = 20)]
        top: usize,
    },
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.silent {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn load_lexicon(path: Option<&PathBuf>) -> Result<Lexicon> {
    match path {
        Some(path) => Lexicon::load(path)
            .with_context(|| format!("failed to load lexicon {}", path.display())),
        None => Lexicon::sample().context("bundled lexicon is unusable"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let lexicon = load_lexicon(cli.lexicon.as_ref())?;
    let config = SolverConfig {
        ranking: RankingConfig::new(cli.scale, cli.decay)?,
        max_guesses: cli.max_guesses,
    };
    let solver = Solver::new(&lexicon, config);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => run_interactive(&solver, io::stdin().lock(), io::stdout()),
        Commands::Solve { secret, opener } => {
            let mut config = SolveConfig::new(secret);
            if let Some(opener) = opener {
                config = config.with_opener(opener);
            }
            let trace = solve_word(&config, &solver)?;
            print_solve_result(&trace, cli.verbose);
            Ok(())
        }
        Commands::Sweep {
            openers,
            limit,
            sample,
            seed,
            output,
        } => {
            let config = SweepConfig {
                openers,
                limit,
                sample,
                seed,
                output,
                show_progress: !cli.silent,
            };
            let summary = run_sweep(&solver, &config)?;
            print_sweep_summary(&summary);
            Ok(())
        }
        Commands::Rank { top } => {
            print_ranking(&rank_words(&solver, top));
            Ok(())
        }
    }
}
