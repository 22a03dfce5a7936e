//! Five-card stud hand analyzer.
//!
//! With no arguments, shuffles a fresh deck, deals six hands and prints them
//! in winning order. Given a file, ranks the six hands it lists instead.
//!
//! Set `RUST_LOG=debug` to trace classification on stderr.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use stud_core::deck::{Deck, HandSource};
use stud_core::protocol::RankingReport;
use stud_core::ranking::rank_source;
use stud_core::test_deck::TestDeck;
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Parser)]
#[command(name = "stud")]
#[command(about = "Deal six five-card stud hands and rank them", long_about = None)]
struct Cli {
    /// Test deck: six lines of five comma-separated cards
    file: Option<PathBuf>,

    /// Seed the shuffle for a reproducible deal
    #[arg(short, long, conflicts_with = "file")]
    seed: Option<u64>,

    /// Also print the winning order as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}\n", report::BANNER)?;

    let ranked = match &cli.file {
        Some(path) => {
            writeln!(out, "*** USING TEST DECK ***\n")?;
            writeln!(out, "*** File: {}", path.display())?;
            let deck = TestDeck::from_path(path)?;
            report::write_test_rows(&mut out, &deck)?;
            report::write_hands(&mut out, &deck.hands())?;
            rank_source(&deck)?
        }
        None => {
            writeln!(out, "*** USING RANDOMIZED DECK OF CARDS ***\n")?;
            let deck = match cli.seed {
                Some(seed) => {
                    tracing::debug!(seed, "seeded shuffle");
                    Deck::shuffled(&mut StdRng::seed_from_u64(seed))
                }
                None => Deck::shuffled(&mut rand::rng()),
            };
            report::write_shuffled_deck(&mut out, &deck)?;
            report::write_hands(&mut out, &deck.hands())?;
            report::write_remaining(&mut out, deck.remaining())?;
            rank_source(&deck)?
        }
    };

    report::write_winning_order(&mut out, &ranked)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&RankingReport::new(&ranked))?;
        writeln!(out, "{json}")?;
    }
    Ok(())
}
