mod config;
mod dictionary;
mod game;
mod models;
mod utils;

use std::collections::HashSet;

use anyhow::Result;
use config::Config;
use dictionary::Dictionary;
use game::{input, GridGenerator, WordValidator};
use models::{Grid, Outcome, WordCategory};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "target_ua=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let grid = GridGenerator::generate();
    print_grid(&grid);

    let target = WordCategory::random_target();
    println!(
        "Enter {}s starting with one of the letters above, \
         up to {} letters each, one per line. End with Ctrl-D.",
        target,
        dictionary::MAX_WORD_LEN
    );

    let dict = Dictionary::load(&config.game.dictionary_path, &grid).await?;
    if dict.is_empty() {
        tracing::warn!(
            "No playable words in {} for this grid",
            config.game.dictionary_path
        );
    }

    let words = input::collect_words(BufReader::new(tokio::io::stdin())).await?;
    tracing::debug!("Player submitted {} lines", words.len());

    let validator = WordValidator::new(dict, target, grid);
    let outcome = validator.check(&words);
    print_outcome(&outcome);

    Ok(())
}

/// Print the playing field, letters space-separated
fn print_grid(grid: &Grid) {
    let letters: Vec<String> = grid.iter().map(|ch| ch.to_string()).collect();
    println!("{}", letters.join(" "));
}

/// Print the two result lists as indented bullets
fn print_outcome(outcome: &Outcome) {
    println!("Valid words:");
    for word in sorted(&outcome.accepted) {
        println!("  - {}", word);
    }
    println!("Forgotten words:");
    for word in sorted(&outcome.missed) {
        println!("  - {}", word);
    }
}

/// Sort a word set for stable output
fn sorted(words: &HashSet<String>) -> Vec<&String> {
    let mut words: Vec<&String> = words.iter().collect();
    words.sort();
    words
}
