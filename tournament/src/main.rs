//! Round-robin tournament over the move-selection strategies.
//!
//! Every unordered pairing of the roster plays a fixed number of games
//! from the empty board; wins per side and draws are tallied and written
//! to a JSON artifact.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

mod config;
mod driver;
mod results;

use crate::config::Config;
use crate::results::{PairingResult, TournamentResults};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn game_progress(total_games: u64) -> ProgressBar {
    let bar = ProgressBar::new(total_games);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    bar
}

fn main() -> ExitCode {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(config: Config) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_level)?;

    let roster = config.roster();
    let pairs = driver::pairings(&roster);
    let total_games = pairs.len() as u64 * config.games_per_pair as u64;

    info!(
        entries = roster.len(),
        pairings = pairs.len(),
        games_per_pair = config.games_per_pair,
        "tournament starting"
    );

    let progress = game_progress(total_games);
    let mut rng = config.rng();
    let mut results = TournamentResults::new(config.games_per_pair);

    for (red, yellow) in pairs {
        progress.set_message(format!("{red} vs {yellow}"));

        let mut tally = PairingResult::new(red, yellow);
        for _ in 0..config.games_per_pair {
            tally.record(driver::play_game(red, yellow, &mut rng)?);
            progress.inc(1);
        }

        progress.println(format!(
            "{} had {} wins against {} who had {} wins",
            red, tally.red_wins, yellow, tally.yellow_wins
        ));
        progress.println(format!("There were {} draws", tally.draws));

        info!(
            red = %red,
            yellow = %yellow,
            red_wins = tally.red_wins,
            yellow_wins = tally.yellow_wins,
            draws = tally.draws,
            "pairing complete"
        );
        results.pairings.push(tally);
    }

    progress.finish_and_clear();

    results.write_json(&config.output)?;
    info!(path = %config.output.display(), "results written");

    Ok(())
}
