//! Connect Four decision CLI.
//!
//! Reads a board file naming an algorithm, the player to move, and the
//! board position, then prints the selected column:
//!
//! ```text
//! agent <input_file> <output_mode> <simulations>
//! ```
//!
//! Exit code 0 covers resolved decisions, including a full board (a draw,
//! not a failure); usage errors and malformed board files exit with 1.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use mcts::{Report, Strategy, Verbosity};
use tracing::info;

mod config;
mod human;
mod loader;

use crate::config::Config;
use crate::loader::AlgorithmTag;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr; stdout carries only the decision protocol.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> ExitCode {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(err) => {
            // --help and --version surface as parse errors; keep their
            // conventional zero exit while usage mistakes exit with 1.
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

    let file = loader::load_board_file(&config.input_file)?;
    let mut rng = config.rng();

    info!(
        algorithm = %file.algorithm,
        player = %file.player,
        simulations = config.simulations,
        "board file loaded"
    );

    if file.algorithm == AlgorithmTag::Human {
        return human::play(file.board, config.simulations, &mut rng);
    }

    println!(
        "{}: {} with {} simulations",
        file.algorithm.description(),
        config.output_mode,
        config.simulations
    );
    println!("Board:");
    print!("{}", file.board);
    println!();

    let strategy = match file.algorithm {
        AlgorithmTag::UniformRandom => Strategy::UniformRandom,
        AlgorithmTag::FlatMonteCarlo => Strategy::FlatMonteCarlo {
            simulations: config.simulations,
        },
        AlgorithmTag::Uct => Strategy::Ucb {
            simulations: config.simulations,
        },
        AlgorithmTag::Human => unreachable!("handled above"),
    };

    let stdout = io::stdout();
    let mut report = Report::new(stdout.lock(), config.output_mode);
    let decision = strategy.select(&file.board, file.player, &mut report, &mut rng)?;
    drop(report);

    match decision.best {
        Some(column) => {
            // The legacy uniform-random output echoes the board after its
            // move in the non-quiet modes.
            if file.algorithm == AlgorithmTag::UniformRandom
                && config.output_mode != Verbosity::Quiet
            {
                let mut after = file.board.clone();
                after.drop_piece(column, file.player)?;
                println!("Final board state:");
                print!("{after}");
                println!();
            }
            info!(column = column + 1, "decision resolved");
        }
        // A full board is a draw for the caller, not a failure.
        None => println!("No valid moves available."),
    }

    Ok(())
}
