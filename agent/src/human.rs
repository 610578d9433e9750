//! Interactive human-vs-computer play.
//!
//! The human plays Red from the terminal; the computer answers as Yellow
//! with the single-level UCB strategy at the configured simulation count.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Context, Result};
use connect4::{Board, Outcome, Player, COLS};
use mcts::{Report, Strategy, Verbosity};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

/// Run a game against the computer, starting from the given board.
pub fn play(board: Board, simulations: u32, rng: &mut ChaCha20Rng) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_game(board, simulations, rng, &mut input)
}

fn run_game(
    mut board: Board,
    simulations: u32,
    rng: &mut ChaCha20Rng,
    input: &mut dyn BufRead,
) -> Result<()> {
    println!("Human player: R, Computer player: Y");

    loop {
        if board.legal_moves().is_empty() {
            println!("Draw");
            return Ok(());
        }

        println!("Current board:");
        print!("{board}");
        println!();

        let column = read_column(&board, input)?;
        let placed = board.drop_piece(column, Player::Red)?;
        match board.outcome_after(placed) {
            Some(Outcome::Win(_)) => {
                print!("{board}");
                println!("RED WINS");
                return Ok(());
            }
            Some(Outcome::Draw) => {
                println!("Draw");
                return Ok(());
            }
            None => {}
        }

        println!("Computer is thinking...");
        let mut report = Report::new(io::sink(), Verbosity::Quiet);
        let decision =
            Strategy::Ucb { simulations }.select(&board, Player::Yellow, &mut report, rng)?;
        let Some(column) = decision.best else {
            println!("Draw");
            return Ok(());
        };
        println!("Computer chose column {}", column + 1);
        debug!(column = column + 1, "computer move");

        let placed = board.drop_piece(column, Player::Yellow)?;
        match board.outcome_after(placed) {
            Some(Outcome::Win(_)) => {
                print!("{board}");
                println!("YELLOW WINS");
                return Ok(());
            }
            Some(Outcome::Draw) => {
                println!("Draw");
                return Ok(());
            }
            None => {}
        }
    }
}

/// Prompt until the human enters a legal 1-based column.
fn read_column(board: &Board, input: &mut dyn BufRead) -> Result<usize> {
    loop {
        print!("Enter a column (1-{COLS}): ");
        io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("reading move")?;
        if read == 0 {
            return Err(anyhow!("input closed before the game finished"));
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=COLS).contains(&n) && board.is_legal(n - 1) => return Ok(n - 1),
            _ => println!("Illegal move chosen"),
        }
    }
}
