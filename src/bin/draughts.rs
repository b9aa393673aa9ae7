use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;

use draughts::checkers::{
    Game, GameStatus,
    board::notation::{format_square, parse_square},
};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "draughts", version, about = "Two-player console checkers")]
struct Args {}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();
    log::debug!("Command line arguments: {args:?}");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    let mut game = Game::new();

    // Turn loop
    loop {
        // Print board state
        println!("{board}", board = game.board());

        match game.status() {
            // Game has finished
            GameStatus::Finished(outcome) => {
                log::info!("Game over: {outcome}");
                println!("{outcome}");
                break;
            }

            // Waiting for a movement
            GameStatus::Playing(player) => {
                print!("{player} move (e.g., b6 a5): ");
                std::io::stdout()
                    .flush()
                    .with_context(|| "Failed to flush prompt")?;

                let Some(line) = lines.next() else {
                    log::info!("Input stream closed, ending session");
                    break;
                };
                let line = line.with_context(|| "Failed to read move")?;

                // Expect exactly two whitespace separated squares
                let Some((from_text, to_text)) = line.split_whitespace().collect_tuple() else {
                    println!("Invalid input. Use: <from> <to>");
                    continue;
                };

                // Parse both squares, same player retries on error
                let (from, to) = match (parse_square(from_text), parse_square(to_text)) {
                    (Ok(from), Ok(to)) => (from, to),
                    (Err(e), _) | (_, Err(e)) => {
                        println!("Error: {e}");
                        continue;
                    }
                };

                match game.play(from, to) {
                    Ok(_) => log::debug!(
                        "{player} moved {from} {to}",
                        from = format_square(from),
                        to = format_square(to)
                    ),
                    Err(e) => {
                        log::debug!("Movement rejected: {e}");
                        println!("Invalid move");
                    }
                }
            }
        }
    }

    Ok(())
}
