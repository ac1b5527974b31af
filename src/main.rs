//! Terminal driver for the connect-K engine
//!
//! Plays a human against the engine in the terminal. The driver holds no
//! game logic: it parses configuration, prints the board, reads human
//! moves from stdin, and asks the engine for the computer's moves.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use connectk::{Engine, GameConfig, GameState, Outcome, Pos, Stone};

/// Connect-K: play K-in-a-row against an alpha-beta engine
#[derive(Parser)]
#[command(name = "connectk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length (the grid is N x N)
    #[arg(long, default_value_t = 15)]
    board_size: usize,

    /// Stones in an unbroken line needed to win
    #[arg(long, default_value_t = 5)]
    win_length: usize,

    /// Maximum search depth for the alpha-beta fallback
    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Candidate radius around existing stones (Chebyshev distance)
    #[arg(long, default_value_t = 1)]
    expansion_range: usize,

    /// Disable the high-impact heuristic
    #[arg(long)]
    no_high_impact: bool,

    /// Let the computer make the first move
    #[arg(long)]
    computer_first: bool,

    /// Seed for the engine's opening randomness
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn config(&self) -> GameConfig {
        // First mover is always Black; the flag decides who plays Black.
        let computer = if self.computer_first {
            Stone::Black
        } else {
            Stone::White
        };
        GameConfig {
            board_size: self.board_size,
            win_length: self.win_length,
            max_depth: self.depth,
            expansion_range: self.expansion_range,
            high_impact_enabled: !self.no_high_impact,
            computer,
            first_mover: Stone::Black,
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let mut game = GameState::new(config.clone()).context("invalid configuration")?;
    let mut engine = Engine::new(config.clone()).context("invalid configuration")?;

    let human = config.computer.opponent();
    println!(
        "connect-{} on a {}x{} board; you play {}, enter moves as: row col",
        config.win_length,
        config.board_size,
        config.board_size,
        side_name(human)
    );

    loop {
        println!("{}", game.board());

        if let Some(outcome) = game.outcome() {
            match outcome {
                Outcome::Win(stone) if stone == config.computer => {
                    println!("Computer ({}) wins.", side_name(stone));
                }
                Outcome::Win(stone) => println!("You ({}) win.", side_name(stone)),
                Outcome::Draw => println!("Draw."),
            }
            return Ok(());
        }

        if game.current_turn() == config.computer {
            let result = engine.next_move_with_stats(&game);
            let Some(pos) = result.best_move else {
                bail!("engine found no move on a playable board");
            };
            info!(
                kind = ?result.kind,
                score = result.score,
                time_ms = result.time_ms,
                nodes = result.nodes,
                "engine decision"
            );
            println!("Computer plays ({}, {})", pos.row, pos.col);
            game.apply_move(pos)
                .context("engine produced an illegal move")?;
        } else {
            let pos = read_move()?;
            if let Err(err) = game.apply_move(pos) {
                println!("{err}; try again");
            }
        }
    }
}

fn side_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "X",
        Stone::White => "O",
        Stone::Empty => ".",
    }
}

/// Read a "row col" pair from stdin, re-prompting on malformed input.
fn read_move() -> anyhow::Result<Pos> {
    let stdin = io::stdin();
    loop {
        print!("your move> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("stdin closed");
        }

        let mut parts = line.split_whitespace();
        match (
            parts.next().and_then(|s| s.parse::<u8>().ok()),
            parts.next().and_then(|s| s.parse::<u8>().ok()),
        ) {
            (Some(row), Some(col)) => return Ok(Pos::new(row, col)),
            _ => println!("enter two numbers: row col"),
        }
    }
}
