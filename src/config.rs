//! Game and engine configuration
//!
//! Every tunable lives here and is supplied by the caller: board geometry,
//! win length, search limits, player assignment. Nothing in the engine
//! hardcodes these.

use crate::board::Stone;
use crate::error::{Error, Result};

/// Configuration for one game and the engine playing it.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Board side length N (the grid is N x N)
    pub board_size: usize,
    /// Stones in an unbroken line required to win (K)
    pub win_length: usize,
    /// Maximum alpha-beta search depth
    pub max_depth: u8,
    /// Chebyshev radius around existing stones within which candidate
    /// moves are generated
    pub expansion_range: usize,
    /// Whether the decision policy uses the high-impact heuristic
    pub high_impact_enabled: bool,
    /// Which color the engine plays
    pub computer: Stone,
    /// Which color moves first
    pub first_mover: Stone,
    /// Seed for the bootstrap move pick; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    /// The classic setup: 15x15, five in a row, human (Black) first.
    fn default() -> Self {
        Self {
            board_size: 15,
            win_length: 5,
            max_depth: 3,
            expansion_range: 1,
            high_impact_enabled: true,
            computer: Stone::White,
            first_mover: Stone::Black,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Fail fast on parameters that can never produce a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(invalid("board size must be at least 1"));
        }
        if self.board_size > u8::MAX as usize {
            return Err(invalid(format!(
                "board size {} exceeds the maximum of {}",
                self.board_size,
                u8::MAX
            )));
        }
        if self.win_length < 2 {
            return Err(invalid("win length must be at least 2"));
        }
        if self.win_length > self.board_size {
            return Err(invalid(format!(
                "win length {} exceeds board size {}",
                self.win_length, self.board_size
            )));
        }
        if self.max_depth == 0 {
            return Err(invalid("search depth must be at least 1"));
        }
        if self.expansion_range == 0 {
            return Err(invalid("expansion range must be at least 1"));
        }
        if self.computer == Stone::Empty {
            return Err(invalid("computer must play Black or White"));
        }
        if self.first_mover == Stone::Empty {
            return Err(invalid("first mover must be Black or White"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidConfiguration {
        message: message.into(),
    }
}
