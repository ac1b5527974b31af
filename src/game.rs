//! Live game state: board, move history, turn alternation, outcome
//!
//! `GameState` is the single owner of a running game. The engine never
//! mutates it; the driver applies both sides' moves through `apply_move`
//! and reads the outcome. Invariant: the set of occupied cells equals the
//! set of coordinates in the move history, and no coordinate repeats.

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::eval::completes_line_at;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Stone),
    Draw,
}

/// One game in progress.
pub struct GameState {
    board: Board,
    moves: Vec<Pos>,
    current_turn: Stone,
    outcome: Option<Outcome>,
    config: GameConfig,
}

impl GameState {
    /// Start a fresh game. Fails fast on invalid configuration.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.board_size),
            moves: Vec::with_capacity(config.board_size * config.board_size),
            current_turn: config.first_mover,
            outcome: None,
            config,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Side to move (unchanged once the game is over).
    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.moves.last().copied()
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<Stone> {
        match self.outcome {
            Some(Outcome::Win(stone)) => Some(stone),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Some(Outcome::Draw)
    }

    /// Apply one move for the side to move.
    ///
    /// Validates legality, records history, updates the outcome, and flips
    /// the turn. On error the state is untouched and the caller should ask
    /// for another move.
    pub fn apply_move(&mut self, pos: Pos) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let stone = self.current_turn;
        self.board.try_place(pos, stone)?;
        self.moves.push(pos);

        if completes_line_at(&self.board, pos, stone, self.config.win_length) {
            self.outcome = Some(Outcome::Win(stone));
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
        } else {
            self.current_turn = stone.opponent();
        }
        Ok(())
    }

    /// Replace the state wholesale for a new game with the same
    /// configuration.
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.board_size);
        self.moves.clear();
        self.current_turn = self.config.first_mover;
        self.outcome = None;
    }
}
