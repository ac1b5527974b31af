//! Decision engine integrating the threat detectors and the search
//!
//! The engine picks one move per invocation following a strict priority
//! order, each step consulted only when the previous found nothing:
//!
//! 1. **Bootstrap**: with fewer than two moves played, a random pick next
//!    to the existing stones (the center on an empty board)
//! 2. **Immediate win**: complete our own winning line
//! 3. **Block**: deny the opponent's winning line
//! 4. **High-impact**: the placement creating the most near-winning
//!    sequences, ours or the opponent's to block, when enabled
//! 5. **Combo**: a placement creating several threats at once, ours first
//! 6. **Alpha-beta**: depth-limited search with this side as maximizer
//!
//! # Example
//!
//! ```
//! use connectk::{Engine, GameConfig, GameState};
//!
//! let config = GameConfig::default();
//! let mut game = GameState::new(config.clone()).expect("valid config");
//! let mut engine = Engine::new(config).expect("valid config");
//!
//! if let Some(pos) = engine.next_move(&game) {
//!     game.apply_move(pos).expect("legal move");
//! }
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::Pos;
use crate::config::GameConfig;
use crate::error::Result;
use crate::game::GameState;
use crate::search::{combo_move, generate, high_impact_move, immediate_win, Searcher};

/// Which decision-policy step produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// Bootstrap pick in the first two plies
    Opening,
    /// Completing our own winning line
    ImmediateWin,
    /// Blocking the opponent's winning line
    Block,
    /// High-impact heuristic, own move or block
    HighImpact,
    /// Multi-threat combo, own move or block
    Combo,
    /// Alpha-beta search fallback
    Search,
}

/// A chosen move with decision diagnostics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move; `None` only when no cell is playable
    pub best_move: Option<Pos>,
    /// Heuristic or search score of the decision
    pub score: i32,
    /// Which policy step decided
    pub kind: DecisionKind,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Nodes visited by search (0 for heuristic decisions)
    pub nodes: u64,
}

impl MoveResult {
    fn found(pos: Pos, score: i32, kind: DecisionKind, start: Instant) -> Self {
        Self {
            best_move: Some(pos),
            score,
            kind,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: 0,
        }
    }
}

/// The decision engine.
///
/// Owns its searcher and RNG; operates only on copies of the caller's
/// board and never mutates the live game state. One blocking `next_move`
/// call per computer turn.
pub struct Engine {
    config: GameConfig,
    searcher: Searcher,
    rng: fastrand::Rng,
}

impl Engine {
    /// Build an engine for `config`. Fails fast on invalid configuration.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let searcher = Searcher::new(config.win_length, config.expansion_range);
        Ok(Self {
            config,
            searcher,
            rng,
        })
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Best move for the side to move, or `None` when no cell is playable.
    pub fn next_move(&mut self, state: &GameState) -> Option<Pos> {
        self.next_move_with_stats(state).best_move
    }

    /// Best move plus which policy step found it and how long it took.
    pub fn next_move_with_stats(&mut self, state: &GameState) -> MoveResult {
        let start = Instant::now();
        let board = state.board();
        let color = state.current_turn();
        let opponent = color.opponent();
        let k = self.config.win_length;
        let range = self.config.expansion_range;

        // 1. Bootstrap: nothing on the board worth searching yet.
        if state.move_count() < 2 {
            let candidates = generate(board, 1);
            let best_move = if candidates.is_empty() {
                None
            } else {
                Some(candidates[self.rng.usize(..candidates.len())])
            };
            debug!(?best_move, "opening pick");
            return MoveResult {
                best_move,
                score: 0,
                kind: DecisionKind::Opening,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: 0,
            };
        }

        // 2. Take our win.
        if let Some(pos) = immediate_win(board, color, k) {
            debug!(row = pos.row, col = pos.col, "immediate win");
            return MoveResult::found(pos, 0, DecisionKind::ImmediateWin, start);
        }

        // 3. Block theirs.
        if let Some(pos) = immediate_win(board, opponent, k) {
            debug!(row = pos.row, col = pos.col, "blocking opponent win");
            return MoveResult::found(pos, 0, DecisionKind::Block, start);
        }

        // 4. High-impact comparison, when enabled.
        if self.config.high_impact_enabled {
            let (opp_move, opp_score) = high_impact_move(board, opponent, k, range);
            let (own_move, own_score) = high_impact_move(board, color, k, range);

            if let Some(pos) = opp_move {
                if opp_score > own_score {
                    debug!(row = pos.row, col = pos.col, opp_score, own_score, "blocking high-impact move");
                    return MoveResult::found(pos, opp_score, DecisionKind::HighImpact, start);
                }
            }
            if let Some(pos) = own_move {
                if own_score >= opp_score {
                    debug!(row = pos.row, col = pos.col, own_score, opp_score, "high-impact move");
                    return MoveResult::found(pos, own_score, DecisionKind::HighImpact, start);
                }
            }
        }

        // 5. Combo threats: ours first, then deny theirs.
        if let Some(pos) = combo_move(board, color, k, range) {
            debug!(row = pos.row, col = pos.col, "combo move");
            return MoveResult::found(pos, 0, DecisionKind::Combo, start);
        }
        if let Some(pos) = combo_move(board, opponent, k, range) {
            debug!(row = pos.row, col = pos.col, "blocking combo move");
            return MoveResult::found(pos, 0, DecisionKind::Combo, start);
        }

        // 6. Alpha-beta fallback with this side as maximizer.
        let result = self.searcher.search(board, color, self.config.max_depth);
        debug!(
            score = result.score,
            nodes = result.nodes,
            depth = result.depth,
            "alpha-beta fallback"
        );
        MoveResult {
            best_move: result.best_move,
            score: result.score,
            kind: DecisionKind::Search,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: result.nodes,
        }
    }
}
