//! Search components for the connect-K engine
//!
//! Contains:
//! - Neighborhood-bounded candidate move generation
//! - Single-ply threat detectors (immediate win, high-impact, combo)
//! - Depth-limited alpha-beta minimax

pub mod alphabeta;
pub mod movegen;
pub mod threat;

pub use alphabeta::{SearchResult, Searcher};
pub use movegen::generate;
pub use threat::{combo_move, high_impact_move, immediate_win};
