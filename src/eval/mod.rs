//! Position evaluation for connect-K boards
//!
//! Contains:
//! - Windowed line scanning that counts win-length windows per color
//! - The canonical K-in-a-row win rule
//! - Terminal position detection

pub mod heuristic;

pub use heuristic::{completes_line_at, evaluate, game_over, has_line_of, LineScore, DIRECTIONS};
