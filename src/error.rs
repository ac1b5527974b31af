//! Error types for the connect-K engine

use thiserror::Error;

/// Main error type for the crate.
///
/// Move errors are recoverable: the caller keeps the game state untouched
/// and asks for another move. Configuration errors are raised once at setup,
/// before any game starts.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: u8, col: u8, size: usize },

    #[error("invalid move: ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    #[error("game is already over")]
    GameOver,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
