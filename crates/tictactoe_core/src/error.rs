//! Rejected game actions.
//!
//! A rejected action leaves the game untouched. Front ends are expected to
//! log these and carry on.

use super::Position;

/// Reason an action was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// Board index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// Jump target past the end of history.
    #[display("No move #{} (history has {} entries)", move_number, len)]
    NoSuchMove {
        /// Requested move number.
        move_number: usize,
        /// History length at the time.
        len: usize,
    },
}

impl std::error::Error for GameError {}
