//! State-change notifications published by the game.

use super::rules::WinningLine;
use super::{Board, GameStatus, SortOrder};

/// Something observable changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The displayed board changed (move, jump or reset).
    BoardChanged {
        /// History index now displayed.
        move_number: usize,
        /// Board now displayed.
        board: Board,
    },
    /// The outcome changed.
    StatusChanged {
        /// New status.
        status: GameStatus,
        /// Highlighted line, if any.
        line: Option<WinningLine>,
    },
    /// The move list order flipped.
    SortToggled(SortOrder),
    /// The game was reset to an empty board.
    Reset,
}

/// Receives game events, in subscription order, synchronously.
pub trait GameObserver {
    /// Called once per event.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}
