//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight winning triples, in priority order.
///
/// When several lines are complete at once, the first one in declaration
/// order is the one reported and highlighted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum WinningLine {
    /// Top row.
    Row1,
    /// Middle row.
    Row2,
    /// Bottom row.
    Row3,
    /// Left column.
    Column1,
    /// Middle column.
    Column2,
    /// Right column.
    Column3,
    /// Top-left to bottom-right.
    Diagonal1,
    /// Top-right to bottom-left.
    Diagonal2,
}

impl WinningLine {
    /// The three cells that make up this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            WinningLine::Row1 => [TopLeft, TopCenter, TopRight],
            WinningLine::Row2 => [MiddleLeft, Center, MiddleRight],
            WinningLine::Row3 => [BottomLeft, BottomCenter, BottomRight],
            WinningLine::Column1 => [TopLeft, MiddleLeft, BottomLeft],
            WinningLine::Column2 => [TopCenter, Center, BottomCenter],
            WinningLine::Column3 => [TopRight, MiddleRight, BottomRight],
            WinningLine::Diagonal1 => [TopLeft, Center, BottomRight],
            WinningLine::Diagonal2 => [TopRight, Center, BottomLeft],
        }
    }

    /// Board indices of this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::index)
    }

    /// Strike style name drawn over the line.
    pub fn strike_class(self) -> &'static str {
        match self {
            WinningLine::Row1 => "strike-row-1",
            WinningLine::Row2 => "strike-row-2",
            WinningLine::Row3 => "strike-row-3",
            WinningLine::Column1 => "strike-column-1",
            WinningLine::Column2 => "strike-column-2",
            WinningLine::Column3 => "strike-column-3",
            WinningLine::Diagonal1 => "strike-diagonal-1",
            WinningLine::Diagonal2 => "strike-diagonal-2",
        }
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.strike_class())
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the winning player together with the first complete line in
/// priority order, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    for line in WinningLine::iter() {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some((player, line));
            }
        }
    }

    None
}
