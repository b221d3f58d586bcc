//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Updating whatever displays the
//! result (status, strike highlight) is the caller's job.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningLine, check_winner};

use super::{Board, GameStatus};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Outcome implied by the board.
    pub status: GameStatus,
    /// Line to strike through, present only for a win.
    pub line: Option<WinningLine>,
}

/// Evaluates a board: first winning line in priority order, else draw when
/// full, else in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((player, line)) = check_winner(board) {
        return Evaluation {
            status: GameStatus::Won(player),
            line: Some(line),
        };
    }

    let status = if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    };
    Evaluation { status, line: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_empty_board_in_progress() {
        let eval = evaluate(&Board::new());
        assert_eq!(eval.status, GameStatus::InProgress);
        assert_eq!(eval.line, None);
    }

    #[test]
    fn test_full_winning_board_reports_win() {
        // X X X / O O X / X O O
        let marks = [
            Player::X,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
        ];
        let mut board = Board::new();
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(player));
        }
        let eval = evaluate(&board);
        assert_eq!(eval.status, GameStatus::Won(Player::X));
        assert_eq!(eval.line, Some(WinningLine::Row1));
    }
}
