//! Cursor invariant: the current move always names an existing entry.

use super::super::TicTacToe;
use super::Invariant;

/// Invariant: `current_move` lies within `[0, history length - 1]`.
pub struct CursorInBoundsInvariant;

impl Invariant<TicTacToe> for CursorInBoundsInvariant {
    fn holds(game: &TicTacToe) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move is within history bounds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_jump_and_branch() {
        let (mut game, _) = TicTacToe::replay(&[0, 4, 8]);
        game.jump_to(1).unwrap();
        assert!(CursorInBoundsInvariant::holds(&game));
        game.apply_move(2).unwrap();
        assert!(CursorInBoundsInvariant::holds(&game));
        assert_eq!(game.current_move(), 2);
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut game = TicTacToe::new();
        game.current_move = 1;
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
