//! Single root invariant: only the first entry lacks a move location.

use super::super::TicTacToe;
use super::Invariant;

/// Invariant: exactly one history entry has no location, and it is entry 0.
pub struct SingleRootInvariant;

impl Invariant<TicTacToe> for SingleRootInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let entries = game.history().entries();
        match entries.split_first() {
            Some((root, rest)) => {
                root.location.is_none() && rest.iter().all(|entry| entry.location.is_some())
            }
            None => false,
        }
    }

    fn description() -> &'static str {
        "Only the initial history entry has no move location"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(SingleRootInvariant::holds(&TicTacToe::new()));
    }

    #[test]
    fn test_missing_location_violates() {
        let (mut game, _) = TicTacToe::replay(&[0, 4]);
        game.history.entries_mut()[2].location = None;
        assert!(!SingleRootInvariant::holds(&game));
    }
}
