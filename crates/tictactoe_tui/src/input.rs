//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Move the board cursor or the move list selection.
    Navigate(KeyCode),
    /// Activate the focused element.
    Activate,
    /// Play the square with this index directly.
    PlaceAt(usize),
    /// Start a new game.
    Reset,
    /// Flip the move list order.
    ToggleSort,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an intent.
pub fn key_intent(key: KeyEvent) -> Option<KeyIntent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyIntent::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyIntent::Quit),
        KeyCode::Char('r') => Some(KeyIntent::Reset),
        KeyCode::Char('s') => Some(KeyIntent::ToggleSort),
        KeyCode::Tab | KeyCode::BackTab => Some(KeyIntent::SwitchFocus),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyIntent::Activate),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| KeyIntent::PlaceAt(digit as usize - 1)),
        KeyCode::Char('h') => Some(KeyIntent::Navigate(KeyCode::Left)),
        KeyCode::Char('j') => Some(KeyIntent::Navigate(KeyCode::Down)),
        KeyCode::Char('k') => Some(KeyIntent::Navigate(KeyCode::Up)),
        KeyCode::Char('l') => Some(KeyIntent::Navigate(KeyCode::Right)),
        code @ (KeyCode::Up
        | KeyCode::Down
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End) => Some(KeyIntent::Navigate(code)),
        _ => None,
    }
}

/// Moves the board cursor one step; edges do not wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Home => (0, 0),
        KeyCode::End => (2, 2),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Moves a list selection one step within `len` rows.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    match key {
        KeyCode::Up | KeyCode::Left => selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Right => (selected + 1).min(last),
        KeyCode::Home => 0,
        KeyCode::End => last,
        _ => selected.min(last),
    }
}
