//! Application state for the terminal front end.
//!
//! The game owns all game state. The app adds what only the terminal needs:
//! a board cursor, a focused pane, a highlighted move list row, and a dirty
//! flag that the game raises through [`RenderNotifier`].

use crate::config::TuiConfig;
use crate::input::{KeyIntent, key_intent, move_cursor, move_selection};
use crate::ui::layout::{HitTarget, ScreenLayout, visible_rows};
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use std::cell::Cell;
use std::rc::Rc;
use tictactoe_core::{GameEvent, GameObserver, Position, SoundEffects, SoundPlayer, TicTacToe};
use tracing::{debug, info, instrument, trace};

/// Pane receiving keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum Focus {
    /// The board cursor moves.
    #[default]
    #[display("board")]
    Board,
    /// The move list selection moves.
    #[display("moves")]
    Moves,
}

impl Focus {
    fn other(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// User intent forwarded to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A board tile was chosen.
    TileClick(usize),
    /// A move list entry was chosen.
    JumpTo(usize),
    /// The sort control was chosen.
    ToggleSort,
    /// The Play Again control was chosen.
    Reset,
    /// Leave the program.
    Quit,
}

/// Observer that flags the view for redraw on every game event.
#[derive(Debug, Clone, derive_new::new)]
pub struct RenderNotifier {
    dirty: Rc<Cell<bool>>,
}

impl GameObserver for RenderNotifier {
    fn on_event(&mut self, event: &GameEvent) {
        trace!(?event, "Scheduling redraw");
        self.dirty.set(true);
    }
}

/// Terminal application state.
pub struct App {
    game: TicTacToe,
    cursor: Position,
    focus: Focus,
    selected: usize,
    dirty: Rc<Cell<bool>>,
    should_quit: bool,
}

impl App {
    /// Creates the app with a fresh game wired to the view and sound.
    pub fn new(config: &TuiConfig, player: Box<dyn SoundPlayer>) -> Self {
        let mut game = TicTacToe::new()
            .with_jump_policy(*config.jump_policy())
            .with_sort_order(*config.sort());

        let dirty = Rc::new(Cell::new(true));
        game.subscribe(Box::new(RenderNotifier::new(Rc::clone(&dirty))));
        game.subscribe(Box::new(SoundEffects::new(player, config.sound().volumes())));

        let mut app = Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            dirty,
            should_quit: false,
        };
        app.select_current();
        app
    }

    /// The game being played.
    pub fn game(&self) -> &TicTacToe {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted row of the move list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True when something changed since the last draw.
    pub fn needs_redraw(&self) -> bool {
        self.dirty.get()
    }

    /// Records that the current state has been drawn.
    pub fn mark_drawn(&self) {
        self.dirty.set(false);
    }

    /// Forces a redraw, e.g. after a terminal resize.
    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(intent) = key_intent(key) else {
            return;
        };
        if let Some(action) = self.resolve(intent) {
            self.dispatch(action);
        }
    }

    /// Handles a left click at a terminal cell for a screen of size `area`.
    #[instrument(skip(self, area))]
    pub fn handle_click(&mut self, column: u16, row: u16, area: Rect) {
        let layout = ScreenLayout::compute(area);
        let Some(target) = layout.hit(column, row) else {
            return;
        };
        debug!(?target, "Click");

        let action = match target {
            HitTarget::Tile(index) => {
                self.focus_tile(index);
                Some(Action::TileClick(index))
            }
            // Hidden while the game is in progress.
            HitTarget::PlayAgain if self.game.status().is_over() => Some(Action::Reset),
            HitTarget::PlayAgain => None,
            HitTarget::SortButton => Some(Action::ToggleSort),
            HitTarget::MoveRow(offset) => {
                let window = visible_rows(
                    self.game.history().len(),
                    self.selected,
                    layout.move_rows.height,
                );
                let index = window.start + offset;
                if index < window.end {
                    self.focus = Focus::Moves;
                    self.selected = index;
                    self.invalidate();
                    self.jump_target(index)
                } else {
                    None
                }
            }
        };

        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    /// Applies an action to the game.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::TileClick(index) => {
                if let Err(e) = self.game.apply_move(index) {
                    debug!(error = %e, "Move ignored");
                }
            }
            Action::JumpTo(move_number) => {
                if let Err(e) = self.game.jump_to(move_number) {
                    debug!(error = %e, "Jump ignored");
                }
            }
            Action::ToggleSort => self.game.toggle_sort(),
            Action::Reset => {
                if self.game.status().is_over() {
                    info!("Starting a new game");
                    self.game.reset();
                } else {
                    debug!("Play Again is disabled while the game is in progress");
                }
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
                return;
            }
        }
        self.select_current();
    }

    fn resolve(&mut self, intent: KeyIntent) -> Option<Action> {
        match intent {
            KeyIntent::Quit => Some(Action::Quit),
            KeyIntent::Reset => Some(Action::Reset),
            KeyIntent::ToggleSort => Some(Action::ToggleSort),
            KeyIntent::PlaceAt(index) => {
                self.focus_tile(index);
                Some(Action::TileClick(index))
            }
            KeyIntent::SwitchFocus => {
                self.focus = self.focus.other();
                debug!(focus = %self.focus, "Focus changed");
                self.invalidate();
                None
            }
            KeyIntent::Navigate(code) => {
                match self.focus {
                    Focus::Board => self.cursor = move_cursor(self.cursor, code),
                    Focus::Moves => {
                        self.selected =
                            move_selection(self.selected, self.game.history().len(), code)
                    }
                }
                self.invalidate();
                None
            }
            KeyIntent::Activate => match self.focus {
                Focus::Board => Some(Action::TileClick(self.cursor.index())),
                Focus::Moves => self.jump_target(self.selected),
            },
        }
    }

    /// Jump for a move list row; the current move is not a jump target.
    fn jump_target(&self, display_index: usize) -> Option<Action> {
        let list = self.game.move_list();
        let item = list.items().get(display_index)?;
        if item.is_current {
            None
        } else {
            Some(Action::JumpTo(item.move_number))
        }
    }

    fn focus_tile(&mut self, index: usize) {
        if let Some(pos) = Position::from_index(index) {
            self.cursor = pos;
            self.focus = Focus::Board;
            self.invalidate();
        }
    }

    /// Moves the list highlight onto the current move.
    fn select_current(&mut self) {
        let list = self.game.move_list();
        if let Some(index) = list.items().iter().position(|item| item.is_current) {
            self.selected = index;
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("game", &self.game)
            .field("cursor", &self.cursor)
            .field("focus", &self.focus)
            .field("selected", &self.selected)
            .field("should_quit", &self.should_quit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tictactoe_core::{GameStatus, Player, SilentPlayer};

    fn app() -> App {
        App::new(&TuiConfig::default(), Box::new(SilentPlayer))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_game_events_mark_view_dirty() {
        let mut app = app();
        assert!(app.needs_redraw());
        app.mark_drawn();

        app.dispatch(Action::TileClick(0));

        assert!(app.needs_redraw());
    }

    #[test]
    fn test_rejected_move_keeps_view_clean() {
        let mut app = app();
        app.dispatch(Action::TileClick(0));
        app.mark_drawn();

        app.dispatch(Action::TileClick(0));

        assert!(!app.needs_redraw());
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.cursor(), Position::TopCenter);
        assert_eq!(app.game().board().get(Position::TopCenter).player(), Some(Player::X));
    }

    #[test]
    fn test_reset_disabled_while_in_progress() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game().current_move(), 1);
    }

    #[test]
    fn test_selection_follows_current_move() {
        let mut app = app();
        for key in ['1', '5', '2'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.selected(), 3);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_activating_current_row_does_nothing() {
        let mut app = app();
        for key in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.game().status(), GameStatus::Won(Player::X));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game().status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
