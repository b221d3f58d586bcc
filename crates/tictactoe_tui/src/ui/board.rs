//! Board rendering: tiles, separators, strike and hover preview.

use super::layout::ScreenLayout;
use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Player, Position, Square, WinningLine};

/// Separators drawn by a tile: right unless in the last column, bottom
/// unless in the last row.
pub fn tile_borders(pos: Position) -> Borders {
    let mut borders = Borders::NONE;
    if pos.col() < 2 {
        borders |= Borders::RIGHT;
    }
    if pos.row() < 2 {
        borders |= Borders::BOTTOM;
    }
    borders
}

/// Style of a placed mark.
pub fn mark_style(player: Player) -> Style {
    match player {
        Player::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Player::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Renders the board block and its nine tiles.
pub fn render(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let strike = app.game().winning_line();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Board ")
        .border_style(focus_style(app.focus() == Focus::Board));
    if let Some(line) = strike {
        block = block.title_bottom(Line::from(format!(" {} ", line.strike_class())).centered());
    }
    frame.render_widget(block, layout.board);

    for pos in Position::ALL {
        render_tile(frame, layout.tiles[pos.index()], app, pos, strike);
    }
}

fn render_tile(frame: &mut Frame, area: Rect, app: &App, pos: Position, strike: Option<WinningLine>) {
    let game = app.game();
    let hovered = app.focus() == Focus::Board && app.cursor() == pos;

    let (symbol, mut style) = match game.board().get(pos) {
        Square::Occupied(player) => (player.to_string(), mark_style(player)),
        // Preview of the mark this tile would receive.
        Square::Empty if hovered && !game.status().is_over() => (
            game.player_turn().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
    };

    if strike.is_some_and(|line| line.contains(pos)) {
        style = style.bg(Color::Yellow);
    }
    if hovered {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let block = Block::default()
        .borders(tile_borders(pos))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    let padding = inner.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::default(); padding as usize];
    lines.push(Line::from(Span::styled(symbol, style)));

    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    if hovered || strike.is_some_and(|line| line.contains(pos)) {
        // Highlight the whole tile.
        frame.buffer_mut().set_style(inner, style);
    }
}

pub(super) fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
