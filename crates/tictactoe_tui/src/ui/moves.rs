//! Move list pane with its sort toggle.

use super::board::focus_style;
use super::layout::{ScreenLayout, visible_rows};
use crate::app::{App, Focus};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the move list pane.
pub fn render(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let focused = app.focus() == Focus::Moves;
    let list = app.game().move_list();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Moves ")
        .border_style(focus_style(focused));
    frame.render_widget(block, layout.moves);

    let sort = Paragraph::new(Line::from(Span::styled(
        format!("[ {} ]", list.order().button_label()),
        Style::default().fg(Color::Cyan),
    )));
    frame.render_widget(sort, layout.sort_button);

    let window = visible_rows(list.len(), app.selected(), layout.move_rows.height);
    let lines: Vec<Line> = list.items()[window.clone()]
        .iter()
        .zip(window)
        .map(|(item, index)| {
            let highlighted = focused && index == app.selected();
            let marker = if highlighted { "> " } else { "  " };

            let mut style = if item.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }

            Line::from(vec![Span::raw(marker), Span::styled(item.description(), style)])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), layout.move_rows);
}
