//! Stateless UI rendering.

pub mod board;
pub mod layout;
pub mod moves;

use crate::app::App;
use layout::{PLAY_AGAIN_LABEL, ScreenLayout};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "arrows move  enter place  1-9 play  tab moves  s sort  r play again  q quit";

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::compute(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    board::render(frame, &layout, app);
    draw_banner(frame, &layout, app);
    moves::render(frame, &layout, app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.footer);
}

/// Game-over banner and Play Again control; both hidden while in progress.
fn draw_banner(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let Some(text) = app.game().status().banner() else {
        return;
    };

    let banner = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, layout.banner);

    let play_again = Paragraph::new(PLAY_AGAIN_LABEL)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
    frame.render_widget(play_again, layout.play_again);
}
