pub mod form;
pub mod status_bar;

use crate::app::FormState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, state: &FormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    form::render(f, state, chunks[0]);
    status_bar::render(f, state, chunks[1]);

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_help_overlay(f: &mut Frame, state: &FormState) {
    let help_text = r#"
    Base64 Encoder Help

    Anywhere:
      Tab / Shift+Tab       Move between controls
      Ctrl+E                Encode
      Ctrl+Y                Copy encoded text
      F1                    Toggle help
      Ctrl+C / Ctrl+Q       Quit

    Decoded String:
      Enter                 Encode
      Alt+Enter / Ctrl+J    New line
      ←/→  Home/End         Move cursor
      Backspace / Delete    Delete character
      Esc                   Leave the field

    Buttons and Encoded String:
      Enter / Space         Activate
      y / c                 Copy (on Encoded String)
      i                     Back to the input
      ?                     Toggle help
      q                     Quit

    Error messages close on any key.
    "#;

    let area = centered_rect(60, 70, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(r);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);

    center
}
