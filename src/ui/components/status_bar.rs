use crate::app::FormState;
use crate::encoder;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &FormState, area: Rect) {
    let input = state.input.as_str();
    let clipboard = state
        .clipboard_mechanism
        .map(|m| m.to_string())
        .unwrap_or_else(|| "none".to_string());

    let left_content = format!(
        " {} | {} chars, {} bytes → {} | {}",
        state.focus,
        state.input.char_count(),
        input.len(),
        encoder::encoded_len(input),
        clipboard
    );

    let right_content = match &state.status_message {
        Some((message, _)) => format!("{message}  v{VERSION}"),
        None => format!("F1 help  Ctrl+C quit  v{VERSION}"),
    };

    let used = left_content.chars().count() + right_content.chars().count() + 1;
    let padding = (area.width as usize).saturating_sub(used);

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let right_style = if state.status_message.is_some() {
        base_style.add_modifier(Modifier::BOLD)
    } else {
        base_style
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(format!("{left_content}{:padding$}", ""), base_style),
        Span::styled(format!("{right_content} "), right_style),
    ]))
    .style(base_style);

    f.render_widget(status, area);
}
