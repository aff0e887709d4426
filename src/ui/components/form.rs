use crate::app::{Anchor, ErrorDisplay, Focus, FormState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

const COPY_BUTTON_WIDTH: u16 = 10;
const ENCODE_BUTTON_WIDTH: u16 = 16;

/// Screen areas of the form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub title: Rect,
    pub input: Rect,
    pub encode_button: Rect,
    pub output: Rect,
    pub copy_button: Rect,
}

impl FormLayout {
    pub fn new(area: Rect) -> Self {
        let [title, input, button_row, output_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(6), // four lines plus borders
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .areas(area);

        let [_, encode_button, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(ENCODE_BUTTON_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(button_row);

        let [output, copy_button] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(COPY_BUTTON_WIDTH)])
                .areas(output_row);

        Self {
            title,
            input,
            encode_button,
            output,
            copy_button: Rect {
                height: copy_button.height.min(3),
                ..copy_button
            },
        }
    }

    pub fn anchor_rect(&self, anchor: Anchor) -> Rect {
        match anchor {
            Anchor::EncodeButton => self.encode_button,
            Anchor::CopyButton => self.copy_button,
        }
    }
}

pub fn render(f: &mut Frame, state: &FormState, area: Rect) {
    let layout = FormLayout::new(area);
    let theme = &state.theme;

    let title = Paragraph::new("Base64 Encoder")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.title)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, layout.title);

    render_input(f, state, layout.input);
    render_button(f, state, "[ Encode ]", Focus::EncodeButton, layout.encode_button);
    render_output(f, state, layout.output);
    render_button(f, state, "[ copy ]", Focus::CopyButton, layout.copy_button);

    if let ErrorDisplay::Shown { message, anchor } = &state.error {
        render_popover(f, state, message, layout.anchor_rect(*anchor));
    }
}

fn control_block(state: &FormState, focus: Focus) -> Block<'static> {
    let border_color = if state.focus == focus {
        state.theme.focused
    } else {
        state.theme.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
}

fn field_block(state: &FormState, title: &str, focus: Focus) -> Block<'static> {
    control_block(state, focus).title(format!(" {title} "))
}

fn render_input(f: &mut Frame, state: &FormState, area: Rect) {
    let block = field_block(state, "Decoded String", Focus::Input);
    let inner = block.inner(area);

    // Scroll so the cursor stays inside the box
    let (line, column) = state.input.cursor_position();
    let scroll_y = (line as u16).saturating_sub(inner.height.saturating_sub(1));
    let scroll_x = (column as u16).saturating_sub(inner.width.saturating_sub(1));

    let paragraph = Paragraph::new(state.input.as_str())
        .block(block)
        .style(Style::default().fg(state.theme.foreground).bg(state.theme.background))
        .scroll((scroll_y, scroll_x));
    f.render_widget(paragraph, area);

    let cursor_visible = state.focus == Focus::Input && !state.error.is_shown() && !state.show_help;
    if cursor_visible && inner.width > 0 && inner.height > 0 {
        f.set_cursor_position(Position::new(
            inner.x + column as u16 - scroll_x,
            inner.y + line as u16 - scroll_y,
        ));
    }
}

fn render_output(f: &mut Frame, state: &FormState, area: Rect) {
    let block = field_block(state, "Encoded String", Focus::Output);
    let paragraph = Paragraph::new(state.encoded.as_str())
        .block(block)
        .style(Style::default().fg(state.theme.foreground).bg(state.theme.background))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Buttons are dimmed while there is nothing for them to act on. They stay
/// usable; the resulting error explains why.
fn button_style(state: &FormState, focus: Focus) -> Style {
    let theme = &state.theme;
    let mut style = Style::default().fg(theme.button_fg).bg(theme.button_bg);
    if state.focus == focus {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let idle = match focus {
        Focus::EncodeButton => state.input.is_empty(),
        Focus::CopyButton => state.encoded.is_empty(),
        Focus::Input | Focus::Output => false,
    };
    if idle {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}

fn render_button(f: &mut Frame, state: &FormState, label: &str, focus: Focus, area: Rect) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(button_style(state, focus))
        .block(control_block(state, focus));
    f.render_widget(button, area);
}

fn render_popover(f: &mut Frame, state: &FormState, message: &str, anchor: Rect) {
    let area = popover_rect(anchor, f.area(), message);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(state.theme.error))
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(state.theme.error))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

/// Place a one-line popover centred under `anchor`, or above it when there is
/// no room below. The result always lies within `bounds`.
pub fn popover_rect(anchor: Rect, bounds: Rect, message: &str) -> Rect {
    let width = (message.width() as u16).saturating_add(4).min(bounds.width);
    let height = 3.min(bounds.height);

    let center = anchor.x + anchor.width / 2;
    let x = center
        .saturating_sub(width / 2)
        .max(bounds.x)
        .min(bounds.right().saturating_sub(width));

    let y = if anchor.bottom() + height <= bounds.bottom() {
        anchor.bottom()
    } else {
        anchor
            .y
            .saturating_sub(height)
            .max(bounds.y)
    };

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use crate::ui::components;
    use crate::ui::theme::Theme;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(state: &FormState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| components::render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_layout_order() {
        let layout = FormLayout::new(Rect::new(0, 0, 60, 20));
        assert!(layout.title.y < layout.input.y);
        assert!(layout.input.bottom() <= layout.encode_button.y);
        assert!(layout.encode_button.bottom() <= layout.output.y);
        assert_eq!(layout.copy_button.y, layout.output.y);
        assert_eq!(layout.copy_button.right(), 60);
    }

    #[test]
    fn test_popover_below_anchor() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(30, 7, 16, 3);
        let rect = popover_rect(anchor, bounds, "oops");
        assert_eq!(rect.y, 10);
        assert_eq!(rect.width, 8);
        assert_eq!(rect.x, 34);
    }

    #[test]
    fn test_popover_flips_above_at_bottom_edge() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(70, 21, 10, 3);
        let rect = popover_rect(anchor, bounds, "No text to copy. Try encoding something first.");
        assert_eq!(rect.y, 18);
        assert!(rect.right() <= bounds.right());
    }

    #[test]
    fn test_popover_clamped_to_narrow_screen() {
        let bounds = Rect::new(0, 0, 20, 10);
        let anchor = Rect::new(10, 2, 10, 3);
        let rect = popover_rect(anchor, bounds, "a message much wider than the screen");
        assert_eq!(rect.width, 20);
        assert_eq!(rect.x, 0);
    }

    #[test]
    fn test_renders_labels_and_output() {
        let mut state = FormState::new(Theme::default());
        state.input.set_text("test");
        state.submit();

        let text = screen_text(&state);
        assert!(text.contains("Base64 Encoder"));
        assert!(text.contains("Decoded String"));
        assert!(text.contains("Encoded String"));
        assert!(text.contains("dGVzdA=="));
    }

    #[test]
    fn test_renders_button_labels() {
        let text = screen_text(&FormState::new(Theme::default()));
        assert!(text.contains("[ Encode ]"));
        assert!(text.contains("[ copy ]"));
    }

    #[test]
    fn test_buttons_dimmed_until_there_is_something_to_do() {
        let mut state = FormState::new(Theme::default());
        assert!(button_style(&state, Focus::EncodeButton).add_modifier.contains(Modifier::DIM));
        assert!(button_style(&state, Focus::CopyButton).add_modifier.contains(Modifier::DIM));

        state.input.set_text("test");
        assert!(!button_style(&state, Focus::EncodeButton).add_modifier.contains(Modifier::DIM));
        assert!(button_style(&state, Focus::CopyButton).add_modifier.contains(Modifier::DIM));

        state.submit();
        assert!(!button_style(&state, Focus::CopyButton).add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_renders_error_popover() {
        let mut state = FormState::new(Theme::default());
        state.show_error(&FormError::NoContent, Anchor::CopyButton);

        let text = screen_text(&state);
        assert!(text.contains("No text to copy."));

        state.dismiss_error();
        let text = screen_text(&state);
        assert!(!text.contains("No text to copy."));
    }
}
