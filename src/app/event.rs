use super::focus::Focus;
use super::state::FormState;
use crate::clipboard::ClipboardWriter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut FormState, clipboard: &mut ClipboardWriter) {
    // The error popover is modal: any key closes it and is not passed on.
    if state.error.is_shown() {
        state.dismiss_error();
        return;
    }

    if state.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q')) {
            state.show_help = false;
        }
        return;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
            state.should_quit = true;
            return;
        }
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
            state.submit();
            return;
        }
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
            state.copy(clipboard);
            return;
        }
        (KeyCode::Tab, KeyModifiers::NONE) => {
            state.focus = state.focus.next();
            return;
        }
        (KeyCode::BackTab, _) => {
            // BackTab is sent when Shift+Tab is pressed
            state.focus = state.focus.prev();
            return;
        }
        (KeyCode::F(1), _) => {
            state.show_help = true;
            return;
        }
        _ => {}
    }

    match state.focus {
        Focus::Input => handle_input_key(key, state),
        Focus::EncodeButton => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => state.submit(),
            _ => handle_common_key(key, state),
        },
        Focus::Output => match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('c') => state.copy(clipboard),
            _ => handle_common_key(key, state),
        },
        Focus::CopyButton => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => state.copy(clipboard),
            _ => handle_common_key(key, state),
        },
    }
}

/// Text delivered by the terminal as a bracketed paste.
pub fn handle_paste(text: &str, state: &mut FormState) {
    if state.error.is_shown() {
        state.dismiss_error();
        return;
    }
    if state.show_help || state.focus != Focus::Input {
        return;
    }
    state.input.insert_str(text);
}

/// Keys shared by the non-editable controls.
fn handle_common_key(key: KeyEvent, state: &mut FormState) {
    match key.code {
        KeyCode::Char('?') => state.show_help = true,
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('i') => state.focus = Focus::Input,
        _ => {}
    }
}

fn handle_input_key(key: KeyEvent, state: &mut FormState) {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, mods) if mods.intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) => {
            state.input.insert_newline();
        }
        (KeyCode::Char('j'), KeyModifiers::CONTROL) => state.input.insert_newline(),
        (KeyCode::Enter, _) => state.submit(),
        (KeyCode::Esc, _) => state.focus = Focus::EncodeButton,
        (KeyCode::Backspace, _) => state.input.backspace(),
        (KeyCode::Delete, _) => state.input.delete(),
        (KeyCode::Left, _) => state.input.move_left(),
        (KeyCode::Right, _) => state.input.move_right(),
        (KeyCode::Home, _) => state.input.move_home(),
        (KeyCode::End, _) => state.input.move_end(),
        (KeyCode::Char(c), mods) if !mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            state.input.insert_char(c);
        }
        _ => {}
    }
}
