use super::focus::Focus;
use super::input::TextInput;
use crate::clipboard::ClipboardWriter;
use crate::encoder;
use crate::error::{FormError, Mechanism};
use crate::ui::theme::Theme;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_millis(2000);

/// Control an error popover is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    EncodeButton,
    CopyButton,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ErrorDisplay {
    #[default]
    Hidden,
    Shown { message: String, anchor: Anchor },
}

impl ErrorDisplay {
    pub fn is_shown(&self) -> bool {
        matches!(self, ErrorDisplay::Shown { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorDisplay::Shown { message, .. } => Some(message),
            ErrorDisplay::Hidden => None,
        }
    }
}

pub struct FormState {
    pub input: TextInput,
    pub encoded: String,
    pub error: ErrorDisplay,
    pub focus: Focus,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
    pub clipboard_mechanism: Option<Mechanism>,
    pub status_message: Option<(String, Instant)>,
    pub status_timeout: Duration,
}

impl FormState {
    pub fn new(theme: Theme) -> Self {
        Self {
            input: TextInput::new(),
            encoded: String::new(),
            error: ErrorDisplay::Hidden,
            focus: Focus::Input,
            show_help: false,
            should_quit: false,
            theme,
            clipboard_mechanism: None,
            status_message: None,
            status_timeout: DEFAULT_STATUS_TIMEOUT,
        }
    }

    pub fn with_status_timeout(mut self, timeout: Duration) -> Self {
        self.status_timeout = timeout;
        self
    }

    pub fn with_clipboard_mechanism(mut self, mechanism: Mechanism) -> Self {
        self.clipboard_mechanism = Some(mechanism);
        self
    }

    /// Encode the current input into `encoded`.
    pub fn submit(&mut self) {
        self.submit_with(|text| Ok(encoder::encode(text)));
    }

    /// Like [`submit`](Self::submit) with a caller-supplied encoder. On
    /// failure the previous output is kept and the error is shown at the
    /// Encode button.
    pub fn submit_with<F>(&mut self, encode: F)
    where
        F: FnOnce(&str) -> Result<String, FormError>,
    {
        match encode(self.input.as_str()) {
            Ok(encoded) => {
                debug!(input_bytes = self.input.as_str().len(), output_len = encoded.len(), "Encoded input");
                self.encoded = encoded;
                self.error = ErrorDisplay::Hidden;
            }
            Err(e) => {
                warn!("{}", e.diagnostic());
                self.show_error(&e, Anchor::EncodeButton);
            }
        }
    }

    /// Copy `encoded` to the clipboard, showing any failure at the copy button.
    pub fn copy(&mut self, clipboard: &mut ClipboardWriter) {
        match clipboard.write_to_clipboard(&self.encoded) {
            Ok(()) => {
                self.error = ErrorDisplay::Hidden;
                let message = match clipboard.mechanism() {
                    Mechanism::System => "Copied to clipboard".to_string(),
                    Mechanism::Osc52 => "Sent to terminal clipboard (OSC 52)".to_string(),
                };
                self.set_status_message(message);
            }
            Err(e) => self.show_error(&e, Anchor::CopyButton),
        }
    }

    pub fn show_error(&mut self, error: &FormError, anchor: Anchor) {
        self.error = ErrorDisplay::Shown {
            message: error.user_message(),
            anchor,
        };
    }

    /// Hide the popover. Input and output are left as they are.
    pub fn dismiss_error(&mut self) {
        self.error = ErrorDisplay::Hidden;
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some((_, set_at)) = &self.status_message {
            if set_at.elapsed() >= self.status_timeout {
                self.status_message = None;
            }
        }
    }
}
