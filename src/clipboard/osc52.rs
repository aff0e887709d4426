use super::ClipboardBackend;
use crate::encoder;
use crate::error::{ClipboardCause, FormError, Mechanism};
use std::io::{self, IsTerminal, Write};

/// Escape sequence asking the terminal to put `text` on the clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", encoder::encode(text))
}

/// Clipboard writes through the terminal emulator.
///
/// The sequence is built in a private staging buffer and written in one go,
/// so it never interleaves with a partially drawn frame.
pub struct Osc52Clipboard<W: Write> {
    out: W,
    attached: bool, // `out` reaches a terminal that can act on the sequence
    staging: String,
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::on_terminal(io::stdout())
    }
}

impl Osc52Clipboard<io::Stderr> {
    pub fn stderr() -> Self {
        Self::on_terminal(io::stderr())
    }
}

impl<W: Write + IsTerminal> Osc52Clipboard<W> {
    /// Write to `out`, refusing to copy when it is redirected away from a terminal.
    pub fn on_terminal(out: W) -> Self {
        let attached = out.is_terminal();
        Self {
            out,
            attached,
            staging: String::new(),
        }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    /// Write to `out` unconditionally.
    pub fn new(out: W) -> Self {
        Self {
            out,
            attached: true,
            staging: String::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardBackend for Osc52Clipboard<W> {
    fn mechanism(&self) -> Mechanism {
        Mechanism::Osc52
    }

    fn write_text(&mut self, text: &str) -> Result<(), FormError> {
        if !self.attached {
            return Err(FormError::clipboard(
                Mechanism::Osc52,
                ClipboardCause::Backend("output is not a terminal".to_string()),
            ));
        }

        self.staging.clear();
        self.staging.push_str(&osc52_sequence(text));

        self.out
            .write_all(self.staging.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| FormError::clipboard(Mechanism::Osc52, e))
    }
}
