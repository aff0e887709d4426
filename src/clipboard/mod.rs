//! Clipboard writing behind a single capability.
//!
//! Two strategies implement [`ClipboardBackend`]:
//! - the operating system clipboard (via arboard), preferred when reachable
//! - the terminal's OSC 52 escape sequence, used when the system clipboard
//!   cannot be opened (headless sessions, SSH, missing display server)
//!
//! [`ClipboardWriter::detect`] picks one at startup.

mod osc52;
mod system;

pub use osc52::{Osc52Clipboard, osc52_sequence};
pub use system::SystemClipboard;

use crate::error::{FormError, Mechanism};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

/// A way of placing text on the clipboard.
pub trait ClipboardBackend {
    fn mechanism(&self) -> Mechanism;

    fn write_text(&mut self, text: &str) -> Result<(), FormError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardMode {
    /// System clipboard, OSC 52 when it is unavailable
    #[default]
    Auto,
    /// System clipboard only
    System,
    /// Terminal OSC 52 only
    Osc52,
}

impl fmt::Display for ClipboardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardMode::Auto => write!(f, "auto"),
            ClipboardMode::System => write!(f, "system"),
            ClipboardMode::Osc52 => write!(f, "osc52"),
        }
    }
}

/// Stream the OSC 52 fallback writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStream {
    /// The form owns stdout while it runs
    Stdout,
    /// Keeps stdout clean for piped CLI output
    Stderr,
}

pub struct ClipboardWriter {
    backend: Box<dyn ClipboardBackend>,
}

impl ClipboardWriter {
    /// Select a strategy for `mode` based on what the environment offers.
    /// The OSC 52 fallback, if chosen, writes to `stream`.
    pub fn detect(mode: ClipboardMode, stream: TerminalStream) -> Self {
        Self::select(
            mode,
            || {
                SystemClipboard::connect()
                    .map(|system| Box::new(system) as Box<dyn ClipboardBackend>)
                    .map_err(|e| e.to_string())
            },
            || match stream {
                TerminalStream::Stdout => Box::new(Osc52Clipboard::stdout()) as Box<dyn ClipboardBackend>,
                TerminalStream::Stderr => Box::new(Osc52Clipboard::stderr()),
            },
        )
    }

    /// Choose between the primary backend returned by `connect_primary` and the
    /// one built by `fallback`. The fallback is used in auto mode only when
    /// the primary reports itself as unavailable.
    pub fn select<P, F>(mode: ClipboardMode, connect_primary: P, fallback: F) -> Self
    where
        P: FnOnce() -> Result<Box<dyn ClipboardBackend>, String>,
        F: FnOnce() -> Box<dyn ClipboardBackend>,
    {
        let backend = match mode {
            ClipboardMode::Auto => connect_primary().unwrap_or_else(|reason| {
                info!("System clipboard unavailable ({reason}), falling back to OSC 52");
                fallback()
            }),
            ClipboardMode::System => connect_primary().unwrap_or_else(|reason| {
                warn!("System clipboard unavailable ({reason}), will retry on copy");
                Box::new(SystemClipboard::deferred())
            }),
            ClipboardMode::Osc52 => fallback(),
        };
        info!(mode = %mode, mechanism = %backend.mechanism(), "Clipboard ready");
        Self { backend }
    }

    pub fn with_backend(backend: impl ClipboardBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn mechanism(&self) -> Mechanism {
        self.backend.mechanism()
    }

    /// Place `text` on the clipboard.
    ///
    /// Empty text is refused with [`FormError::NoContent`] before any backend
    /// is touched.
    pub fn write_to_clipboard(&mut self, text: &str) -> Result<(), FormError> {
        if text.is_empty() {
            return Err(FormError::NoContent);
        }

        match self.backend.write_text(text) {
            Ok(()) => {
                info!(
                    mechanism = %self.backend.mechanism(),
                    bytes = text.len(),
                    "Copying to clipboard was successful"
                );
                Ok(())
            }
            Err(e) => {
                warn!("{}", e.diagnostic());
                Err(e)
            }
        }
    }
}
