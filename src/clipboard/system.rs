use super::ClipboardBackend;
use crate::error::{ClipboardCause, FormError, Mechanism};
use arboard::Clipboard;

/// Operating system clipboard.
///
/// On Linux the clipboard contents are owned by this process, so they persist
/// only while the application keeps the handle alive.
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    /// Open the clipboard now. An error here means the environment has no
    /// usable system clipboard.
    pub fn connect() -> Result<Self, arboard::Error> {
        Ok(Self {
            clipboard: Some(Clipboard::new()?),
        })
    }

    /// Open the clipboard on first write instead.
    pub fn deferred() -> Self {
        Self { clipboard: None }
    }
}

fn backend_error(e: arboard::Error) -> FormError {
    FormError::clipboard(Mechanism::System, ClipboardCause::Backend(e.to_string()))
}

impl ClipboardBackend for SystemClipboard {
    fn mechanism(&self) -> Mechanism {
        Mechanism::System
    }

    fn write_text(&mut self, text: &str) -> Result<(), FormError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(backend_error)?,
        };
        let clipboard = self.clipboard.insert(clipboard);
        clipboard.set_text(text).map_err(backend_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_returns_result() {
        // Headless CI has no display server; only the error shape is checked there.
        let mut clipboard = SystemClipboard::deferred();
        match clipboard.write_text("dGVzdA==") {
            Ok(()) => {}
            Err(e) => assert!(matches!(
                e,
                FormError::ClipboardWrite {
                    mechanism: Mechanism::System,
                    ..
                }
            )),
        }
    }
}
