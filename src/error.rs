use std::fmt;
use std::io;
use thiserror::Error;

/// The clipboard strategy that performed (or failed) a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mechanism {
    System,
    Osc52,
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mechanism::System => write!(f, "system clipboard"),
            Mechanism::Osc52 => write!(f, "terminal OSC 52"),
        }
    }
}

/// Underlying reason a clipboard write failed.
#[derive(Debug, Error)]
pub enum ClipboardCause {
    #[error("{0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Recoverable failures surfaced to the user in the error popover.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("No text to copy. Try encoding something first.")]
    NoContent,

    #[error("Failed to copy (using {mechanism}).")]
    ClipboardWrite {
        mechanism: Mechanism,
        #[source]
        source: ClipboardCause,
    },

    #[error("Failed to encode text: {0}")]
    Encoding(String),
}

impl FormError {
    pub fn clipboard(mechanism: Mechanism, source: impl Into<ClipboardCause>) -> Self {
        FormError::ClipboardWrite {
            mechanism,
            source: source.into(),
        }
    }

    /// Text placed in the error slot. The clipboard cause stays out of it.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Full cause chain, for the log.
    pub fn diagnostic(&self) -> String {
        match self {
            FormError::ClipboardWrite { mechanism, source } => {
                format!("clipboard write via {mechanism} failed: {source}")
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_content_message() {
        assert_eq!(
            FormError::NoContent.user_message(),
            "No text to copy. Try encoding something first."
        );
    }

    #[test]
    fn test_clipboard_message_hides_cause() {
        let err = FormError::clipboard(
            Mechanism::System,
            ClipboardCause::Backend("X11 server connection timed out".to_string()),
        );
        assert_eq!(err.user_message(), "Failed to copy (using system clipboard).");
        assert!(err.diagnostic().contains("X11 server connection timed out"));
    }

    #[test]
    fn test_io_cause_converts() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed");
        let err = FormError::clipboard(Mechanism::Osc52, io_err);
        assert_eq!(err.user_message(), "Failed to copy (using terminal OSC 52).");
        assert!(err.diagnostic().contains("terminal closed"));
    }
}
