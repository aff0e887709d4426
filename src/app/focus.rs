use std::fmt;

/// Which control receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,        // Decoded text, editable
    EncodeButton,
    Output,       // Encoded text, read-only
    CopyButton,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Input,
        Focus::EncodeButton,
        Focus::Output,
        Focus::CopyButton,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Focus::Input => write!(f, "INPUT"),
            Focus::EncodeButton => write!(f, "ENCODE"),
            Focus::Output => write!(f, "OUTPUT"),
            Focus::CopyButton => write!(f, "COPY"),
        }
    }
}
