use crate::clipboard::{ClipboardMode, ClipboardWriter};
use crate::encoder;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "b64form")]
#[command(version, about = "Encode text as base64 and copy it to the clipboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Clipboard strategy, overriding the config file
    #[arg(long, global = true, value_enum)]
    pub clipboard: Option<ClipboardMode>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode TEXT (or stdin) and print the result
    Encode {
        /// Text to encode; read from stdin when omitted
        text: Option<String>,

        /// Also copy the result to the clipboard
        #[arg(short, long)]
        copy: bool,
    },
}

/// Drop the single newline (`\n` or `\r\n`) most shells append to piped text.
pub fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Print the encoding of `text` to `out`, then copy it when a clipboard is given.
///
/// `out` receives nothing but the encoded line.
pub fn run_encode<W: Write>(
    text: &str,
    clipboard: Option<&mut ClipboardWriter>,
    out: &mut W,
) -> Result<()> {
    let encoded = encoder::encode(text);
    writeln!(out, "{encoded}")?;
    out.flush()?;

    if let Some(clipboard) = clipboard {
        clipboard.write_to_clipboard(&encoded)?;
    }

    Ok(())
}
