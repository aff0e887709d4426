use anyhow::{Context, Result};
use b64_form::app::FormState;
use b64_form::cli::{self, Cli, Commands};
use b64_form::clipboard::{ClipboardMode, ClipboardWriter, TerminalStream};
use b64_form::config::Config;
use b64_form::ui::theme::Theme;
use b64_form::{logging, ui};
use clap::Parser;
use std::io::{self, Read};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let mode = cli.clipboard.unwrap_or(config.clipboard);

    match cli.command {
        Some(Commands::Encode { text, copy }) => {
            logging::init_cli_logging();
            handle_encode(text, copy, mode)?;
        }
        None => {
            logging::init_tui_logging()?;

            let clipboard = ClipboardWriter::detect(mode, TerminalStream::Stdout);
            let state = FormState::new(Theme::from_config(&config))
                .with_status_timeout(config.status_timeout())
                .with_clipboard_mechanism(clipboard.mechanism());

            ui::run_tui(state, clipboard)?;
        }
    }

    Ok(())
}

fn handle_encode(text: Option<String>, copy: bool, mode: ClipboardMode) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_stdin()?,
    };

    let mut clipboard = copy.then(|| ClipboardWriter::detect(mode, TerminalStream::Stderr));
    cli::run_encode(&text, clipboard.as_mut(), &mut io::stdout().lock())
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(cli::strip_trailing_newline(buf))
}
