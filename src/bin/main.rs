use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use focal_core::{
    app::{DEFAULT_WINDOW_SIZE, ReaderConfig, ReaderSession},
    content::WordSequence,
    input::InputEvent,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[path = "main/source.rs"]
mod source;
#[path = "main/ui.rs"]
mod ui;

/// Single-session RSVP reader for text from the clipboard, a file, or stdin.
#[derive(Debug, Parser)]
#[command(name = "focal", version, about)]
struct Cli {
    /// Text file to read. Omit to read stdin (or use --paste).
    file: Option<PathBuf>,

    /// Read the text from the system clipboard instead of a file.
    #[arg(long, conflicts_with = "file")]
    paste: bool,

    /// Number of context words in the preview window.
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
    window: usize,

    /// Log file path. Defaults to focal.log in the user cache dir.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum KeyAction {
    Apply(InputEvent),
    Quit,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let text = source::acquire(cli.file.as_deref(), cli.paste)?;
    let words = WordSequence::tokenize(&text);
    info!(words = words.len(), paste = cli.paste, "text loaded");

    let config = ReaderConfig {
        window_size: cli.window.max(1),
    };
    let mut session = ReaderSession::new(words, config);

    let mut terminal = ui::enter()?;
    let result = run(&mut terminal, &mut session);
    ui::restore()?;
    result
}

fn run(terminal: &mut ui::Tui, session: &mut ReaderSession) -> anyhow::Result<()> {
    loop {
        terminal
            .draw(|frame| ui::draw(frame, session))
            .context("drawing frame")?;

        match event::read().context("reading terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match map_key(key) {
                Some(KeyAction::Apply(command)) => session.apply(command),
                Some(KeyAction::Quit) => {
                    info!(index = session.current_index(), "session ended");
                    return Ok(());
                }
                None => {}
            },
            // Resize redraws on the next loop pass; everything else is noise.
            _ => {}
        }
    }
}

fn map_key(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => {
            Some(KeyAction::Apply(InputEvent::Advance))
        }
        KeyCode::Left | KeyCode::Char('h') => Some(KeyAction::Apply(InputEvent::Retreat)),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        _ => None,
    }
}

fn init_logging(path: Option<&Path>) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path.to_owned(),
        None => source::app_cache_dir().join("focal.log"),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log dir {}", parent.display()))?;
    }
    let file = fs::File::create(&path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    // Stderr belongs to the TUI, so everything goes to the file.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("FOCAL_LOG").unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_space_map_to_navigation() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(KeyAction::Apply(InputEvent::Advance))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(KeyAction::Apply(InputEvent::Advance))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(KeyAction::Apply(InputEvent::Retreat))
        );
    }

    #[test]
    fn quit_keys_and_ctrl_c() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
    }
}
