//! Terminal rendering of the core view model.
//!
//! The core hands over borrowed spans; this module only decides colors,
//! alignment, and layout. It never navigates.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use focal_core::{
    app::ReaderSession,
    render::{PreviewEntry, Progress, Screen, WordSpan},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn enter() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    install_panic_hook();
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Put the terminal back before the default hook prints the panic.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        hook(info);
    }));
}

pub fn draw(frame: &mut Frame, session: &ReaderSession) {
    session.with_screen(|screen| match screen {
        Screen::Empty => draw_empty(frame),
        Screen::Reading {
            word,
            progress,
            preview,
        } => draw_reading(frame, word, progress, preview),
    });
}

fn draw_empty(frame: &mut Frame) {
    let message = Paragraph::new("No text loaded")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(message, frame.area());
}

fn draw_reading(
    frame: &mut Frame,
    word: WordSpan<'_>,
    progress: Progress,
    preview: &[PreviewEntry<'_>],
) {
    let [progress_area, word_area, preview_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Percentage(40),
    ])
    .areas(frame.area());

    frame.render_widget(progress_line(progress), progress_area);
    draw_word(frame, word, word_area);
    frame.render_widget(preview_paragraph(preview), preview_area);
}

fn progress_line(progress: Progress) -> Paragraph<'static> {
    let percent = progress.fraction * 100.0;
    Paragraph::new(format!(
        "{} / {} ({percent:.1}%)",
        progress.index + 1,
        progress.total
    ))
    .style(Style::default().add_modifier(Modifier::DIM))
}

/// Focus word on the middle row, padded so the ORP pivot sits at the
/// horizontal center regardless of word length.
fn draw_word(frame: &mut Frame, word: WordSpan<'_>, area: Rect) {
    if area.height == 0 {
        return;
    }

    let pivot_column = area.width as usize / 2;
    let pad = pivot_column.saturating_sub(word.prefix.width());
    let line = Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(
            word.prefix,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(word.remainder),
    ]);

    let row = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(line), row);
}

fn preview_paragraph<'a>(preview: &[PreviewEntry<'a>]) -> Paragraph<'a> {
    let mut spans = Vec::with_capacity(preview.len() * 2);
    for (slot, entry) in preview.iter().enumerate() {
        if slot > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if entry.is_current {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(entry.word, style));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}
