//! Session state machine for single-text RSVP reading.

use std::ops::Range;

use log::debug;

use crate::{
    content::WordSequence,
    input::InputEvent,
    orp,
    position::NavigationState,
    render::{PreviewEntry, Progress, Screen, WordSpan},
    window::PreviewWindow,
};

/// Default number of context words kept visible around the cursor.
pub const DEFAULT_WINDOW_SIZE: usize = 30;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub window_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

/// Single-session RSVP reader over one tokenized text.
///
/// Owns the word sequence, the cursor, and the preview window; the host
/// applies [`InputEvent`]s and pulls the resulting [`Screen`] through
/// [`ReaderSession::with_screen`]. A new text means a new session.
pub struct ReaderSession {
    words: WordSequence,
    position: NavigationState,
    preview: PreviewWindow,
    visible: Range<usize>,
}

include!("navigation.rs");
include!("view.rs");
