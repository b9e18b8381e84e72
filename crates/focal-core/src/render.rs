//! View models pulled by the host renderer after every command.

/// Focus word split at its ORP pivot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WordSpan<'a> {
    pub prefix: &'a str,
    pub remainder: &'a str,
}

/// Numeric progress through the sequence. `fraction` is
/// `(index + 1) / total`, or `0.0` when nothing is loaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    pub index: usize,
    pub total: usize,
    pub fraction: f64,
}

impl Progress {
    pub const fn empty() -> Self {
        Self {
            index: 0,
            total: 0,
            fraction: 0.0,
        }
    }
}

/// One word of the preview slice, in window order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PreviewEntry<'a> {
    pub word: &'a str,
    pub is_current: bool,
}

/// Per-step view model consumed by the host renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen<'a> {
    /// Sentinel for a session with no words loaded.
    Empty,
    Reading {
        word: WordSpan<'a>,
        progress: Progress,
        preview: &'a [PreviewEntry<'a>],
    },
}
