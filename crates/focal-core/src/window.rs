//! Sliding preview window over the word sequence.

use std::ops::Range;

use log::debug;

/// Bounded visible slice that re-centers only when the cursor exits it.
///
/// The window never shifts by one per step. It jumps exactly when the
/// cursor walks past the right edge or leaves through the left edge, and
/// the jump places the cursor at the first visible slot in both
/// directions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PreviewWindow {
    start: usize,
    size: usize,
}

impl PreviewWindow {
    pub fn new(size: usize) -> Self {
        Self {
            start: 0,
            size: size.max(1),
        }
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Refresh the visible slice for `current` over a sequence of `len`
    /// words. Mutates `start` only on a re-center; an empty sequence
    /// yields an empty slice and leaves the window untouched.
    pub fn recompute(&mut self, current: usize, len: usize) -> Range<usize> {
        if len == 0 {
            return 0..0;
        }

        if current >= self.start + self.size || current < self.start {
            debug!("preview: re-center start {} -> {}", self.start, current);
            self.start = current;
        }

        let end = (self.start + self.size).min(len);
        debug_assert!(self.start <= current && current < self.start + self.size);
        self.start..end
    }
}
