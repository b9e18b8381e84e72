//! Cursor position with silent boundary clamping.

/// Current position within a word sequence.
///
/// `current < len` holds whenever `len > 0`; an empty sequence pins the
/// cursor at zero and every step is a no-op. Steps past either end clamp
/// silently: key repeat at a boundary must not interrupt the session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavigationState {
    current: usize,
    len: usize,
}

impl NavigationState {
    pub const fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub const fn current(&self) -> usize {
        self.current
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Step forward, clamping at the last word. Returns the new index.
    pub fn next(&mut self) -> usize {
        if self.current + 1 < self.len {
            self.current += 1;
        }
        self.current
    }

    /// Step backward, clamping at the first word. Returns the new index.
    pub fn previous(&mut self) -> usize {
        self.current = self.current.saturating_sub(1);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationState;

    #[test]
    fn next_clamps_at_the_last_word() {
        let mut position = NavigationState::new(4);
        for _ in 0..4 + 5 {
            position.next();
        }
        assert_eq!(position.current(), 3);
    }

    #[test]
    fn previous_clamps_at_the_first_word() {
        let mut position = NavigationState::new(4);
        for _ in 0..5 {
            position.previous();
        }
        assert_eq!(position.current(), 0);
    }

    #[test]
    fn boundary_steps_are_idempotent() {
        let mut position = NavigationState::new(2);
        assert_eq!(position.next(), 1);
        assert_eq!(position.next(), 1);
        assert_eq!(position.previous(), 0);
        assert_eq!(position.previous(), 0);
    }

    #[test]
    fn empty_sequence_never_moves() {
        let mut position = NavigationState::new(0);
        assert_eq!(position.next(), 0);
        assert_eq!(position.previous(), 0);
        assert_eq!(position.current(), 0);
    }
}
