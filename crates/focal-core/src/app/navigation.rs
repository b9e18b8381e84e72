impl ReaderSession {
    pub fn new(words: WordSequence, config: ReaderConfig) -> Self {
        let position = NavigationState::new(words.len());
        let mut preview = PreviewWindow::new(config.window_size);
        let visible = preview.recompute(position.current(), words.len());

        Self {
            words,
            position,
            preview,
            visible,
        }
    }

    /// Apply one navigation command, then refresh the preview slice from
    /// the new cursor position. Total: boundary steps clamp silently.
    pub fn apply(&mut self, event: InputEvent) {
        let index = match event {
            InputEvent::Advance => self.position.next(),
            InputEvent::Retreat => self.position.previous(),
        };
        self.visible = self.preview.recompute(index, self.words.len());
        debug!(
            "session: {event:?} index={index} window_start={}",
            self.preview.start()
        );
    }

    pub fn current_index(&self) -> usize {
        self.position.current()
    }

    pub fn window_start(&self) -> usize {
        self.preview.start()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
