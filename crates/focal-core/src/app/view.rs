impl ReaderSession {
    /// Hand the current view model to `f`. Borrows stay inside the call,
    /// so the preview slice can be assembled on the stack per step.
    pub fn with_screen<R, F>(&self, f: F) -> R
    where
        F: FnOnce(Screen<'_>) -> R,
    {
        if self.words.is_empty() {
            return f(Screen::Empty);
        }

        let current = self.position.current();
        let focus = self.words.word(current).unwrap_or("");
        let (prefix, remainder) = orp::split(focus);

        let mut preview = Vec::with_capacity(self.visible.len());
        for index in self.visible.clone() {
            let Some(word) = self.words.word(index) else {
                break;
            };
            preview.push(PreviewEntry {
                word,
                is_current: index == current,
            });
        }

        f(Screen::Reading {
            word: WordSpan { prefix, remainder },
            progress: self.progress(),
            preview: &preview,
        })
    }

    /// Fraction of the text consumed, `0.0` for an empty sequence.
    pub fn progress(&self) -> Progress {
        let total = self.words.len();
        if total == 0 {
            return Progress::empty();
        }

        let index = self.position.current();
        Progress {
            index,
            total,
            fraction: (index + 1) as f64 / total as f64,
        }
    }
}
