//! Tokenized text handed to a reader session.

/// Immutable ordered list of non-empty words, produced once from raw text.
///
/// A new text load builds a new sequence together with a fresh session;
/// nothing mutates the words afterwards. Zero length is a defined state,
/// not an error.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordSequence {
    words: Vec<Box<str>>,
}

impl WordSequence {
    /// Split raw text on Unicode whitespace, dropping empty fragments.
    /// All-whitespace input yields the empty sequence.
    pub fn tokenize(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(AsRef::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(AsRef::as_ref)
    }
}
