//! Optimal-recognition-point split for the focus word.

/// Character index of the ORP pivot: a third of the way in, rounded down.
pub fn orp_index(word: &str) -> usize {
    word.chars().count() / 3
}

/// Split `word` into the emphasized prefix and the remainder at the ORP.
///
/// Character-based, so multi-byte words split on a character boundary.
/// Total for every string, including the empty one.
pub fn split(word: &str) -> (&str, &str) {
    let pivot = orp_index(word);
    let at = word
        .char_indices()
        .nth(pivot)
        .map_or(word.len(), |(offset, _)| offset);
    word.split_at(at)
}

#[cfg(test)]
mod tests {
    use super::{orp_index, split};

    #[test]
    fn seven_characters_pivot_after_two() {
        assert_eq!(orp_index("reading"), 2);
        assert_eq!(split("reading"), ("re", "ading"));
    }

    #[test]
    fn short_words_keep_an_empty_prefix() {
        assert_eq!(split("a"), ("", "a"));
        assert_eq!(split("an"), ("", "an"));
        assert_eq!(split("the"), ("t", "he"));
    }

    #[test]
    fn the_empty_word_splits_into_empty_halves() {
        assert_eq!(split(""), ("", ""));
    }

    #[test]
    fn multi_byte_words_split_on_character_boundaries() {
        // 6 characters, pivot 2, even though 'ú' is two bytes.
        assert_eq!(split("número"), ("nú", "mero"));
    }
}
