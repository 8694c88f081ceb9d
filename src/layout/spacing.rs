/// Separator placed between words for the stylized look.
///
/// The wrapper splits on this exact token to recover the word list, so the
/// spacer and the wrapper must always agree on it.
pub const WORD_GAP: &str = "    ";

/// Collapses whitespace runs and rejoins the surviving words with
/// [`WORD_GAP`].
///
/// Word order and content are preserved; empty and whitespace-only input
/// produce an empty string.
pub fn space_words(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(WORD_GAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_words_with_the_wide_gap() {
        assert_eq!(space_words("Hello world"), "Hello    world");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(space_words("  a \t b \n  c  "), "a    b    c");
    }

    #[test]
    fn preserves_word_count() {
        let raw = "one two  three\tfour \n five";
        let expected = raw.split_whitespace().count();
        let spaced = space_words(raw);
        assert_eq!(spaced.split(WORD_GAP).count(), expected);
    }

    #[test]
    fn empty_and_blank_input_produce_empty_output() {
        assert_eq!(space_words(""), "");
        assert_eq!(space_words("   \t\n  "), "");
    }
}
