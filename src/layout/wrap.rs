use crate::layout::measure::TextMeasurer;
use crate::layout::spacing::WORD_GAP;

/// Packs spaced words into lines no wider than `max_width` at `size`
/// pixels.
///
/// Greedy single forward pass. The first word of a line is accepted
/// unconditionally, which guarantees progress when a single word is wider
/// than the limit; such a word occupies its own line and is never split.
/// The width comparison is inclusive, so a word that exactly fills the
/// remaining space stays on the current line.
///
/// Widths depend on the font size, so the fitting search re-invokes this
/// for every candidate size.
pub fn wrap(
    spaced: &str,
    max_width: f32,
    size: f32,
    measurer: &impl TextMeasurer,
) -> Vec<String> {
    let words = spaced
        .split(WORD_GAP)
        .filter(|word| !word.trim().is_empty());

    let gap_width = measurer.width(WORD_GAP, size);

    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_width = 0.0f32;

    for word in words {
        let word_width = measurer.width(word, size);

        if current.is_empty() {
            current.push(word);
            current_width = word_width;
        } else if current_width + gap_width + word_width <= max_width {
            current.push(word);
            current_width += gap_width + word_width;
        } else {
            lines.push(current.join(WORD_GAP));
            current.clear();
            current.push(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current.join(WORD_GAP));
    }

    lines
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Synthetic metrics: every char is `per_char * size` wide.
    pub(crate) struct CharCells {
        pub per_char: f32,
    }

    impl TextMeasurer for CharCells {
        fn width(&self, text: &str, size: f32) -> f32 {
            text.chars().count() as f32 * self.per_char * size
        }
    }

    fn words_of(lines: &[String]) -> Vec<&str> {
        lines
            .iter()
            .flat_map(|line| line.split(WORD_GAP))
            .collect()
    }

    #[test]
    fn preserves_word_sequence() {
        let measurer = CharCells { per_char: 10.0 };
        let spaced = "alpha    beta    gamma    delta";
        let lines = wrap(spaced, 200.0, 1.0, &measurer);

        assert_eq!(words_of(&lines), ["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn respects_the_width_limit() {
        let measurer = CharCells { per_char: 10.0 };
        // "ab" = 20, gap = 40: two words need 80, three need 140.
        let lines = wrap("ab    cd    ef", 100.0, 1.0, &measurer);

        assert_eq!(lines, ["ab    cd", "ef"]);
        for line in &lines {
            assert!(measurer.width(line, 1.0) <= 100.0);
        }
    }

    #[test]
    fn exact_fit_stays_on_the_line() {
        let measurer = CharCells { per_char: 10.0 };
        // 30 + 40 + 30 == 100 exactly.
        let lines = wrap("abc    def", 100.0, 1.0, &measurer);
        assert_eq!(lines, ["abc    def"]);
    }

    #[test]
    fn one_unit_over_wraps() {
        let measurer = CharCells { per_char: 10.0 };
        let lines = wrap("abc    def", 99.0, 1.0, &measurer);
        assert_eq!(lines, ["abc", "def"]);
    }

    #[test]
    fn overlong_word_gets_its_own_line_and_terminates() {
        let measurer = CharCells { per_char: 10.0 };
        let long_word = "x".repeat(50);
        let spaced = format!("hi    {long_word}    yo");
        let lines = wrap(&spaced, 100.0, 1.0, &measurer);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], long_word);
        assert!(measurer.width(&lines[1], 1.0) > 100.0);
    }

    #[test]
    fn drops_whitespace_only_tokens() {
        let measurer = CharCells { per_char: 10.0 };
        // A doubled gap produces an empty token between the words.
        let lines = wrap("ab        cd", 1000.0, 1.0, &measurer);
        assert_eq!(lines, ["ab    cd"]);
    }

    #[test]
    fn empty_input_produces_no_lines() {
        let measurer = CharCells { per_char: 10.0 };
        assert!(wrap("", 100.0, 1.0, &measurer).is_empty());
    }
}
