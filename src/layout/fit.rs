use crate::layout::measure::TextMeasurer;
use crate::layout::wrap::wrap;

/// Vertical advance per line, as a multiple of the font size.
pub const LINE_HEIGHT_SCALE: f32 = 1.5;

/// Outcome of the descending font-size search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FitResult {
    /// Chosen size in pixels, in `[min_font_size, max_font_size - 1]`.
    pub font_size: u32,
    /// Lines wrapped at the chosen size.
    pub lines: Vec<String>,
}

/// Picks the largest font size whose wrapped layout fits the vertical
/// budget.
///
/// Candidates descend one pixel at a time from `max_font_size - 1`, and
/// each candidate re-wraps the text because widths change with the size.
/// The height estimate is `lines * size * 1.5`, not measured ink height;
/// texts dominated by a few wide lines may over- or under-shrink slightly,
/// which is accepted.
///
/// When even `min_font_size` overflows the budget, the floor is returned
/// and the overflow is left to the painter (lines may run past the canvas
/// edge).
pub fn choose_font_size(
    spaced: &str,
    usable_width: f32,
    canvas_size: f32,
    padding: f32,
    max_font_size: u32,
    min_font_size: u32,
    measurer: &impl TextMeasurer,
) -> FitResult {
    let vertical_budget = canvas_size - 2.0 * padding;

    let mut font_size = max_font_size;
    loop {
        font_size -= 1;
        let lines = wrap(spaced, usable_width, font_size as f32, measurer);
        let total_height = lines.len() as f32 * font_size as f32 * LINE_HEIGHT_SCALE;

        if total_height <= vertical_budget || font_size <= min_font_size {
            return FitResult { font_size, lines };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::spacing::{WORD_GAP, space_words};
    use crate::layout::wrap::tests::CharCells;

    const CANVAS: f32 = 500.0;
    const PADDING: f32 = 20.0;
    const USABLE: f32 = CANVAS - 2.0 * PADDING;
    const MAX_SIZE: u32 = 120;
    const MIN_SIZE: u32 = 20;

    fn choose(spaced: &str, measurer: &CharCells) -> FitResult {
        choose_font_size(spaced, USABLE, CANVAS, PADDING, MAX_SIZE, MIN_SIZE, measurer)
    }

    #[test]
    fn short_text_lands_just_below_the_maximum() {
        let measurer = CharCells { per_char: 0.25 };
        let fit = choose(&space_words("Hello world"), &measurer);

        // One line well under the usable width already at the first
        // candidate, so the search stops immediately.
        assert_eq!(fit.font_size, MAX_SIZE - 1);
        assert_eq!(fit.lines.len(), 1);
        assert!(measurer.width(&fit.lines[0], fit.font_size as f32) <= USABLE);
    }

    #[test]
    fn long_text_descends_until_the_height_fits() {
        let measurer = CharCells { per_char: 0.25 };
        let raw = vec!["word"; 50].join(" ");
        let spaced = space_words(&raw);
        let fit = choose(&spaced, &measurer);

        assert!(fit.font_size >= MIN_SIZE && fit.font_size <= MAX_SIZE - 1);
        assert!(fit.lines.len() > 1);

        // The chosen size fits the budget...
        let budget = CANVAS - 2.0 * PADDING;
        let height = fit.lines.len() as f32 * fit.font_size as f32 * LINE_HEIGHT_SCALE;
        assert!(height <= budget);

        // ...and is the largest one that does.
        let next = fit.font_size + 1;
        let lines_above = wrap(&spaced, USABLE, next as f32, &measurer);
        let height_above = lines_above.len() as f32 * next as f32 * LINE_HEIGHT_SCALE;
        assert!(height_above > budget);

        // Word sequence survives the re-wrapping.
        let words: Vec<&str> = fit
            .lines
            .iter()
            .flat_map(|line| line.split(WORD_GAP))
            .collect();
        assert_eq!(words.len(), 50);
    }

    #[test]
    fn stops_at_the_floor_when_nothing_fits() {
        let measurer = CharCells { per_char: 200.0 };
        let raw = vec!["word"; 40].join(" ");
        let fit = choose(&space_words(&raw), &measurer);

        // Every word overflows a line on its own, so no candidate ever
        // fits; the floor is accepted with the overflow intact.
        assert_eq!(fit.font_size, MIN_SIZE);
        assert_eq!(fit.lines.len(), 40);
    }

    #[test]
    fn empty_text_stops_at_the_first_candidate() {
        let measurer = CharCells { per_char: 0.25 };
        let fit = choose("", &measurer);

        assert_eq!(fit.font_size, MAX_SIZE - 1);
        assert!(fit.lines.is_empty());
    }

    #[test]
    fn result_never_leaves_the_contract_range() {
        let measurer = CharCells { per_char: 1.0 };
        for words in [1usize, 3, 10, 80, 200] {
            let raw = vec!["ab"; words].join(" ");
            let fit = choose(&space_words(&raw), &measurer);
            assert!(fit.font_size >= MIN_SIZE);
            assert!(fit.font_size < MAX_SIZE);
        }
    }
}
