use std::sync::Arc;

/// Measures rendered text width at a given pixel size.
///
/// Layout is written against this seam instead of a concrete font engine so
/// wrapping and fitting can be tested with synthetic metrics. Host font
/// engines do not produce bit-identical widths across platforms; only the
/// layout invariants are portable.
pub trait TextMeasurer {
    /// Width of `text` rendered at `size` pixels.
    fn width(&self, text: &str, size: f32) -> f32;
}

/// Pen position of a single glyph within a measured string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPen {
    /// Glyph index in the measured face.
    pub index: u16,
    /// Kerned pen origin, relative to the start of the string.
    pub origin: f32,
}

/// `fontdue`-backed measurer over a single face.
///
/// Widths are kerned pen advances: the same accumulation the painter uses
/// to place glyphs, so a line that measures within a limit also draws
/// within it. Ink extents would measure the all-space [`WORD_GAP`] as zero
/// and break wrapping entirely.
///
/// [`WORD_GAP`]: crate::layout::WORD_GAP
pub struct FaceMeasurer {
    font: Arc<fontdue::Font>,
}

impl FaceMeasurer {
    pub fn new(font: Arc<fontdue::Font>) -> Self {
        Self { font }
    }

    /// The face this measurer reads metrics from.
    pub fn font(&self) -> &Arc<fontdue::Font> {
        &self.font
    }

    /// Kerned pen origin for every glyph in `text`.
    ///
    /// The painter draws from these origins, which keeps placement and
    /// [`TextMeasurer::width`] in exact agreement.
    pub fn pens(&self, text: &str, size: f32) -> Vec<GlyphPen> {
        let mut pens = Vec::new();
        let mut advance = 0.0f32;
        let mut prev: Option<u16> = None;

        for ch in text.chars() {
            let index = self.font.lookup_glyph_index(ch);
            if let Some(prev) = prev {
                advance += self
                    .font
                    .horizontal_kern_indexed(prev, index, size)
                    .unwrap_or(0.0);
            }

            pens.push(GlyphPen {
                index,
                origin: advance,
            });

            advance += self.font.metrics_indexed(index, size).advance_width;
            prev = Some(index);
        }

        pens
    }
}

impl TextMeasurer for FaceMeasurer {
    fn width(&self, text: &str, size: f32) -> f32 {
        let mut advance = 0.0f32;
        let mut prev: Option<u16> = None;

        for ch in text.chars() {
            let index = self.font.lookup_glyph_index(ch);
            if let Some(prev) = prev {
                advance += self
                    .font
                    .horizontal_kern_indexed(prev, index, size)
                    .unwrap_or(0.0);
            }

            advance += self.font.metrics_indexed(index, size).advance_width;
            prev = Some(index);
        }

        advance.max(0.0)
    }
}
