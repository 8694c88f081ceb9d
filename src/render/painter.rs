use std::sync::Arc;

use crate::color::Color;
use crate::layout::LINE_HEIGHT_SCALE;
use crate::layout::measure::{FaceMeasurer, TextMeasurer};
use crate::render::canvas::Canvas;
use crate::render::glyph_cache::GlyphCache;

/// Downward shift of the text block from true vertical center.
const CENTER_BIAS: f32 = 15.0;

/// Sigma of the finishing Gaussian blur.
const BLUR_SIGMA: f32 = 2.0;

/// Draws wrapped lines onto a canvas and applies the finishing blur.
///
/// The painter owns the glyph cache, so repeated renders of similar text
/// reuse rasterized bitmaps.
pub struct Painter {
    cache: GlyphCache,
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter {
    pub fn new() -> Self {
        Self {
            cache: GlyphCache::new(),
        }
    }

    /// Renders `lines` at `font_size` onto `canvas`.
    ///
    /// The whole surface is overwritten: background fill first, then each
    /// line horizontally centered and drawn from a top-anchored baseline,
    /// then a single whole-canvas blur pass. Measurement uses the same face
    /// and size as drawing; diverging the two breaks the wrapped widths.
    pub fn paint(
        &mut self,
        canvas: &mut Canvas,
        lines: &[String],
        face: fontdb::ID,
        font: &Arc<fontdue::Font>,
        font_size: u32,
        background: Color,
        ink: Color,
    ) {
        canvas.fill(background);

        let size = font_size as f32;
        let canvas_size = canvas.size() as f32;
        let line_height = size * LINE_HEIGHT_SCALE;
        let total_height = lines.len() as f32 * line_height;
        let start_y = (canvas_size - total_height) / 2.0 + CENTER_BIAS;

        // Top-anchored drawing: the baseline sits one ascent below the top
        // of each line slot.
        let ascent = font
            .horizontal_line_metrics(size)
            .map(|metrics| metrics.ascent)
            .unwrap_or(size);

        let measurer = FaceMeasurer::new(Arc::clone(font));

        for (row, line) in lines.iter().enumerate() {
            let line_width = measurer.width(line, size);
            let line_x = (canvas_size - line_width) / 2.0;
            let baseline = start_y + row as f32 * line_height + ascent;

            for pen in measurer.pens(line, size) {
                self.draw_glyph(
                    canvas,
                    face,
                    font,
                    pen.index,
                    font_size,
                    line_x + pen.origin,
                    baseline,
                    ink,
                );
            }
        }

        log::debug!(
            "painted {} line(s) at {}px, {} glyph raster(s) cached",
            lines.len(),
            font_size,
            self.cache.len()
        );

        canvas.blur(BLUR_SIGMA);
    }

    fn draw_glyph(
        &mut self,
        canvas: &mut Canvas,
        face: fontdb::ID,
        font: &fontdue::Font,
        glyph_index: u16,
        size_px: u32,
        pen_x: f32,
        baseline: f32,
        ink: Color,
    ) {
        let raster = self.cache.raster(face, font, glyph_index, size_px);

        if raster.metrics.width == 0 || raster.metrics.height == 0 {
            return;
        }

        let glyph_width = raster.metrics.width;
        let glyph_height = raster.metrics.height;
        let origin_x = pen_x + raster.metrics.xmin as f32;
        let origin_y = baseline - raster.metrics.ymin as f32 - raster.metrics.height as f32;

        for row in 0..glyph_height {
            let y = origin_y + row as f32;
            if y < 0.0 {
                continue;
            }

            for col in 0..glyph_width {
                let coverage = raster.coverage[row * glyph_width + col];
                if coverage == 0 {
                    continue;
                }

                let x = origin_x + col as f32;
                if x < 0.0 {
                    continue;
                }

                canvas.blend(x.floor() as u32, y.floor() as u32, ink, coverage);
            }
        }
    }

    /// Drops all cached glyph rasters.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
