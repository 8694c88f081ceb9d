use std::path::Path;

use parking_lot::Mutex;

use crate::color::Color;
use crate::error::Error;
use crate::font_store::FontStore;
use crate::layout::{FaceMeasurer, choose_font_size, space_words};
use crate::render::{Canvas, Painter};

/// Fixed file name for the exported image.
pub const EXPORT_FILE_NAME: &str = "wordmark-text.png";

/// Geometry and size-search bounds for a render.
///
/// The defaults are the output contract; change them only when
/// compatibility with previously exported images does not matter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Edge length of the square canvas in pixels.
    pub canvas_size: u32,
    /// Horizontal and vertical padding in pixels.
    pub padding: f32,
    /// Upper bound of the font-size search (exclusive in the result).
    pub max_font_size: u32,
    /// Floor of the font-size search.
    pub min_font_size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas_size: 500,
            padding: 20.0,
            max_font_size: 120,
            min_font_size: 20,
        }
    }
}

/// Display state of the generator.
///
/// A render runs to completion inside each setter, so a distinct
/// "rendering" state is never observable from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing drawn yet, or the text has been cleared.
    Idle,
    /// The canvas holds a finished image.
    Rendered,
}

/// Inputs the next render is computed from.
struct Inputs {
    text: String,
    background: Color,
    ink: Color,
    phase: Phase,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            text: String::new(),
            background: Color::WHITE,
            ink: Color::BLACK,
            phase: Phase::Idle,
        }
    }
}

/// High-level entry point: owns the fonts, the canvas, and the current
/// inputs, and re-renders whenever an input changes.
///
/// Fields live behind `Mutex` so the generator can be driven through a
/// shared reference, which is how UI event handlers typically hold it. A
/// render holds the canvas lock from the first fill to the finished blur,
/// so readers only ever observe completed images.
pub struct Generator {
    options: RenderOptions,
    font_store: Mutex<FontStore>,
    painter: Mutex<Painter>,
    canvas: Mutex<Canvas>,
    inputs: Mutex<Inputs>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Creates a generator with the contract geometry and an empty font
    /// store.
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Creates a generator with custom geometry.
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            font_store: Mutex::new(FontStore::new()),
            painter: Mutex::new(Painter::new()),
            canvas: Mutex::new(Canvas::new(options.canvas_size)),
            inputs: Mutex::new(Inputs::default()),
        }
    }

    /// The geometry this generator renders with.
    pub fn options(&self) -> RenderOptions {
        self.options
    }
}

/// Font loading, forwarded to the store.
impl Generator {
    /// Registers the system fonts.
    pub fn load_system_fonts(&self) {
        self.font_store.lock().load_system_fonts();
    }

    /// Registers a font from binary data.
    pub fn load_font_binary(&self, data: impl Into<Vec<u8>>) {
        self.font_store.lock().load_font_binary(data);
    }

    /// Registers a font from a file path.
    pub fn load_font_file(&self, path: std::path::PathBuf) -> Result<(), std::io::Error> {
        self.font_store.lock().load_font_file(path)
    }

    /// Checks whether any font is registered.
    pub fn has_fonts(&self) -> bool {
        !self.font_store.lock().is_empty()
    }
}

/// Input state. Every setter triggers a full synchronous re-render.
impl Generator {
    pub fn set_text(&self, text: impl Into<String>) {
        self.inputs.lock().text = text.into();
        self.refresh();
    }

    pub fn set_background_color(&self, color: Color) {
        self.inputs.lock().background = color;
        self.refresh();
    }

    pub fn set_text_color(&self, color: Color) {
        self.inputs.lock().ink = color;
        self.refresh();
    }

    pub fn text(&self) -> String {
        self.inputs.lock().text.clone()
    }

    pub fn background_color(&self) -> Color {
        self.inputs.lock().background
    }

    pub fn text_color(&self) -> Color {
        self.inputs.lock().ink
    }

    pub fn phase(&self) -> Phase {
        self.inputs.lock().phase
    }
}

/// Rendering and export.
impl Generator {
    /// Re-renders the canvas from the current inputs.
    ///
    /// Empty text leaves the canvas untouched and the phase [`Phase::Idle`]
    /// (a UI shows a placeholder instead). Called automatically by the
    /// input setters; calling it again by hand is harmless.
    pub fn refresh(&self) {
        let (text, background, ink) = {
            let inputs = self.inputs.lock();
            (inputs.text.clone(), inputs.background, inputs.ink)
        };

        if text.is_empty() {
            self.inputs.lock().phase = Phase::Idle;
            return;
        }

        let Some((face, font)) = self.font_store.lock().narrow_sans() else {
            log::warn!("render skipped: no usable font registered");
            return;
        };

        let spaced = space_words(&text);
        let measurer = FaceMeasurer::new(font.clone());

        let usable_width = self.options.canvas_size as f32 - 2.0 * self.options.padding;
        let fit = choose_font_size(
            &spaced,
            usable_width,
            self.options.canvas_size as f32,
            self.options.padding,
            self.options.max_font_size,
            self.options.min_font_size,
            &measurer,
        );

        log::debug!(
            "render: {} word(s) -> {} line(s) at {}px",
            text.split_whitespace().count(),
            fit.lines.len(),
            fit.font_size
        );

        self.painter.lock().paint(
            &mut self.canvas.lock(),
            &fit.lines,
            face,
            &font,
            fit.font_size,
            background,
            ink,
        );

        self.inputs.lock().phase = Phase::Rendered;
    }

    /// PNG bytes of the finished image, or `None` while nothing has been
    /// rendered (the export stays disabled until text is entered).
    pub fn export_png(&self) -> Result<Option<Vec<u8>>, Error> {
        if self.phase() == Phase::Idle {
            return Ok(None);
        }
        self.canvas.lock().to_png_bytes().map(Some)
    }

    /// Writes the finished image to `path`; returns `false` without
    /// touching the filesystem while nothing has been rendered.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<bool, Error> {
        let Some(bytes) = self.export_png()? else {
            return Ok(false);
        };
        std::fs::write(path, bytes)?;
        Ok(true)
    }

    /// Drops cached glyph rasters.
    pub fn clear_glyph_cache(&self) {
        self.painter.lock().clear_cache();
    }
}
