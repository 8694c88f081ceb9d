use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::color::Color;
use crate::error::Error;

/// Fixed-size square RGBA surface the painter draws on.
///
/// The surface is wholly overwritten by each render: `fill` erases the
/// previous content and every later write blends over that. Pixels survive
/// between renders only so the export can read the finished image.
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Creates a `size` x `size` surface, initially fully transparent.
    pub fn new(size: u32) -> Self {
        Self {
            pixels: RgbaImage::new(size, size),
        }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.pixels.width()
    }

    /// Overwrites every pixel with an opaque `color`.
    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for pixel in self.pixels.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Blends `coverage` (0 = none, 255 = full) of `color` over the pixel
    /// at `(x, y)`. Writes outside the surface are ignored.
    pub fn blend(&mut self, x: u32, y: u32, color: Color, coverage: u8) {
        if coverage == 0 || x >= self.pixels.width() || y >= self.pixels.height() {
            return;
        }

        let alpha = coverage as f32 / 255.0;
        let pixel = self.pixels.get_pixel_mut(x, y);

        for (channel, ink) in [color.r, color.g, color.b].into_iter().enumerate() {
            let base = pixel[channel] as f32 / 255.0;
            let ink = ink as f32 / 255.0;
            let out = ink * alpha + base * (1.0 - alpha);
            pixel[channel] = (out.clamp(0.0, 1.0) * 255.0) as u8;
        }
        pixel[3] = 0xFF;
    }

    /// Replaces the surface content with a Gaussian-blurred copy of itself.
    pub fn blur(&mut self, sigma: f32) {
        self.pixels = image::imageops::blur(&self.pixels, sigma);
    }

    /// Read access to the finished pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Encodes the surface as a PNG byte stream.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}
