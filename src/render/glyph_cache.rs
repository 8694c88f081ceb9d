use std::collections::HashMap;

/// A glyph at an integer pixel size.
///
/// The pipeline only rasterizes at whole-pixel sizes (the fitting search
/// steps one pixel at a time), so the key needs no sub-pixel quantization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct GlyphKey {
    pub glyph_index: u16,
    pub size_px: u32,
}

/// A rasterized coverage bitmap with its placement metrics.
pub(crate) struct GlyphRaster {
    pub metrics: fontdue::Metrics,
    pub coverage: Vec<u8>,
}

/// Memoizes `fontdue` rasterization across renders.
///
/// Keyed per face: swapping in a different face drops everything, since
/// glyph indices are only meaningful within one font.
pub(crate) struct GlyphCache {
    face: Option<fontdb::ID>,
    rasters: HashMap<GlyphKey, GlyphRaster, fxhash::FxBuildHasher>,
}

impl GlyphCache {
    pub fn new() -> Self {
        Self {
            face: None,
            rasters: HashMap::with_hasher(fxhash::FxBuildHasher::default()),
        }
    }

    /// Rasterized bitmap for `glyph_index` of `font` at `size_px`.
    pub fn raster(
        &mut self,
        face: fontdb::ID,
        font: &fontdue::Font,
        glyph_index: u16,
        size_px: u32,
    ) -> &GlyphRaster {
        if self.face != Some(face) {
            self.rasters.clear();
            self.face = Some(face);
        }

        self.rasters
            .entry(GlyphKey {
                glyph_index,
                size_px,
            })
            .or_insert_with(|| {
                let (metrics, coverage) = font.rasterize_indexed(glyph_index, size_px as f32);
                GlyphRaster { metrics, coverage }
            })
    }

    /// Drops every cached raster.
    pub fn clear(&mut self) {
        self.face = None;
        self.rasters.clear();
    }

    /// Number of cached rasters.
    pub fn len(&self) -> usize {
        self.rasters.len()
    }
}
