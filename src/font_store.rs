use std::{collections::HashMap, path::PathBuf, sync::Arc};

/// Font loading and lookup backing the renderer.
///
/// Combines a database of available faces (`fontdb`) with a cache of parsed
/// font instances (`fontdue`). Faces are parsed lazily the first time they
/// are requested, so registering a large system font set stays cheap.
pub struct FontStore {
    /// Faces known to fontdb.
    font_db: fontdb::Database,
    /// Faces that have been parsed by fontdue.
    /// Not every face in the database is necessarily loaded here.
    loaded: HashMap<fontdb::ID, Arc<fontdue::Font>, fxhash::FxBuildHasher>,
}

impl Default for FontStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FontStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            font_db: fontdb::Database::new(),
            loaded: HashMap::with_hasher(fxhash::FxBuildHasher::default()),
        }
    }
}

/// Loading fonts into the database.
impl FontStore {
    /// Registers a font from binary data.
    pub fn load_font_binary(&mut self, data: impl Into<Vec<u8>>) {
        self.font_db.load_font_data(data.into());
    }

    /// Registers a font from a file path.
    pub fn load_font_file(&mut self, path: PathBuf) -> Result<(), std::io::Error> {
        self.font_db.load_font_file(path)
    }

    /// Registers the system fonts.
    pub fn load_system_fonts(&mut self) {
        self.font_db.load_system_fonts();
    }

    /// Checks whether any face is registered.
    pub fn is_empty(&self) -> bool {
        self.font_db.is_empty()
    }

    /// Returns the number of registered faces.
    pub fn len(&self) -> usize {
        self.font_db.len()
    }
}

/// Face lookup.
impl FontStore {
    /// Queries for a face matching the description.
    ///
    /// Returns the ID and the parsed font if found.
    pub fn query(&mut self, query: &fontdb::Query) -> Option<(fontdb::ID, Arc<fontdue::Font>)> {
        let id = self.font_db.query(query)?;
        self.font(id).map(|font| (id, font))
    }

    /// Retrieves a parsed font by ID, parsing it on first access.
    pub fn font(&mut self, id: fontdb::ID) -> Option<Arc<fontdue::Font>> {
        use std::collections::hash_map::Entry;

        match self.loaded.entry(id) {
            Entry::Occupied(entry) => Some(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let parsed = self.font_db.with_face_data(id, |data, index| {
                    fontdue::Font::from_bytes(
                        data,
                        fontdue::FontSettings {
                            collection_index: index,
                            scale: 40.0,
                            load_substitutions: true,
                        },
                    )
                })?;

                match parsed {
                    Ok(font) => {
                        let r: &mut Arc<fontdue::Font> = entry.insert(Arc::new(font));
                        Some(Arc::clone(r))
                    }
                    Err(e) => {
                        log::error!("Failed to parse font face (id: {:?}): {}", id, e);
                        None
                    }
                }
            }
        }
    }

    /// Resolves the narrow sans-serif face used for both measurement and
    /// drawing.
    ///
    /// Preference order: a named narrow face, a condensed sans-serif, any
    /// sans-serif, and finally whatever face is registered first. Callers
    /// must measure and draw with the same returned face or wrapped line
    /// widths stop matching the painted output.
    pub fn narrow_sans(&mut self) -> Option<(fontdb::ID, Arc<fontdue::Font>)> {
        const NARROW: &[fontdb::Family<'static>] = &[
            fontdb::Family::Name("Arial Narrow"),
            fontdb::Family::Name("Liberation Sans Narrow"),
            fontdb::Family::SansSerif,
        ];

        let condensed = fontdb::Query {
            families: NARROW,
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Condensed,
            style: fontdb::Style::Normal,
        };
        if let Some(found) = self.query(&condensed) {
            return Some(found);
        }

        let relaxed = fontdb::Query {
            stretch: fontdb::Stretch::Normal,
            ..condensed
        };
        if let Some(found) = self.query(&relaxed) {
            return Some(found);
        }

        let first = self.font_db.faces().next().map(|face| face.id)?;
        self.font(first).map(|font| (first, font))
    }
}
