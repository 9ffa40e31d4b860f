//! Font database for locating installed fonts by family

use fontdb::{Database, FaceInfo, Source};
use tracing::debug;

use super::matching::resolve_generic_family;
use super::{FontId, FontQuery};

/// Font database for loading and matching fonts
pub struct FontDatabase {
    db: Database,
}

impl FontDatabase {
    /// Create a new empty font database
    pub fn new() -> Self {
        Self { db: Database::new() }
    }

    /// Create a font database with system fonts loaded
    pub fn with_system_fonts() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        debug!(faces = db.len(), "loaded system fonts");
        Self { db }
    }

    /// Load a font from memory
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
    }

    /// Find a font matching the query
    ///
    /// Generic names such as `sans-serif` are tried first through a list of
    /// well known concrete families, then through fontdb's own generic
    /// family settings.
    pub fn query(&self, query: &FontQuery) -> Option<FontId> {
        let mut families = Vec::new();
        for family in &query.families {
            families.extend(
                resolve_generic_family(family)
                    .iter()
                    .map(|&name| fontdb::Family::Name(name)),
            );
            families.push(generic_or_name(family));
        }

        self.db
            .query(&fontdb::Query {
                families: &families,
                weight: fontdb::Weight::NORMAL,
                stretch: fontdb::Stretch::Normal,
                style: fontdb::Style::Normal,
            })
            .map(FontId)
    }

    /// Get font info by ID
    pub fn face_info(&self, id: FontId) -> Option<&FaceInfo> {
        self.db.face(id.0)
    }

    /// Path of the file a face was loaded from, if any
    pub fn face_path(&self, id: FontId) -> Option<&std::path::Path> {
        match &self.face_info(id)?.source {
            Source::File(path) | Source::SharedFile(path, _) => Some(path.as_path()),
            Source::Binary(_) => None,
        }
    }

    /// Run `f` with the raw font data and face index
    pub fn with_face_data<R>(&self, id: FontId, f: impl FnOnce(&[u8], u32) -> R) -> Option<R> {
        self.db.with_face_data(id.0, f)
    }

    /// Any loaded face, in load order
    pub fn first_face(&self) -> Option<FontId> {
        self.db.faces().next().map(|face| FontId(face.id))
    }

    /// Number of loaded fonts
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if database is empty
    pub fn is_empty(&self) -> bool {
        self.db.len() == 0
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}

fn generic_or_name(family: &str) -> fontdb::Family<'_> {
    match family.to_ascii_lowercase().as_str() {
        "serif" => fontdb::Family::Serif,
        "sans-serif" => fontdb::Family::SansSerif,
        "monospace" => fontdb::Family::Monospace,
        "cursive" => fontdb::Family::Cursive,
        "fantasy" => fontdb::Family::Fantasy,
        _ => fontdb::Family::Name(family),
    }
}
