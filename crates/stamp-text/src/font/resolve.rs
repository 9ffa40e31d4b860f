//! Font resolution with an explicit fallback outcome

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::{BitmapFont, Font, FontDatabase, FontQuery, OutlineFont};

/// Where the requested font comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A font file; `index` selects the face inside a collection
    Path { path: PathBuf, index: u32 },
    /// A family name looked up in the system font database
    Family(String),
}

impl FontSource {
    /// First face of a font file
    pub fn path(path: impl Into<PathBuf>) -> Self {
        FontSource::Path { path: path.into(), index: 0 }
    }

    pub fn family(name: impl Into<String>) -> Self {
        FontSource::Family(name.into())
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::Path { path, index: 0 } => write!(f, "{}", path.display()),
            FontSource::Path { path, index } => write!(f, "{}#{index}", path.display()),
            FontSource::Family(name) => write!(f, "family '{name}'"),
        }
    }
}

/// Why the requested font could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum FontLoadError {
    #[error("font file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("cannot read font file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported font data in {} (face {index}): {reason}", path.display())]
    Unsupported { path: PathBuf, index: u32, reason: String },

    #[error("no installed font matches family '{family}'")]
    FamilyNotFound { family: String },

    #[error("invalid font size {size}")]
    InvalidSize { size: f32 },
}

impl FontLoadError {
    /// The font is simply absent, as opposed to present but unusable
    pub fn is_missing(&self) -> bool {
        matches!(self, FontLoadError::Missing { .. } | FontLoadError::FamilyNotFound { .. })
    }

    fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => FontLoadError::Missing { path: path.to_path_buf() },
            _ => FontLoadError::Unreadable { path: path.to_path_buf(), source },
        }
    }
}

/// Which load failures are replaced by the built-in font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Every failure falls back
    #[default]
    AnyError,
    /// Only absent fonts fall back; unreadable or corrupt fonts fail
    MissingOnly,
    /// Never fall back
    Never,
}

impl FallbackPolicy {
    pub fn allows(&self, err: &FontLoadError) -> bool {
        match self {
            FallbackPolicy::AnyError => true,
            FallbackPolicy::MissingOnly => err.is_missing(),
            FallbackPolicy::Never => false,
        }
    }
}

/// Outcome of resolving a font
#[derive(Debug)]
pub enum FontResolution {
    /// The requested font loaded
    Requested(Font),
    /// The built-in font replaced the requested one
    Fallback { font: Font, reason: FontLoadError },
    /// No font is available under the active policy
    Failed(FontLoadError),
}

impl FontResolution {
    pub fn font(&self) -> Option<&Font> {
        match self {
            FontResolution::Requested(font) | FontResolution::Fallback { font, .. } => Some(font),
            FontResolution::Failed(_) => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FontResolution::Fallback { .. })
    }

    /// The font, or the error that left none
    pub fn into_result(self) -> Result<Font, FontLoadError> {
        match self {
            FontResolution::Requested(font) | FontResolution::Fallback { font, .. } => Ok(font),
            FontResolution::Failed(err) => Err(err),
        }
    }
}

/// Loads fonts from paths or families and applies a fallback policy
pub struct FontResolver {
    policy: FallbackPolicy,
    db: Option<FontDatabase>,
}

impl FontResolver {
    pub fn new(policy: FallbackPolicy) -> Self {
        Self { policy, db: None }
    }

    /// Use `db` for family lookups instead of scanning system fonts
    pub fn with_database(mut self, db: FontDatabase) -> Self {
        self.db = Some(db);
        self
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Load the requested font without any fallback
    pub fn load(&mut self, source: &FontSource, size: f32) -> Result<OutlineFont, FontLoadError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FontLoadError::InvalidSize { size });
        }

        match source {
            FontSource::Path { path, index } => load_file(path, *index, size),
            FontSource::Family(family) => self.load_family(family, size),
        }
    }

    /// Load the requested font, falling back to the built-in font when the
    /// policy allows
    pub fn resolve(&mut self, source: &FontSource, size: f32) -> FontResolution {
        match self.load(source, size) {
            Ok(font) => {
                info!(%source, font = font.name(), size, "loaded font");
                FontResolution::Requested(Font::Outline(font))
            }
            Err(reason) if self.policy.allows(&reason) => {
                warn!(%source, %reason, "falling back to {}", BitmapFont::NAME);
                FontResolution::Fallback { font: Font::Bitmap(BitmapFont::builtin()), reason }
            }
            Err(reason) => FontResolution::Failed(reason),
        }
    }

    fn load_family(&mut self, family: &str, size: f32) -> Result<OutlineFont, FontLoadError> {
        let db = self.db.get_or_insert_with(FontDatabase::with_system_fonts);
        let id = db
            .query(&FontQuery::new(&[family]))
            .ok_or_else(|| FontLoadError::FamilyNotFound { family: family.to_string() })?;
        let path = db.face_path(id).map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(family));

        db.with_face_data(id, |data, index| {
            OutlineFont::from_bytes(data.to_vec(), index, size).map_err(|e| {
                FontLoadError::Unsupported { path: path.clone(), index, reason: e.to_string() }
            })
        })
        .unwrap_or_else(|| {
            Err(FontLoadError::Unreadable {
                path: path.clone(),
                source: io::Error::other("font data is no longer available"),
            })
        })
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new(FallbackPolicy::default())
    }
}

fn load_file(path: &Path, index: u32, size: f32) -> Result<OutlineFont, FontLoadError> {
    let data = std::fs::read(path).map_err(|e| FontLoadError::from_io(path, e))?;
    OutlineFont::from_bytes(data, index, size).map_err(|e| FontLoadError::Unsupported {
        path: path.to_path_buf(),
        index,
        reason: e.to_string(),
    })
}
