//! Font matching and query

/// Font query for matching
#[derive(Debug, Clone)]
pub struct FontQuery {
    /// Font families to try (in order)
    pub families: Vec<String>,
}

impl FontQuery {
    /// Create a new font query
    pub fn new(families: &[&str]) -> Self {
        Self { families: families.iter().map(|s| s.to_string()).collect() }
    }
}

impl Default for FontQuery {
    fn default() -> Self {
        Self::new(&["sans-serif"])
    }
}

/// Resolve generic font family to concrete system families
pub fn resolve_generic_family(family: &str) -> &'static [&'static str] {
    match family.to_lowercase().as_str() {
        "serif" => &["Times New Roman", "Times", "DejaVu Serif", "Noto Serif"],
        "sans-serif" => &["Helvetica", "Arial", "DejaVu Sans", "Noto Sans", "Liberation Sans"],
        "monospace" => &["Courier New", "Menlo", "DejaVu Sans Mono", "Noto Sans Mono"],
        "system-ui" => &["San Francisco", "Segoe UI", "Ubuntu", "Cantarell"],
        _ => &[],
    }
}
