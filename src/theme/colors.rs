//! Colors - Glint Theme Colors

/// Neutral color used when a palette has no entries
pub const FALLBACK_COLOR: &str = "#94a3b8";

/// Default chart palette, in assignment order
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#6366f1", // indigo
    "#ec4899", // pink
    "#14b8a6", // teal
    "#f59e0b", // amber
    "#8b5cf6", // violet
    "#22c55e", // green
    "#ef4444", // red
    "#0ea5e9", // sky
];

/// Glint color tokens - All colors are accessed via associated functions
pub struct GlintColors;

impl GlintColors {
    /// Primary accent - Indigo
    pub fn primary() -> &'static str { "#6366f1" }
    /// Secondary accent - Pink
    pub fn secondary() -> &'static str { "#ec4899" }
    /// Highlight accent - Teal
    pub fn accent() -> &'static str { "#14b8a6" }
    /// Primary text
    pub fn text() -> &'static str { "#1f2937" }
    /// Muted text (separators, axis labels)
    pub fn text_muted() -> &'static str { "#6b7280" }
    /// Surface background
    pub fn surface() -> &'static str { "#ffffff" }
    /// Chart track / outline color
    pub fn track() -> &'static str { "#e5e7eb" }
}

/// Ordered color list used for chart fallback colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Create a palette from explicit colors
    pub fn new(colors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of colors in the palette
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette is empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color assigned to position `index` (`index mod len`)
    pub fn color_at(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            return FALLBACK_COLOR;
        }
        &self.colors[index % self.colors.len()]
    }

    /// All colors in order
    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE)
    }
}
