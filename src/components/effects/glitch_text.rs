//! Glitch Text Component

use crate::components::Component;
use crate::helpers::parse_bool_attr;
use crate::markup::{Attributes, Node};

/// Glitch style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlitchVariant {
    /// Clipped slices jumping sideways
    Classic,
    /// Red/cyan channel separation
    RgbSplit,
    /// Tape distortion with a scanline overlay
    Vhs,
}

impl GlitchVariant {
    /// Parse an attribute value. Unknown values yield `None` (base style).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "rgb-split" | "rgb" => Some(Self::RgbSplit),
            "vhs" => Some(Self::Vhs),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::RgbSplit => "rgb-split",
            Self::Vhs => "vhs",
        }
    }

    /// Whether the variant draws the scanline overlay element
    pub fn has_scanlines(self) -> bool {
        matches!(self, Self::Vhs)
    }
}

/// `<glint-glitch-text>`: text with a glitch effect while active
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlitchText {
    text: String,
    active: bool,
    variant: Option<GlitchVariant>,
}

impl GlitchText {
    pub const TAG: &'static str = "glint-glitch-text";
    const ATTRIBUTES: &'static [&'static str] = &["text", "active", "variant"];

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn variant(mut self, variant: GlitchVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn set_variant(&mut self, variant: Option<GlitchVariant>) {
        self.variant = variant;
    }
}

impl Component for GlitchText {
    fn tag_name(&self) -> &'static str {
        Self::TAG
    }

    fn observed_attributes(&self) -> &'static [&'static str] {
        Self::ATTRIBUTES
    }

    fn attribute_changed(&mut self, name: &str, value: Option<&str>) {
        match name {
            "text" => self.text = value.unwrap_or_default().to_string(),
            "active" => self.active = parse_bool_attr(value),
            "variant" => self.variant = value.and_then(GlitchVariant::parse),
            _ => {}
        }
    }

    fn host_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        if let Some(variant) = self.variant {
            attrs.insert("variant".into(), variant.as_str().into());
        }
        if self.active {
            attrs.insert("active".into(), String::new());
        }
        attrs
    }

    fn render(&self) -> Node {
        // The ::before/::after layers read their content from data-text
        let glitch = Node::element("span")
            .class("glitch")
            .attr("part", "text")
            .attr("data-text", &self.text)
            .child(Node::element("span").class("glitch-text").text(&self.text));

        match self.variant {
            Some(variant) if variant.has_scanlines() => glitch.child(
                Node::element("span")
                    .class("scanlines")
                    .attr("aria-hidden", "true"),
            ),
            _ => glitch,
        }
    }
}
