//! Button Component

use crate::components::Component;
use crate::helpers::parse_bool_attr;
use crate::markup::{Attributes, Node};

/// Button variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid primary color
    Primary,
    /// Solid secondary color
    Secondary,
    /// Transparent with a colored border
    Outline,
    /// Transparent until hovered
    Ghost,
    /// Animated gradient with a shine sweep
    Gradient,
}

impl ButtonVariant {
    /// Parse an attribute value. Unknown values yield `None` (base style).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "outline" => Some(Self::Outline),
            "ghost" => Some(Self::Ghost),
            "gradient" => Some(Self::Gradient),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Gradient => "gradient",
        }
    }

    /// Whether the variant needs the shine overlay element
    pub fn has_shine(self) -> bool {
        matches!(self, Self::Gradient)
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

impl ButtonSize {
    /// Parse an attribute value, falling back to medium
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" | "sm" => Self::Small,
            "large" | "lg" => Self::Large,
            _ => Self::Medium,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// `<glint-button>`: a styled button
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlintButton {
    label: String,
    variant: Option<ButtonVariant>,
    size: ButtonSize,
    disabled: bool,
}

impl GlintButton {
    pub const TAG: &'static str = "glint-button";
    const ATTRIBUTES: &'static [&'static str] = &["label", "variant", "size", "disabled"];

    /// Create a new button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Create a primary button
    pub fn primary(label: impl Into<String>) -> Self {
        Self::new(label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(label: impl Into<String>) -> Self {
        Self::new(label).variant(ButtonVariant::Secondary)
    }

    /// Create an outline button
    pub fn outline(label: impl Into<String>) -> Self {
        Self::new(label).variant(ButtonVariant::Outline)
    }

    /// Create a ghost button
    pub fn ghost(label: impl Into<String>) -> Self {
        Self::new(label).variant(ButtonVariant::Ghost)
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_variant(&mut self, variant: Option<ButtonVariant>) {
        self.variant = variant;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn current_variant(&self) -> Option<ButtonVariant> {
        self.variant
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl Component for GlintButton {
    fn tag_name(&self) -> &'static str {
        Self::TAG
    }

    fn observed_attributes(&self) -> &'static [&'static str] {
        Self::ATTRIBUTES
    }

    fn attribute_changed(&mut self, name: &str, value: Option<&str>) {
        match name {
            "label" => self.label = value.unwrap_or_default().to_string(),
            "variant" => self.variant = value.and_then(ButtonVariant::parse),
            "size" => self.size = value.map(ButtonSize::parse).unwrap_or_default(),
            "disabled" => self.disabled = parse_bool_attr(value),
            _ => {}
        }
    }

    fn host_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        if let Some(variant) = self.variant {
            attrs.insert("variant".into(), variant.as_str().into());
        }
        attrs.insert("size".into(), self.size.as_str().into());
        if self.disabled {
            // Interaction is suppressed by the stylesheet, not by the markup
            attrs.insert("disabled".into(), String::new());
        }
        attrs
    }

    fn render(&self) -> Node {
        let button = Node::element("button")
            .attr("part", "button")
            .attr("type", "button")
            .class("btn")
            .child(Node::element("span").class("btn-label").text(&self.label));

        match self.variant {
            Some(variant) if variant.has_shine() => button.child(
                Node::element("span")
                    .class("btn-shine")
                    .attr("aria-hidden", "true"),
            ),
            _ => button,
        }
    }
}
