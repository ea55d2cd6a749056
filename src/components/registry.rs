//! Registry - Tag Name to Constructor Mapping

use ahash::AHashMap;

use super::Component;
use super::charts::BarChart;
use super::effects::{GlitchText, TextReveal};
use super::navigation::Breadcrumbs;
use super::primitives::GlintButton;
use crate::error::{Error, Result};

/// Constructor for a registered element
pub type ElementFactory = Box<dyn Fn() -> Box<dyn Component>>;

/// Names the HTML standard reserves even though they contain a hyphen
const RESERVED_NAMES: [&str; 8] = [
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Registry of custom element definitions
#[derive(Default)]
pub struct ElementRegistry {
    factories: AHashMap<String, ElementFactory>,
}

impl ElementRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every Glint element defined
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let defaults: [(&str, ElementFactory); 5] = [
            (GlintButton::TAG, default_factory::<GlintButton>()),
            (BarChart::TAG, default_factory::<BarChart>()),
            (Breadcrumbs::TAG, default_factory::<Breadcrumbs>()),
            (TextReveal::TAG, default_factory::<TextReveal>()),
            (GlitchText::TAG, default_factory::<GlitchText>()),
        ];
        for (tag, factory) in defaults {
            registry.factories.insert(tag.to_string(), factory);
        }
        registry
    }

    /// Define a new element.
    ///
    /// The factory is run once up front: the element it builds must report
    /// `tag` as its own tag name, since snapshots are emitted under that name.
    pub fn define(
        &mut self,
        tag: &str,
        factory: impl Fn() -> Box<dyn Component> + 'static,
    ) -> Result<()> {
        if !is_valid_tag_name(tag) {
            return Err(Error::InvalidTagName {
                tag: tag.to_string(),
            });
        }
        if self.factories.contains_key(tag) {
            return Err(Error::AlreadyDefined {
                tag: tag.to_string(),
            });
        }
        check_tag(tag, &*factory())?;
        tracing::debug!("Defining <{tag}>");
        self.factories.insert(tag.to_string(), Box::new(factory));
        Ok(())
    }

    /// Construct a fresh instance of a defined element
    pub fn create(&self, tag: &str) -> Result<Box<dyn Component>> {
        let factory = self.factories.get(tag).ok_or_else(|| Error::UnknownTag {
            tag: tag.to_string(),
        })?;
        let component = factory();
        check_tag(tag, &*component)?;
        Ok(component)
    }

    /// Whether a tag has been defined
    pub fn is_defined(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Defined tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl std::fmt::Debug for ElementRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}

fn check_tag(tag: &str, component: &dyn Component) -> Result<()> {
    let actual = component.tag_name();
    if actual != tag {
        return Err(Error::TagMismatch {
            tag: tag.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

fn default_factory<T: Component + Default + 'static>() -> ElementFactory {
    Box::new(|| -> Box<dyn Component> { Box::new(T::default()) })
}

/// Valid custom element name: starts with a lowercase ASCII letter,
/// contains a hyphen, no uppercase, and is not a reserved name.
pub fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && tag.contains('-')
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
        && !RESERVED_NAMES.contains(&tag)
}
