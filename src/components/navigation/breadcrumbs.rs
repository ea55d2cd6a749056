//! Breadcrumbs Component
//!
//! Every item except the last renders as a link (when it has a target)
//! followed by a separator. The last item is the current location: plain
//! text, `aria-current="page"`, no separator.

use serde::{Deserialize, Serialize};

use crate::components::Component;
use crate::config::ThemeConfig;
use crate::helpers::{format_seconds, parse_bool_attr};
use crate::markup::{Attributes, Node};

/// Default separator glyph
pub const DEFAULT_SEPARATOR: &str = "/";

/// Default entry delay added per item position (seconds)
pub const DEFAULT_STAGGER_STEP: f64 = 0.1;

/// One breadcrumb entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl BreadcrumbItem {
    /// An item without a link target
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            icon: None,
        }
    }

    /// An item linking to `href`
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(label).with_href(href)
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Link target, unless it uses a script scheme
    fn safe_href(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| {
            let scheme = href.trim_start().to_ascii_lowercase();
            !(scheme.starts_with("javascript:") || scheme.starts_with("vbscript:"))
        })
    }
}

/// `<glint-breadcrumbs>`: navigation trail
#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumbs {
    items: Vec<BreadcrumbItem>,
    separator: String,
    animated: bool,
    /// Step set on the element itself
    stagger_step: Option<f64>,
    /// Document default, used when no step was set
    theme_stagger_step: f64,
}

impl Default for Breadcrumbs {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            animated: false,
            stagger_step: None,
            theme_stagger_step: DEFAULT_STAGGER_STEP,
        }
    }
}

impl Breadcrumbs {
    pub const TAG: &'static str = "glint-breadcrumbs";
    const ATTRIBUTES: &'static [&'static str] = &["items", "separator", "animated"];

    pub fn new(items: Vec<BreadcrumbItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Set the separator glyph
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Enable the staggered entry animation
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Delay added per item position when animated
    pub fn stagger_step(mut self, step: f64) -> Self {
        self.stagger_step = step.is_finite().then(|| step.max(0.0));
        self
    }

    pub fn set_items(&mut self, items: Vec<BreadcrumbItem>) {
        self.items = items;
    }

    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }

    /// Entry animation delay for the item at `index`
    pub fn delay_for(&self, index: usize) -> f64 {
        index as f64 * self.stagger_step.unwrap_or(self.theme_stagger_step)
    }

    fn render_item(&self, index: usize, item: &BreadcrumbItem, is_last: bool) -> Node {
        let icon = match &item.icon {
            Some(icon) => Node::element("span")
                .class("crumb-icon")
                .attr("aria-hidden", "true")
                .text(icon),
            None => Node::fragment(),
        };
        let label = Node::element("span").class("crumb-label").text(&item.label);

        let crumb = match item.safe_href() {
            _ if is_last => Node::element("span")
                .class("crumb")
                .class("crumb-current")
                .attr("aria-current", "page"),
            Some(href) => Node::element("a")
                .class("crumb")
                .class("crumb-link")
                .attr("part", "link")
                .attr("href", href),
            None => Node::element("span").class("crumb"),
        };
        let crumb = crumb.child(icon).child(label);

        let mut li = Node::element("li").class("crumb-item").child(crumb);
        if self.animated {
            li = li.attr(
                "style",
                format!("animation-delay: {}", format_seconds(self.delay_for(index))),
            );
        }
        if !is_last {
            li = li.child(
                Node::element("span")
                    .class("separator")
                    .attr("aria-hidden", "true")
                    .text(&self.separator),
            );
        }
        li
    }
}

impl Component for Breadcrumbs {
    fn tag_name(&self) -> &'static str {
        Self::TAG
    }

    fn observed_attributes(&self) -> &'static [&'static str] {
        Self::ATTRIBUTES
    }

    fn theme_changed(&mut self, theme: &ThemeConfig) {
        let step = theme.motion.stagger_step;
        self.theme_stagger_step = if step.is_finite() { step.max(0.0) } else { DEFAULT_STAGGER_STEP };
    }

    fn attribute_changed(&mut self, name: &str, value: Option<&str>) {
        match name {
            "items" => {
                self.items = match value {
                    Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
                        tracing::warn!("Ignoring malformed breadcrumb items: {e}");
                        Vec::new()
                    }),
                    None => Vec::new(),
                };
            }
            "separator" => {
                self.separator = value
                    .filter(|v| !v.is_empty())
                    .unwrap_or(DEFAULT_SEPARATOR)
                    .to_string();
            }
            "animated" => self.animated = parse_bool_attr(value),
            _ => {}
        }
    }

    fn host_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        if self.animated {
            attrs.insert("animated".into(), String::new());
        }
        attrs
    }

    fn render(&self) -> Node {
        let last = self.items.len().saturating_sub(1);
        let list = Node::element("ol").class("crumbs").children(
            self.items
                .iter()
                .enumerate()
                .map(|(index, item)| self.render_item(index, item, index == last)),
        );

        Node::element("nav")
            .class("breadcrumbs")
            .attr("aria-label", "Breadcrumb")
            .child(list)
    }
}
