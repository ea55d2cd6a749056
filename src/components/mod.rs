//! Components - Glint Custom Elements
//!
//! Every element is a plain struct holding its input properties and private
//! state flags. [`Component::render`] is a pure function of those fields; the
//! host calls it again after every attribute change or lifecycle event.

pub mod charts;
pub mod effects;
pub mod navigation;
pub mod primitives;
mod registry;

use std::any::Any;

pub use registry::*;

use crate::assets::Assets;
use crate::config::ThemeConfig;
use crate::host::{HostEvent, Lifecycle};
use crate::markup::{Attributes, Node};

/// Downcasting support for boxed components
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The contract shared by all custom elements
pub trait Component: AsAny {
    /// Registered tag name
    fn tag_name(&self) -> &'static str;

    /// Attributes whose changes are forwarded to [`Component::attribute_changed`]
    fn observed_attributes(&self) -> &'static [&'static str];

    /// Apply a string attribute (`None` = removed). Parsing is lenient:
    /// unusable values fall back to the property default.
    fn attribute_changed(&mut self, name: &str, value: Option<&str>);

    /// Attributes reflected onto the host element. Stylesheets select
    /// variants and states through these.
    fn host_attributes(&self) -> Attributes;

    /// Shadow content for the current inputs and state
    fn render(&self) -> Node;

    /// Apply document-wide theme defaults. Called before the element is
    /// connected and again whenever the document theme is replaced.
    /// Explicitly set properties take precedence over these defaults.
    fn theme_changed(&mut self, _theme: &ThemeConfig) {}

    /// Called when the element is inserted into a document
    fn connected(&mut self, _lifecycle: &mut Lifecycle<'_>) {}

    /// Called when the element is removed from its document
    fn disconnected(&mut self) {}

    /// Handle an observer or frame callback. Returns true if state changed.
    fn handle_event(&mut self, _event: &HostEvent, _lifecycle: &mut Lifecycle<'_>) -> bool {
        false
    }
}

/// Full snapshot of an element: host tag, reflected attributes and a
/// declarative shadow root holding the scoped stylesheet and rendered content.
pub fn render_snapshot(component: &dyn Component) -> Node {
    let tag = component.tag_name();
    let mut host = Node::element(tag);
    for (name, value) in component.host_attributes() {
        host = host.attr(name, value);
    }

    let shadow = Node::element("template")
        .attr("shadowrootmode", "open")
        .child(Node::element("style").child(Node::Raw(Assets::stylesheet(tag).into_owned())))
        .child(component.render());

    host.child(shadow)
}

/// Shadow content of a snapshot, without the stylesheet
pub fn shadow_content(snapshot: &Node) -> Option<&Node> {
    snapshot
        .as_element()?
        .children
        .first()?
        .as_element()?
        .children
        .get(1)
}
