//! Document - Mounted Element Tree
//!
//! Owns every mounted component, keeps its latest snapshot current and
//! releases observer and frame registrations when an element is removed.

use std::collections::BTreeMap;

use crossbeam_channel::Receiver;

use super::event::{ElementId, HostEvent};
use super::frame::FrameScheduler;
use super::lifecycle::Lifecycle;
use super::observer::IntersectionObserver;
use crate::components::{Component, ElementRegistry, render_snapshot};
use crate::config::ThemeConfig;
use crate::error::Result;
use crate::markup::{Node, render_nodes};

struct Mounted {
    component: Box<dyn Component>,
    snapshot: Node,
}

/// A document holding mounted Glint elements
pub struct Document {
    registry: ElementRegistry,
    theme: ThemeConfig,
    /// Mounted elements in insertion order (ids are monotonic)
    elements: BTreeMap<ElementId, Mounted>,
    next_id: u64,
    observer: IntersectionObserver,
    frames: FrameScheduler,
    rx: Receiver<HostEvent>,
}

impl Document {
    /// Create a document with the given registry and theme
    pub fn new(registry: ElementRegistry, theme: ThemeConfig) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            registry,
            theme,
            elements: BTreeMap::new(),
            next_id: 1,
            observer: IntersectionObserver::new(tx.clone()),
            frames: FrameScheduler::new(tx),
            rx,
        }
    }

    /// Create a document with all Glint elements and the default theme
    pub fn with_defaults() -> Self {
        Self::new(ElementRegistry::with_defaults(), ThemeConfig::default())
    }

    /// The element registry
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    /// Mutable access for defining additional elements
    pub fn registry_mut(&mut self) -> &mut ElementRegistry {
        &mut self.registry
    }

    /// The active theme
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    /// Replace the theme and re-render every mounted element with its defaults
    pub fn set_theme(&mut self, theme: ThemeConfig) {
        self.theme = theme;
        for mounted in self.elements.values_mut() {
            mounted.component.theme_changed(&self.theme);
            mounted.snapshot = render_snapshot(&*mounted.component);
        }
    }

    // ==================== Mounting ====================

    /// Construct a detached element by tag name
    pub fn create_element(&self, tag: &str) -> Result<Box<dyn Component>> {
        self.registry.create(tag)
    }

    /// Construct an element by tag name and mount it
    pub fn append_tag(&mut self, tag: &str) -> Result<ElementId> {
        let component = self.create_element(tag)?;
        Ok(self.append(component))
    }

    /// Mount an element: applies the theme, runs its `connected` hook and
    /// renders it
    pub fn append(&mut self, mut component: Box<dyn Component>) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;

        component.theme_changed(&self.theme);
        {
            let mut lifecycle = Lifecycle::new(id, &mut self.observer, &mut self.frames);
            component.connected(&mut lifecycle);
        }
        tracing::debug!("Mounted <{}> as {id}", component.tag_name());

        let snapshot = render_snapshot(&*component);
        self.elements.insert(
            id,
            Mounted {
                component,
                snapshot,
            },
        );
        id
    }

    /// Unmount an element and return it detached.
    ///
    /// Its intersection registration and pending frame are released, so no
    /// callback can reach it afterwards.
    pub fn remove(&mut self, id: ElementId) -> Option<Box<dyn Component>> {
        let mut mounted = self.elements.remove(&id)?;
        self.observer.unobserve(id);
        self.frames.cancel(id);
        mounted.component.disconnected();
        tracing::debug!("Removed <{}> {id}", mounted.component.tag_name());
        Some(mounted.component)
    }

    /// Whether `id` is mounted
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Ids of mounted elements in insertion order
    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ==================== Inputs ====================

    /// Set a string attribute. Returns false if the element is missing or
    /// does not observe the attribute.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> bool {
        self.change_attribute(id, name, Some(value))
    }

    /// Remove an attribute, restoring the property default
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> bool {
        self.change_attribute(id, name, None)
    }

    fn change_attribute(&mut self, id: ElementId, name: &str, value: Option<&str>) -> bool {
        let Some(mounted) = self.elements.get_mut(&id) else {
            return false;
        };
        if !mounted.component.observed_attributes().contains(&name) {
            tracing::debug!(
                "<{}> does not observe attribute {name}",
                mounted.component.tag_name()
            );
            return false;
        }
        mounted.component.attribute_changed(name, value);
        mounted.snapshot = render_snapshot(&*mounted.component);
        true
    }

    /// Typed read access to a mounted element
    pub fn element<T: Component + 'static>(&self, id: ElementId) -> Option<&T> {
        let mounted = self.elements.get(&id)?;
        (*mounted.component).as_any().downcast_ref::<T>()
    }

    /// Typed property update followed by a re-render
    pub fn with_element_mut<T: Component + 'static, R>(
        &mut self,
        id: ElementId,
        f: impl FnOnce(&mut T) -> R,
    ) -> Option<R> {
        let mounted = self.elements.get_mut(&id)?;
        let typed = (*mounted.component).as_any_mut().downcast_mut::<T>()?;
        let result = f(typed);
        mounted.snapshot = render_snapshot(&*mounted.component);
        Some(result)
    }

    // ==================== Host callbacks ====================

    /// Report how much of an element is in view and deliver resulting entries
    pub fn simulate_intersection(&mut self, id: ElementId, ratio: f64) -> usize {
        self.observer.report(id, ratio);
        self.flush()
    }

    /// Advance one animation frame and deliver its callbacks
    pub fn advance_frame(&mut self) -> usize {
        self.frames.tick();
        self.flush()
    }

    /// Deliver queued host events. Returns how many changed element state.
    pub fn flush(&mut self) -> usize {
        let mut changed = 0;
        while let Ok(event) = self.rx.try_recv() {
            let id = event.target();
            let Some(mounted) = self.elements.get_mut(&id) else {
                tracing::debug!("Dropping {event:?} for detached {id}");
                continue;
            };
            let updated = {
                let mut lifecycle = Lifecycle::new(id, &mut self.observer, &mut self.frames);
                mounted.component.handle_event(&event, &mut lifecycle)
            };
            if updated {
                mounted.snapshot = render_snapshot(&*mounted.component);
                changed += 1;
            }
        }
        changed
    }

    /// Whether an element holds an intersection registration
    pub fn is_observed(&self, id: ElementId) -> bool {
        self.observer.is_observing(id)
    }

    /// Whether an element is waiting for an animation frame
    pub fn has_pending_frame(&self, id: ElementId) -> bool {
        self.frames.is_pending(id)
    }

    // ==================== Output ====================

    /// Latest snapshot of a mounted element
    pub fn snapshot(&self, id: ElementId) -> Option<&Node> {
        self.elements.get(&id).map(|m| &m.snapshot)
    }

    /// Latest snapshot serialised to HTML
    pub fn render_html(&self, id: ElementId) -> Option<String> {
        self.snapshot(id).map(Node::to_html)
    }

    /// Full HTML page: theme custom properties plus every mounted element
    pub fn render_page(&self, title: &str) -> String {
        let head = Node::element("head")
            .child(Node::element("meta").attr("charset", "utf-8"))
            .child(Node::element("title").text(title))
            .child(Node::element("style").child(Node::Raw(self.theme.to_css())));
        let body = Node::element("body")
            .child(Node::Raw(render_nodes(self.elements.values().map(|m| &m.snapshot))));
        let html = Node::element("html").attr("lang", "en").child(head).child(body);
        format!("<!DOCTYPE html>\n{}", html.to_html())
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("elements", &self.ids())
            .field("observed", &self.observer.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::charts::{BarChart, ChartDatum};
    use crate::components::effects::TextReveal;
    use crate::components::navigation::{BreadcrumbItem, Breadcrumbs};
    use crate::components::primitives::GlintButton;
    use crate::components::shadow_content;
    use crate::error::Error;

    fn bar_percents(doc: &Document, id: ElementId) -> Vec<String> {
        let snapshot = doc.snapshot(id).expect("mounted");
        snapshot
            .find_by_class("bar")
            .iter()
            .filter_map(|n| n.get_attr("data-percent").map(str::to_string))
            .collect()
    }

    fn sample_chart() -> BarChart {
        BarChart::new(vec![
            ChartDatum::new("A", 65.0),
            ChartDatum::new("B", 85.0),
            ChartDatum::new("C", 45.0),
        ])
    }

    #[test]
    fn chart_latches_once_and_releases_observer() {
        let mut doc = Document::with_defaults();
        let id = doc.append(Box::new(sample_chart()));
        assert!(doc.is_observed(id));
        assert_eq!(bar_percents(&doc, id), vec!["0", "0", "0"]);

        assert_eq!(doc.simulate_intersection(id, 0.1), 0);
        assert_eq!(bar_percents(&doc, id), vec!["0", "0", "0"]);

        assert_eq!(doc.simulate_intersection(id, 0.6), 1);
        assert_eq!(bar_percents(&doc, id), vec!["76", "100", "53"]);
        assert!(!doc.is_observed(id));
        assert_eq!(doc.snapshot(id).and_then(|s| s.get_attr("visible")), Some(""));

        // Scrolling away and back does not replay
        assert_eq!(doc.simulate_intersection(id, 0.0), 0);
        assert_eq!(doc.simulate_intersection(id, 1.0), 0);
        assert_eq!(bar_percents(&doc, id), vec!["76", "100", "53"]);
    }

    #[test]
    fn chart_enabling_animation_after_mount_still_latches() {
        let mut doc = Document::with_defaults();
        let id = doc.append(Box::new(sample_chart().animated(false)));
        assert_eq!(bar_percents(&doc, id), vec!["76", "100", "53"]);

        assert!(doc.set_attribute(id, "animated", "true"));
        assert_eq!(bar_percents(&doc, id), vec!["0", "0", "0"]);
        assert!(doc.is_observed(id));

        assert_eq!(doc.simulate_intersection(id, 1.0), 1);
        assert_eq!(bar_percents(&doc, id), vec!["76", "100", "53"]);
        assert!(!doc.is_observed(id));
    }

    #[test]
    fn theme_palette_reaches_registry_charts() {
        let theme = ThemeConfig {
            palette: vec!["#111".into(), "#222".into(), "#333".into()],
            ..ThemeConfig::default()
        };
        let mut doc = Document::new(ElementRegistry::with_defaults(), theme);
        let id = doc.append_tag("glint-bar-chart").expect("defined");
        doc.set_attribute(
            id,
            "data",
            r#"[{"label":"A","value":1},{"label":"B","value":2},
                {"label":"C","value":3},{"label":"D","value":4}]"#,
        );

        let snapshot = doc.snapshot(id).expect("mounted");
        let last = snapshot.find_by_class("bar")[3].get_attr("style").unwrap_or_default().to_string();
        assert!(last.contains("--bar-color: var(--glint-chart-0, #111)"));
        let page = doc.render_page("Theme");
        assert!(page.contains("--glint-chart-0: #111;"));
        assert!(!page.contains("--glint-chart-3"));
    }

    #[test]
    fn theme_motion_defaults_apply_to_mounted_elements() {
        let mut doc = Document::with_defaults();
        let reveal = doc.append_tag("glint-text-reveal").expect("defined");
        let crumbs = doc.append(Box::new(
            Breadcrumbs::new(vec![BreadcrumbItem::link("Home", "/"), BreadcrumbItem::new("Now")])
            .animated(true),
        ));

        let mut theme = ThemeConfig::default();
        theme.motion.reveal_duration = 2.0;
        theme.motion.stagger_step = 0.5;
        doc.set_theme(theme);
        doc.advance_frame();

        let snapshot = doc.snapshot(reveal).expect("mounted");
        let style = shadow_content(snapshot).and_then(|c| c.get_attr("style")).unwrap_or_default();
        assert_eq!(style, "--reveal-delay: 0s");
        assert!(doc.render_page("Motion").contains("--glint-reveal-duration: 2s;"));

        let snapshot = doc.snapshot(crumbs).expect("mounted");
        let delays: Vec<_> = snapshot
            .find_by_class("crumb-item")
            .iter()
            .filter_map(|n| n.get_attr("style").map(str::to_string))
            .collect();
        assert_eq!(delays, vec!["animation-delay: 0s", "animation-delay: 0.5s"]);
    }

    #[test]
    fn removal_releases_observer_and_frames() {
        let mut doc = Document::with_defaults();
        let chart = doc.append(Box::new(sample_chart()));
        let reveal = doc.append(Box::new(TextReveal::new("hi")));
        assert!(doc.has_pending_frame(reveal));

        assert!(doc.remove(chart).is_some());
        assert!(doc.remove(reveal).is_some());
        assert!(!doc.is_observed(chart));
        assert!(!doc.has_pending_frame(reveal));
        assert_eq!(doc.simulate_intersection(chart, 1.0), 0);
        assert_eq!(doc.advance_frame(), 0);
        assert!(doc.snapshot(chart).is_none());
        assert!(doc.remove(chart).is_none());
    }

    #[test]
    fn queued_events_for_removed_elements_are_dropped() {
        let mut doc = Document::with_defaults();
        let reveal = doc.append(Box::new(TextReveal::new("hi")));
        doc.frames.tick();
        doc.remove(reveal);
        assert_eq!(doc.flush(), 0);
    }

    #[test]
    fn text_reveal_arms_on_next_frame() {
        let mut doc = Document::with_defaults();
        let id = doc.append_tag("glint-text-reveal").expect("defined");
        assert!(doc.set_attribute(id, "text", "Welcome"));
        assert!(doc.set_attribute(id, "duration", "0.8"));

        let style = |doc: &Document| {
            let snapshot = doc.snapshot(id).expect("mounted");
            let content = shadow_content(snapshot).expect("content");
            content.get_attr("style").unwrap_or_default().to_string()
        };
        assert_eq!(style(&doc), "transition: none");

        assert_eq!(doc.advance_frame(), 1);
        assert_eq!(style(&doc), "--reveal-duration: 0.8s; --reveal-delay: 0s");
        assert!(doc.element::<TextReveal>(id).is_some_and(TextReveal::is_ready));

        assert!(doc.set_attribute(id, "trigger", ""));
        let snapshot = doc.snapshot(id).expect("mounted");
        assert_eq!(
            shadow_content(snapshot).and_then(|c| c.get_attr("data-state")),
            Some("visible")
        );
        assert_eq!(doc.advance_frame(), 0);
    }

    #[test]
    fn breadcrumbs_from_attributes() {
        let mut doc = Document::with_defaults();
        let id = doc.append_tag("glint-breadcrumbs").expect("defined");
        doc.set_attribute(
            id,
            "items",
            r#"[{"label":"Home","href":"/"},{"label":"Products","href":"/p"},
                {"label":"Electronics","href":"/p/e"},{"label":"Smartphones"}]"#,
        );
        let snapshot = doc.snapshot(id).expect("mounted");
        assert_eq!(snapshot.find_by_class("separator").len(), 3);
        assert_eq!(snapshot.find_all(|n| n.tag() == Some("a")).len(), 3);
        assert_eq!(snapshot.find_by_class("crumb-current").len(), 1);
    }

    #[test]
    fn variant_switch_changes_overlay_only() {
        let mut doc = Document::with_defaults();
        let id = doc.append_tag("glint-glitch-text").expect("defined");
        doc.set_attribute(id, "text", "404");
        let scanlines = |doc: &Document| {
            doc.snapshot(id)
                .map(|s| s.find_by_class("scanlines").len())
                .unwrap_or_default()
        };

        doc.set_attribute(id, "variant", "vhs");
        assert_eq!(scanlines(&doc), 1);
        doc.set_attribute(id, "variant", "classic");
        assert_eq!(scanlines(&doc), 0);
        doc.remove_attribute(id, "variant");
        assert_eq!(doc.snapshot(id).and_then(|s| s.get_attr("variant")), None);
    }

    #[test]
    fn unobserved_attributes_and_wrong_types_are_ignored() {
        let mut doc = Document::with_defaults();
        let id = doc.append(Box::new(GlintButton::primary("Go")));
        assert!(!doc.set_attribute(id, "onclick", "alert(1)"));
        assert!(!doc.set_attribute(ElementId(999), "label", "x"));
        assert!(doc.with_element_mut::<BarChart, _>(id, |_| ()).is_none());
        assert_eq!(
            doc.with_element_mut::<GlintButton, _>(id, |b| {
                b.set_disabled(true);
                b.is_disabled()
            }),
            Some(true)
        );
        assert_eq!(doc.snapshot(id).and_then(|s| s.get_attr("disabled")), Some(""));
    }

    #[test]
    fn snapshots_are_idempotent() {
        let mut doc = Document::with_defaults();
        let id = doc.append(Box::new(sample_chart().animated(false)));
        let first = doc.render_html(id).expect("mounted");
        doc.set_attribute(id, "chart-title", "Sales");
        doc.remove_attribute(id, "chart-title");
        assert_eq!(doc.render_html(id), Some(first.clone()));
        assert_eq!(render_snapshot(doc.element::<BarChart>(id).expect("chart")).to_html(), first);
    }

    #[test]
    fn snapshot_has_scoped_shadow_root() {
        let mut doc = Document::with_defaults();
        let id = doc.append(Box::new(Breadcrumbs::default()));
        let html = doc.render_html(id).expect("mounted");
        assert!(html.starts_with(r#"<glint-breadcrumbs><template shadowrootmode="open"><style>"#));
        assert!(html.contains(":host"));
        assert!(html.ends_with("</template></glint-breadcrumbs>"));
    }

    #[test]
    fn page_includes_theme_and_elements() {
        let mut doc = Document::with_defaults();
        doc.append(Box::new(GlintButton::primary("Go")));
        doc.append(Box::new(sample_chart()));
        let page = doc.render_page("Gallery");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("--glint-color-primary"));
        let button_at = page.find("<glint-button").expect("button");
        let chart_at = page.find("<glint-bar-chart").expect("chart");
        assert!(button_at < chart_at);
    }

    #[test]
    fn unknown_tags_fail_to_create() {
        let mut doc = Document::with_defaults();
        assert!(matches!(doc.append_tag("glint-carousel"), Err(Error::UnknownTag { .. })));
        assert!(doc.is_empty());
    }
}
