//! Text Reveal Component
//!
//! Two independent states:
//!
//! ```text
//! CONSTRUCTED --(first animation frame)--> READY
//! HIDDEN <--(trigger)--> VISIBLE
//! ```
//!
//! Until READY no transition is applied, so the initial hidden state is drawn
//! without animating from the construction state.

use crate::components::Component;
use crate::helpers::{format_seconds, parse_bool_attr, parse_number};
use crate::host::{HostEvent, Lifecycle};
use crate::markup::{Attributes, Node};

/// Reveal animation style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealVariant {
    /// Opacity only
    Fade,
    /// Opacity plus upward translation
    SlideUp,
    /// Opacity plus blur
    Blur,
}

impl RevealVariant {
    /// Parse an attribute value. Unknown values yield `None` (base style).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fade" => Some(Self::Fade),
            "slide-up" | "slide" => Some(Self::SlideUp),
            "blur" => Some(Self::Blur),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::SlideUp => "slide-up",
            Self::Blur => "blur",
        }
    }
}

/// `<glint-text-reveal>`: text that transitions in when triggered
#[derive(Debug, Clone, PartialEq)]
pub struct TextReveal {
    text: String,
    trigger: bool,
    delay: f64,
    /// Unset falls back to the theme's `--glint-reveal-duration`
    duration: Option<f64>,
    variant: Option<RevealVariant>,
    /// Set on the first frame after connection; never cleared
    initialized: bool,
}

impl Default for TextReveal {
    fn default() -> Self {
        Self {
            text: String::new(),
            trigger: false,
            delay: 0.0,
            duration: None,
            variant: None,
            initialized: false,
        }
    }
}

fn seconds(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { fallback }
}

impl TextReveal {
    pub const TAG: &'static str = "glint-text-reveal";
    const ATTRIBUTES: &'static [&'static str] = &["text", "trigger", "delay", "duration", "variant"];

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the transition delay in seconds
    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = seconds(delay, 0.0);
        self
    }

    /// Set the transition duration in seconds
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration.is_finite().then(|| duration.max(0.0));
        self
    }

    pub fn variant(mut self, variant: RevealVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn trigger(mut self, trigger: bool) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn set_trigger(&mut self, trigger: bool) {
        self.trigger = trigger;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_triggered(&self) -> bool {
        self.trigger
    }

    /// Whether transitions are armed (first frame has passed)
    pub fn is_ready(&self) -> bool {
        self.initialized
    }
}

impl Component for TextReveal {
    fn tag_name(&self) -> &'static str {
        Self::TAG
    }

    fn observed_attributes(&self) -> &'static [&'static str] {
        Self::ATTRIBUTES
    }

    fn attribute_changed(&mut self, name: &str, value: Option<&str>) {
        match name {
            "text" => self.text = value.unwrap_or_default().to_string(),
            "trigger" => self.trigger = parse_bool_attr(value),
            "delay" => self.delay = value.and_then(parse_number).map_or(0.0, |v| seconds(v, 0.0)),
            "duration" => {
                self.duration = value
                    .and_then(parse_number)
                    .filter(|v| v.is_finite())
                    .map(|v| v.max(0.0));
            }
            "variant" => self.variant = value.and_then(RevealVariant::parse),
            _ => {}
        }
    }

    fn host_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        if let Some(variant) = self.variant {
            attrs.insert("variant".into(), variant.as_str().into());
        }
        if self.trigger {
            attrs.insert("trigger".into(), String::new());
        }
        attrs
    }

    fn render(&self) -> Node {
        let state = if self.trigger { "visible" } else { "hidden" };
        let style = if self.initialized {
            let delay = format!("--reveal-delay: {}", format_seconds(self.delay));
            match self.duration {
                Some(duration) => {
                    format!("--reveal-duration: {}; {delay}", format_seconds(duration))
                }
                None => delay,
            }
        } else {
            "transition: none".to_string()
        };

        Node::element("span")
            .class("reveal")
            .class_if("instant", !self.initialized)
            .attr("part", "text")
            .attr("data-state", state)
            .attr("aria-hidden", if self.trigger { "false" } else { "true" })
            .attr("style", style)
            .text(&self.text)
    }

    fn connected(&mut self, lifecycle: &mut Lifecycle<'_>) {
        if !self.initialized {
            lifecycle.request_animation_frame();
        }
    }

    fn handle_event(&mut self, event: &HostEvent, _lifecycle: &mut Lifecycle<'_>) -> bool {
        match event {
            HostEvent::AnimationFrame { .. } if !self.initialized => {
                self.initialized = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ElementId, FrameScheduler, IntersectionObserver};

    fn style_of(reveal: &TextReveal) -> String {
        reveal.render().get_attr("style").unwrap_or_default().to_string()
    }

    #[test]
    fn no_transition_before_first_frame() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut observer = IntersectionObserver::new(tx.clone());
        let mut frames = FrameScheduler::new(tx);
        let id = ElementId(4);
        let mut reveal = TextReveal::new("Hello").duration(1.2).delay(0.3);

        reveal.connected(&mut Lifecycle::new(id, &mut observer, &mut frames));
        assert!(frames.is_pending(id));
        assert!(!reveal.is_ready());
        assert_eq!(style_of(&reveal), "transition: none");
        assert!(reveal.render().has_class("instant"));

        frames.tick();
        let event = rx.try_recv().expect("frame event");
        assert!(reveal.handle_event(&event, &mut Lifecycle::new(id, &mut observer, &mut frames)));
        assert!(reveal.is_ready());
        assert_eq!(style_of(&reveal), "--reveal-duration: 1.2s; --reveal-delay: 0.3s");
        assert!(!reveal.render().has_class("instant"));

        // A second frame is not a state change
        assert!(!reveal.handle_event(&event, &mut Lifecycle::new(id, &mut observer, &mut frames)));
    }

    #[test]
    fn trigger_toggles_visibility_state() {
        let mut reveal = TextReveal::new("Hi");
        assert_eq!(reveal.render().get_attr("data-state"), Some("hidden"));
        reveal.set_trigger(true);
        assert_eq!(reveal.render().get_attr("data-state"), Some("visible"));
        assert_eq!(reveal.host_attributes().get("trigger").map(String::as_str), Some(""));
        reveal.set_trigger(false);
        assert_eq!(reveal.render().get_attr("data-state"), Some("hidden"));
    }

    #[test]
    fn timing_attributes_are_clamped() {
        let mut reveal = TextReveal::default();
        reveal.attribute_changed("delay", Some("-2"));
        reveal.attribute_changed("duration", Some("soon"));
        assert_eq!(reveal.delay, 0.0);
        assert_eq!(reveal.duration, None);

        reveal.attribute_changed("duration", Some("0.25"));
        assert_eq!(reveal.duration, Some(0.25));
        reveal.attribute_changed("duration", None);
        assert_eq!(reveal.duration, None);
    }

    #[test]
    fn unset_duration_defers_to_theme_property() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut observer = IntersectionObserver::new(tx.clone());
        let mut frames = FrameScheduler::new(tx);
        let id = ElementId(5);
        let mut reveal = TextReveal::new("Hello");

        reveal.connected(&mut Lifecycle::new(id, &mut observer, &mut frames));
        frames.tick();
        let event = rx.try_recv().expect("frame event");
        reveal.handle_event(&event, &mut Lifecycle::new(id, &mut observer, &mut frames));
        assert_eq!(style_of(&reveal), "--reveal-delay: 0s");
    }

    #[test]
    fn unknown_variant_uses_base_style() {
        let mut reveal = TextReveal::new("x").variant(RevealVariant::Blur);
        assert_eq!(reveal.host_attributes().get("variant").map(String::as_str), Some("blur"));
        reveal.attribute_changed("variant", Some("spin"));
        assert!(reveal.host_attributes().get("variant").is_none());
    }
}
