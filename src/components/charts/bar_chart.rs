//! Bar Chart Component
//!
//! Bars grow from zero once the chart has scrolled into view. Visibility is a
//! one-shot latch: the chart observes intersections at
//! [`VISIBILITY_THRESHOLD`], flips `visible` on the first qualifying entry and
//! stops observing.

use serde::{Deserialize, Serialize};

use crate::components::Component;
use crate::config::ThemeConfig;
use crate::helpers::{
    format_percent, format_value, is_safe_css_value, parse_bool_attr, parse_number,
};
use crate::host::{HostEvent, Lifecycle};
use crate::markup::{Attributes, Node};
use crate::theme::colors::Palette;

/// Fraction of the chart that must be visible before bars grow
pub const VISIBILITY_THRESHOLD: f64 = 0.2;

/// One entry of a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Layout of a single bar, derived at render time
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub index: usize,
    pub label: String,
    pub value: f64,
    /// Share of the axis, 0..=100
    pub percent: f64,
    /// CSS color value
    pub color: String,
}

impl BarGeometry {
    /// Percent rounded to a whole number
    pub fn rounded_percent(&self) -> u32 {
        self.percent.round() as u32
    }
}

/// `<glint-bar-chart>`: animated bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    data: Vec<ChartDatum>,
    max: Option<f64>,
    horizontal: bool,
    animated: bool,
    show_values: bool,
    title: Option<String>,
    /// Palette set on the element itself; colors are used literally
    palette: Option<Palette>,
    /// Document palette, mirrored by the `--glint-chart-*` properties
    theme_palette: Palette,
    /// Latched once the chart has been seen
    visible: bool,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            max: None,
            horizontal: false,
            animated: true,
            show_values: true,
            title: None,
            palette: None,
            theme_palette: Palette::default(),
            visible: false,
        }
    }
}

impl BarChart {
    pub const TAG: &'static str = "glint-bar-chart";
    const ATTRIBUTES: &'static [&'static str] =
        &["data", "max", "horizontal", "animated", "show-values", "chart-title"];

    /// Create a chart for a data series
    pub fn new(data: Vec<ChartDatum>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Override the axis maximum
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Lay bars out horizontally
    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Enable or disable the grow animation
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Show value labels next to bars
    pub fn show_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    /// Set the caption
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Use a custom fallback palette
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn set_data(&mut self, data: Vec<ChartDatum>) {
        self.data = data;
    }

    pub fn set_max(&mut self, max: Option<f64>) {
        self.max = max;
    }

    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }

    pub fn data(&self) -> &[ChartDatum] {
        &self.data
    }

    /// Whether the visibility latch has fired
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether bars are drawn at their scaled length
    pub fn bars_extended(&self) -> bool {
        self.visible || !self.animated
    }

    /// Axis maximum: the override if set, else the series maximum, never below 1
    pub fn effective_max(&self) -> f64 {
        let max = match self.max {
            Some(max) => max,
            None => self
                .data
                .iter()
                .map(|d| d.value)
                .filter(|v| v.is_finite())
                .fold(f64::MIN, f64::max),
        };
        if max.is_finite() { max.max(1.0) } else { 1.0 }
    }

    /// Color for the bar at `index`: explicit color or palette fallback
    fn bar_color(&self, index: usize, datum: &ChartDatum) -> String {
        match datum.color.as_deref() {
            Some(color) if is_safe_css_value(color) => color.to_string(),
            _ => match &self.palette {
                Some(palette) => palette.color_at(index).to_string(),
                None => {
                    let palette = &self.theme_palette;
                    let slot = if palette.is_empty() { 0 } else { index % palette.len() };
                    format!("var(--glint-chart-{slot}, {})", palette.color_at(index))
                }
            },
        }
    }

    /// Scaled geometry for every bar, at full length
    pub fn geometry(&self) -> Vec<BarGeometry> {
        let max = self.effective_max();
        self.data
            .iter()
            .enumerate()
            .map(|(index, datum)| {
                let percent = if datum.value.is_finite() {
                    (datum.value / max * 100.0).clamp(0.0, 100.0)
                } else {
                    0.0
                };
                BarGeometry {
                    index,
                    label: datum.label.clone(),
                    value: datum.value,
                    percent,
                    color: self.bar_color(index, datum),
                }
            })
            .collect()
    }

    fn render_bar(&self, bar: &BarGeometry) -> Node {
        let (percent, rounded) = if self.bars_extended() {
            (bar.percent, bar.rounded_percent())
        } else {
            (0.0, 0)
        };
        let style = format!(
            "--bar-size: {}; --bar-color: {}; --bar-index: {}",
            format_percent(percent),
            bar.color,
            bar.index
        );

        let mut row = Node::element("div")
            .class("bar-row")
            .attr("data-index", bar.index.to_string())
            .child(Node::element("span").class("bar-label").text(&bar.label))
            .child(
                Node::element("div").class("bar-track").child(
                    Node::element("div")
                        .class("bar")
                        .attr("part", "bar")
                        .attr("data-percent", rounded.to_string())
                        .attr("style", style),
                ),
            );
        if self.show_values {
            row = row.child(
                Node::element("span")
                    .class("bar-value")
                    .text(format_value(bar.value)),
            );
        }
        row
    }
}

impl Component for BarChart {
    fn tag_name(&self) -> &'static str {
        Self::TAG
    }

    fn observed_attributes(&self) -> &'static [&'static str] {
        Self::ATTRIBUTES
    }

    fn attribute_changed(&mut self, name: &str, value: Option<&str>) {
        match name {
            "data" => {
                self.data = match value {
                    Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
                        tracing::warn!("Ignoring malformed chart data: {e}");
                        Vec::new()
                    }),
                    None => Vec::new(),
                };
            }
            "max" => self.max = value.and_then(parse_number),
            "horizontal" => self.horizontal = parse_bool_attr(value),
            // Both default to on, so only an explicit "false" disables them
            "animated" => self.animated = value.is_none_or(|v| parse_bool_attr(Some(v))),
            "show-values" => self.show_values = value.is_none_or(|v| parse_bool_attr(Some(v))),
            "chart-title" => self.title = value.map(str::to_string),
            _ => {}
        }
    }

    fn host_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        if self.horizontal {
            attrs.insert("horizontal".into(), String::new());
        }
        if self.animated {
            attrs.insert("animated".into(), String::new());
        }
        if self.visible {
            attrs.insert("visible".into(), String::new());
        }
        attrs
    }

    fn render(&self) -> Node {
        let orientation = if self.horizontal { "horizontal" } else { "vertical" };
        let bars = Node::element("div")
            .class("bars")
            .children(self.geometry().iter().map(|bar| self.render_bar(bar)));

        Node::element("figure")
            .class("chart")
            .attr("data-orientation", orientation)
            .attr_opt("aria-label", self.title.clone())
            .child(match &self.title {
                Some(title) => Node::element("figcaption").class("chart-title").text(title),
                None => Node::fragment(),
            })
            .child(bars)
    }

    fn theme_changed(&mut self, theme: &ThemeConfig) {
        self.theme_palette = theme.palette();
    }

    // Observed even when not animated: `animated` may be switched on later
    fn connected(&mut self, lifecycle: &mut Lifecycle<'_>) {
        if !self.visible {
            lifecycle.observe_intersection(VISIBILITY_THRESHOLD);
        }
    }

    fn handle_event(&mut self, event: &HostEvent, lifecycle: &mut Lifecycle<'_>) -> bool {
        let HostEvent::Intersection {
            ratio,
            is_intersecting,
            ..
        } = *event
        else {
            return false;
        };
        if self.visible || !is_intersecting || ratio < VISIBILITY_THRESHOLD {
            return false;
        }
        self.visible = true;
        lifecycle.unobserve_intersection();
        tracing::debug!("Chart {} became visible at ratio {ratio}", lifecycle.target());
        true
    }
}
