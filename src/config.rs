//! Config - Theme Configuration
//!
//! The theme file is TOML. Every field is optional; missing values fall back
//! to the built-in tokens.
//!
//! ```toml
//! radius = "10px"
//! palette = ["#6366f1", "#ec4899"]
//!
//! [colors]
//! primary = "#0ea5e9"
//!
//! [motion]
//! reveal_duration = 0.8
//! ```

use std::fmt::Write;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::helpers::{format_decimal, format_seconds, is_safe_css_value};
use crate::theme::colors::{DEFAULT_PALETTE, FALLBACK_COLOR, GlintColors, Palette};
use crate::theme::typography::Typography;

/// Prefix shared by every custom property
pub const CSS_VAR_PREFIX: &str = "--glint";

/// Main theme configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Named colors
    pub colors: ColorConfig,
    /// Chart palette, assigned by bar position
    pub palette: Vec<String>,
    /// Corner radius for buttons and bars
    pub radius: String,
    /// Font stack
    pub font_family: String,
    /// Animation timing defaults
    pub motion: MotionConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            colors: ColorConfig::default(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            radius: "8px".to_string(),
            font_family: Typography::FONT_FAMILY.to_string(),
            motion: MotionConfig::default(),
        }
    }
}

/// Named color tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub text_muted: String,
    pub surface: String,
    pub track: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: GlintColors::primary().to_string(),
            secondary: GlintColors::secondary().to_string(),
            accent: GlintColors::accent().to_string(),
            text: GlintColors::text().to_string(),
            text_muted: GlintColors::text_muted().to_string(),
            surface: GlintColors::surface().to_string(),
            track: GlintColors::track().to_string(),
        }
    }
}

/// Animation timing defaults (seconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Default text reveal transition duration
    pub reveal_duration: f64,
    /// Bar chart grow duration
    pub chart_duration: f64,
    /// Per-item breadcrumb entry delay step
    pub stagger_step: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reveal_duration: 0.6,
            chart_duration: 1.0,
            stagger_step: 0.1,
        }
    }
}

impl ThemeConfig {
    /// Load a theme from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a theme from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the theme to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The chart palette as a [`Palette`]. Unsafe entries keep their slot
    /// but resolve to the fallback color.
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.iter().map(|color| {
            if is_safe_css_value(color) { color.clone() } else { FALLBACK_COLOR.to_string() }
        }))
    }

    /// Custom property declarations as (name, value) pairs
    ///
    /// Values that could break out of a declaration are skipped.
    pub fn custom_properties(&self) -> Vec<(String, String)> {
        let c = &self.colors;
        let mut props: Vec<(String, String)> = [
            ("color-primary", c.primary.as_str()),
            ("color-secondary", c.secondary.as_str()),
            ("color-accent", c.accent.as_str()),
            ("color-text", c.text.as_str()),
            ("color-text-muted", c.text_muted.as_str()),
            ("color-surface", c.surface.as_str()),
            ("color-track", c.track.as_str()),
            ("radius", self.radius.as_str()),
            ("font-family", self.font_family.as_str()),
        ]
        .into_iter()
        .map(|(k, v)| (format!("{CSS_VAR_PREFIX}-{k}"), v.to_string()))
        .collect();

        for (k, color) in self.palette.iter().enumerate() {
            props.push((format!("{CSS_VAR_PREFIX}-chart-{k}"), color.clone()));
        }
        for (name, px) in Typography::sizes() {
            props.push((
                format!("{CSS_VAR_PREFIX}-text-{name}"),
                format!("{}px", format_decimal(f64::from(px), 1)),
            ));
        }
        for (name, weight) in Typography::weights() {
            props.push((format!("{CSS_VAR_PREFIX}-font-{name}"), weight.to_string()));
        }
        props.push((
            format!("{CSS_VAR_PREFIX}-reveal-duration"),
            format_seconds(self.motion.reveal_duration),
        ));
        props.push((
            format!("{CSS_VAR_PREFIX}-chart-duration"),
            format_seconds(self.motion.chart_duration),
        ));

        props.retain(|(name, value)| {
            let ok = is_safe_css_value(value);
            if !ok {
                tracing::warn!("Skipping unsafe theme value for {name}");
            }
            ok
        });
        props
    }

    /// Render the theme as a `:root` block
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.custom_properties() {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push('}');
        css
    }
}
