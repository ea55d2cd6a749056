//! Embedded assets for Glint UI
//!
//! Uses rust-embed to bundle component stylesheets at compile time.

use std::borrow::Cow;

use rust_embed::RustEmbed;

/// Embedded stylesheets from `assets/styles`
#[derive(RustEmbed)]
#[folder = "assets/styles"]
pub struct Assets;

impl Assets {
    /// Path of the stylesheet for a tag
    pub fn stylesheet_path(tag: &str) -> String {
        format!("{tag}.css")
    }

    /// Stylesheet for a custom element tag
    ///
    /// A missing sheet is logged and yields an empty stylesheet.
    pub fn stylesheet(tag: &str) -> Cow<'static, str> {
        let path = Self::stylesheet_path(tag);
        match Self::get(&path) {
            Some(file) => match file.data {
                Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes),
                Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
            },
            None => {
                tracing::warn!("No stylesheet bundled for <{tag}>");
                Cow::Borrowed("")
            }
        }
    }

    /// All bundled stylesheet paths
    pub fn list() -> Vec<String> {
        Self::iter()
            .filter(|p| p.ends_with(".css"))
            .map(|p| p.into_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_tag_has_a_stylesheet() {
        for tag in [
            "glint-button",
            "glint-bar-chart",
            "glint-breadcrumbs",
            "glint-text-reveal",
            "glint-glitch-text",
        ] {
            let sheet = Assets::stylesheet(tag);
            assert!(sheet.contains(":host"), "missing sheet for {tag}");
        }
    }

    #[test]
    fn missing_stylesheet_is_empty() {
        assert!(Assets::stylesheet("glint-nope").is_empty());
    }

    #[test]
    fn list_contains_button_sheet() {
        assert!(Assets::list().iter().any(|p| p == "glint-button.css"));
    }
}
