//! Theme - Design Tokens
//!
//! Default colors and typography. Every token is exposed to stylesheets as a
//! CSS custom property so the embedding page can re-theme all components.

pub mod colors;
pub mod typography;
