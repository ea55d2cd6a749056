//! Glint UI Component Library
//!
//! Presentational custom elements (buttons, charts, breadcrumbs and animated
//! text effects) described as typed Rust state plus a pure render function.
//! A [`host::Document`] mounts elements, forwards attribute changes and
//! lifecycle callbacks, and produces HTML snapshots with scoped styles.

pub mod assets;
pub mod components;
pub mod config;
pub mod error;
pub mod helpers;
pub mod host;
pub mod markup;
pub mod theme;
pub mod utils;

pub use error::{Error, Result};
