//! Markup - Render Output Tree
//!
//! Components describe their output as a [`Node`] tree. The tree can be
//! queried (tests, embedders) and serialised to HTML.

mod node;
mod render;

pub use node::*;
pub use render::*;
