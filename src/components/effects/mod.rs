//! Text Effect Components

mod glitch_text;
mod text_reveal;

pub use glitch_text::*;
pub use text_reveal::*;
