//! Primitive Components
//!
//! Basic building blocks like buttons.

mod button;

pub use button::*;
