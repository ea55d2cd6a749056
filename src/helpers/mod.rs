//! Helper Utilities
//!
//! Escaping and number formatting shared by the markup layer and components.

mod format;
mod string;

pub use format::*;
pub use string::*;
