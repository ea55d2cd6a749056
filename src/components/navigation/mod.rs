//! Navigation Components

mod breadcrumbs;

pub use breadcrumbs::*;
