//! Chart Components

mod bar_chart;

pub use bar_chart::*;
