//! Typography - Font Sizes and Weights

/// Typography constants, emitted as `--glint-text-*` custom properties
pub struct Typography;

impl Typography {
    // Font sizes (px)
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_2XL: f32 = 24.0;

    // Font weights
    pub const FONT_NORMAL: u32 = 400;
    pub const FONT_SEMIBOLD: u32 = 600;
    pub const FONT_BOLD: u32 = 700;

    /// Default font stack
    pub const FONT_FAMILY: &'static str =
        "system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif";

    /// Size tokens as (custom property suffix, px)
    pub fn sizes() -> [(&'static str, f32); 5] {
        [
            ("xs", Self::TEXT_XS),
            ("sm", Self::TEXT_SM),
            ("base", Self::TEXT_BASE),
            ("lg", Self::TEXT_LG),
            ("2xl", Self::TEXT_2XL),
        ]
    }

    /// Weight tokens as (custom property suffix, weight)
    pub fn weights() -> [(&'static str, u32); 3] {
        [
            ("normal", Self::FONT_NORMAL),
            ("semibold", Self::FONT_SEMIBOLD),
            ("bold", Self::FONT_BOLD),
        ]
    }
}
