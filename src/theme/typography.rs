//! Typography - Font sizes used by the components

use gpui::{px, Pixels};

/// Typography scale
pub struct Typography;

impl Typography {
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const TEXT_2XL: f32 = 24.0;

    /// Line height multiplier for body text
    pub const LEADING_NORMAL: f32 = 1.5;

    /// Pixel height of one text row at a given font size
    pub fn line_height(size: f32) -> Pixels {
        px(size * Self::LEADING_NORMAL)
    }
}
