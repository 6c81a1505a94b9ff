//! Colors - Shared UI palette

use gpui::{rgb, rgba, Rgba};

/// Component palette. All colors are accessed via associated functions.
pub struct UiColors;

impl UiColors {
    // Brand
    /// Primary brand color
    pub fn primary() -> Rgba { rgb(0x2563eb) }
    /// Primary color on hover
    pub fn primary_hover() -> Rgba { rgb(0x1d4ed8) }
    /// Secondary surface for secondary buttons
    pub fn secondary() -> Rgba { rgb(0xe5e7eb) }
    /// Secondary surface on hover
    pub fn secondary_hover() -> Rgba { rgb(0xd1d5db) }

    // Backgrounds
    /// App background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Panels, cards, table body
    pub fn surface() -> Rgba { rgb(0xffffff) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xf9fafb) }
    /// Selected sidebar entry
    pub fn sidebar_active() -> Rgba { rgb(0xdbeafe) }
    /// Gallery header
    pub fn header_bg() -> Rgba { rgb(0x1e293b) }
    /// Modal backdrop
    pub fn overlay() -> Rgba { rgba(0x0f172a99) }

    // Text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Text on dark or colored backgrounds
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status
    pub fn success() -> Rgba { rgb(0x22c55e) }
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    pub fn danger() -> Rgba { rgb(0xef4444) }
    pub fn danger_hover() -> Rgba { rgb(0xdc2626) }
    pub fn info() -> Rgba { rgb(0x3b82f6) }

    /// Tinted backgrounds for toasts and badges
    pub fn success_bg() -> Rgba { rgb(0xdcfce7) }
    pub fn warning_bg() -> Rgba { rgb(0xfef3c7) }
    pub fn danger_bg() -> Rgba { rgb(0xfee2e2) }
    pub fn info_bg() -> Rgba { rgb(0xdbeafe) }

    // Borders
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    pub fn border_focus() -> Rgba { rgb(0x3b82f6) }
    pub fn border_error() -> Rgba { rgb(0xef4444) }

    // Table
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    pub fn table_row_alt() -> Rgba { rgb(0xfafafa) }
    pub fn table_row_selected() -> Rgba { rgb(0xeff6ff) }

    // Inputs
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    pub fn input_disabled_bg() -> Rgba { rgb(0xf3f4f6) }
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }

    // Tags
    pub fn tag_bg() -> Rgba { rgb(0xe0e7ff) }
    pub fn tag_text() -> Rgba { rgb(0x3730a3) }
}
