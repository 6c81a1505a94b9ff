//! Theme - Colors and typography shared by every component

pub mod colors;
pub mod typography;

pub use colors::UiColors;
pub use typography::Typography;
