//! Layout Components
//!
//! Shell, header and sidebar of the gallery window.

pub mod header;
pub mod shell;
pub mod sidebar;
