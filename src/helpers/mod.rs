//! Helper Utilities
//!
//! Small building blocks shared by the components and the gallery.

mod action;
mod bounded;
mod debounce;
mod focus_ring;
mod fs;

pub use action::*;
pub use bounded::*;
pub use debounce::*;
pub use focus_ring::*;
pub use fs::*;
