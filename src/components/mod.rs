//! Components - Reusable UI Components
//!
//! `primitives` and `composite` are the library proper; `layout` is the
//! gallery's window chrome.

pub mod composite;
pub mod layout;
pub mod primitives;
