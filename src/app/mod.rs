//! Application Layer
//!
//! App initialization, window management, global entities, settings and the
//! gallery workspace.

pub mod application;
pub mod entities;
pub mod navigation;
pub mod settings;
pub mod workspace;
