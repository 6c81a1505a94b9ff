//! Shared UI Component Library
//!
//! Reusable `gpui` components (buttons, form controls, a data table, toasts,
//! modals, tabs) backed by plain state types, plus the gallery application
//! that shows each of them live.

pub mod app;
pub mod components;
pub mod constants;
pub mod error;
pub mod features;
pub mod helpers;
pub mod state;
pub mod storage;
pub mod theme;
