//! Data Display Pages

pub mod controller;
pub mod page;
