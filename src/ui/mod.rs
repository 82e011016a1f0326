//! Terminal dashboard: one panel per harness.
pub mod model;
pub mod render;
