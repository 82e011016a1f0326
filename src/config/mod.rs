//! Configuration loading, CLI merging and the preset dashboard.
mod apply;
mod loader;
mod presets;
pub mod types;


pub use apply::{apply_config, resolve_base_url, resolve_requests};
pub use loader::load_config;
pub use presets::default_dashboard;

#[cfg(test)]
pub(crate) use loader::load_config_file;
