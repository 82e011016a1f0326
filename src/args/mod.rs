//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use cli::ProbeArgs;
pub use types::{HttpMethod, OutputFormat};

pub use defaults::{DEFAULT_BASE_URL, DEFAULT_CONFIG_FILES, DEFAULT_USER_AGENT};
pub(crate) use parsers::parse_header;
