/// Origin the dashboard talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Config filenames checked in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["cacheprobe.toml", "cacheprobe.json"];

pub const DEFAULT_USER_AGENT: &str = concat!("cacheprobe/", env!("CARGO_PKG_VERSION"));
