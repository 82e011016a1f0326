use clap::Parser;

use crate::config::types::RequestConfig;

use super::parsers::{parse_header, parse_method};
use super::types::{HttpMethod, OutputFormat};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Terminal dashboard that times HTTP round trips against cached and uncached backend endpoints."
)]
pub struct ProbeArgs {
    /// Origin every request path is appended to [default: http://localhost:8080]
    #[arg(long = "base-url", env = "CACHEPROBE_BASE_URL")]
    pub base_url: Option<String>,

    /// Path to config file (TOML/JSON). Defaults to ./cacheprobe.toml or ./cacheprobe.json if present.
    #[arg(long, short)]
    pub config: Option<String>,

    /// HTTP method for a single ad-hoc request (requires --url)
    #[arg(long, short = 'X', value_parser = parse_method)]
    pub method: Option<HttpMethod>,

    /// Request path for a single ad-hoc request, replacing the preset dashboard
    #[arg(long, short)]
    pub url: Option<String>,

    /// HTTP headers in 'Key: Value' format (repeatable)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Request body for the ad-hoc request
    #[arg(long, short)]
    pub data: Option<String>,

    /// Fire every request once, print the timings and exit instead of opening the dashboard
    #[arg(long = "no-ui")]
    pub no_ui: bool,

    /// Output format for --no-ui runs
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Exit with an error when any request fails at the transport level (--no-ui only)
    #[arg(long = "fail-on-error")]
    pub fail_on_error: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by CACHEPROBE_LOG/RUST_LOG)
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    #[arg(skip)]
    pub requests: Option<Vec<RequestConfig>>,
}
