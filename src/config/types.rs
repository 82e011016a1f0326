use std::collections::BTreeMap;

use serde::Deserialize;

use crate::args::{HttpMethod, OutputFormat};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub no_ui: Option<bool>,
    pub no_color: Option<bool>,
    pub verbose: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub fail_on_error: Option<bool>,
    #[serde(alias = "presets")]
    pub requests: Option<Vec<RequestConfig>>,
}

/// One dashboard entry as written in a config file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RequestConfig {
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(alias = "path")]
    pub url: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}
