use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Base URL '{url}' must use http or https.")]
    UnsupportedScheme { url: String },
    #[error("Base URL '{url}' is missing a host.")]
    BaseUrlMissingHost { url: String },
    #[error("Base URL '{url}' must not carry a query or fragment.")]
    BaseUrlHasQueryOrFragment { url: String },
    #[error("Failed to join URL '{url}': {source}")]
    JoinUrlFailed {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}
