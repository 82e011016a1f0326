use url::Url;

use crate::error::{AppError, AppResult, HttpError};

/// Fixed origin that request paths are appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    origin: String,
}

impl BaseUrl {
    /// Parses and validates an `http`/`https` origin.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not an absolute http(s) URL with a host,
    /// or when it carries a query or fragment the request path would end up in.
    pub fn parse(value: &str) -> AppResult<Self> {
        let trimmed = value.trim();
        let parsed = Url::parse(trimmed).map_err(|err| {
            AppError::http(HttpError::InvalidBaseUrl {
                url: trimmed.to_owned(),
                source: err,
            })
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::http(HttpError::UnsupportedScheme {
                url: trimmed.to_owned(),
            }));
        }
        if parsed.host_str().is_none() {
            return Err(AppError::http(HttpError::BaseUrlMissingHost {
                url: trimmed.to_owned(),
            }));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(AppError::http(HttpError::BaseUrlHasQueryOrFragment {
                url: trimmed.to_owned(),
            }));
        }
        Ok(Self {
            origin: trimmed.trim_end_matches('/').to_owned(),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.origin
    }

    /// Appends `path` to the origin verbatim, the way the dashboard builds its URLs.
    ///
    /// # Errors
    ///
    /// Returns an error when the concatenation is not a valid URL.
    pub fn join(&self, path: &str) -> AppResult<Url> {
        let full = format!("{}{}", self.origin, path);
        Url::parse(&full).map_err(|err| {
            AppError::http(HttpError::JoinUrlFailed {
                url: full,
                source: err,
            })
        })
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.origin)
    }
}
