use std::collections::BTreeMap;

use http::{HeaderName, HeaderValue};

use crate::args::HttpMethod;
use crate::error::ValidationError;

/// Immutable description of one request to be timed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    method: HttpMethod,
    url: String,
    headers: BTreeMap<String, String>,
    body: Option<String>,
}

impl RequestSpec {
    /// Validates and builds a request description.
    ///
    /// Header names are stored lowercased; when two names differ only in case
    /// the one iterated last wins.
    ///
    /// # Errors
    ///
    /// Returns an error when `url` is not an absolute path or a header name
    /// or value is not valid HTTP.
    pub fn new(
        method: HttpMethod,
        url: impl Into<String>,
        headers: BTreeMap<String, String>,
        body: Option<String>,
    ) -> Result<Self, ValidationError> {
        let url = url.into();
        if !url.starts_with('/') {
            return Err(ValidationError::PathMustBeAbsolute { path: url });
        }
        let mut normalized = BTreeMap::new();
        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
                ValidationError::InvalidHeaderName {
                    header: name.clone(),
                    source: err,
                }
            })?;
            HeaderValue::from_str(&value).map_err(|err| ValidationError::InvalidHeaderValue {
                header: name.clone(),
                source: err,
            })?;
            normalized.insert(header_name.as_str().to_owned(), value);
        }
        Ok(Self {
            method,
            url,
            headers: normalized,
            body,
        })
    }

    /// Plain GET without headers or body.
    ///
    /// # Errors
    ///
    /// Returns an error when `url` is not an absolute path.
    pub fn get(url: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(HttpMethod::Get, url, BTreeMap::new(), None)
    }

    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
