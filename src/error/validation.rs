use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid header format: '{value}'. Expected 'Key: Value'")]
    InvalidHeaderFormat { value: String },
    #[error("Invalid header name '{header}': {source}")]
    InvalidHeaderName {
        header: String,
        #[source]
        source: http::header::InvalidHeaderName,
    },
    #[error("Invalid header value for '{header}': {source}")]
    InvalidHeaderValue {
        header: String,
        #[source]
        source: http::header::InvalidHeaderValue,
    },
    #[error("Invalid HTTP method '{value}'. Use GET, POST, PUT, PATCH, DELETE, HEAD, or OPTIONS.")]
    InvalidHttpMethod { value: String },
    #[error("Request path '{path}' must start with '/'.")]
    PathMustBeAbsolute { path: String },
    #[error("`--method`, `--header` and `--data` require `--url`.")]
    RequestOptionsRequireUrl,
    #[error("One or more requests failed.")]
    RequestsFailed,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
