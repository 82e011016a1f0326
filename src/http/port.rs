use std::collections::BTreeMap;
use std::error::Error as StdError;

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::args::{DEFAULT_USER_AGENT, HttpMethod};
use crate::error::{AppError, AppResult, HttpError};

/// Fully resolved request, ready to go on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

/// Response head plus a deferred body read.
///
/// The body future is only polled after the harness has taken its end
/// timestamp.
pub struct PortResponse {
    pub status: u16,
    pub body: BoxFuture<'static, Result<Vec<u8>, PortError>>,
}

/// Why the transport gave up before a response head arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortErrorKind {
    Connect,
    Timeout,
    Other,
}

impl PortErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PortErrorKind::Connect => "connect",
            PortErrorKind::Timeout => "timeout",
            PortErrorKind::Other => "other",
        }
    }
}

impl std::fmt::Display for PortErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PortError {
    pub kind: PortErrorKind,
    pub message: String,
}

impl PortError {
    #[must_use]
    pub fn new(kind: PortErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn from_reqwest(err: &reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            PortErrorKind::Timeout
        } else if err.is_connect() {
            PortErrorKind::Connect
        } else {
            PortErrorKind::Other
        };
        Self::new(kind, error_chain(err))
    }
}

fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}

/// Transport seam used by the harness.
#[async_trait]
pub trait RequestPort: Send + Sync {
    /// Sends one request and resolves once the response head has arrived.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the transport rejects the request.
    async fn dispatch(&self, request: PreparedRequest) -> Result<PortResponse, PortError>;
}

/// [`RequestPort`] backed by a shared `reqwest` connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestPort {
    client: Client,
}

impl ReqwestPort {
    /// Builds a client with transport defaults (no explicit timeout).
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend cannot be initialised.
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;
        Ok(Self { client })
    }

    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RequestPort for ReqwestPort {
    async fn dispatch(&self, request: PreparedRequest) -> Result<PortResponse, PortError> {
        let mut builder = self
            .client
            .request(reqwest::Method::from(request.method), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| PortError::from_reqwest(&err))?;
        let status = response.status().as_u16();
        let body = Box::pin(async move {
            response
                .bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|err| PortError::from_reqwest(&err))
        });
        Ok(PortResponse { status, body })
    }
}
