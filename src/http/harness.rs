use std::time::Instant;

use chrono::Utc;
use tracing::{debug, warn};
use url::Url;

use crate::error::AppResult;

use super::origin::BaseUrl;
use super::port::{PreparedRequest, RequestPort};
use super::spec::RequestSpec;
use super::timing::{DurationSeconds, ResponsePayload, TimingResult};

/// Lifecycle of a harness slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HarnessState {
    #[default]
    Idle,
    InFlight,
    Settled(TimingResult),
}

impl HarnessState {
    #[must_use]
    pub const fn result(&self) -> Option<&TimingResult> {
        match self {
            HarnessState::Settled(result) => Some(result),
            HarnessState::Idle | HarnessState::InFlight => None,
        }
    }

    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, HarnessState::InFlight)
    }
}

/// One request description bound to its own result slot.
#[derive(Debug, Clone)]
pub struct Harness {
    spec: RequestSpec,
    url: Url,
    state: HarnessState,
}

/// A single dispatched request, detached from its harness so it can run on
/// another task.
#[derive(Debug)]
pub struct Invocation {
    request: PreparedRequest,
}

impl Harness {
    /// Binds `spec` to `origin`.
    ///
    /// # Errors
    ///
    /// Returns an error when the origin and path do not form a valid URL.
    pub fn new(spec: RequestSpec, origin: &BaseUrl) -> AppResult<Self> {
        let url = origin.join(spec.url())?;
        Ok(Self {
            spec,
            url,
            state: HarnessState::Idle,
        })
    }

    #[must_use]
    pub const fn spec(&self) -> &RequestSpec {
        &self.spec
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn state(&self) -> &HarnessState {
        &self.state
    }

    /// Moves the slot to in-flight and hands out the request to run.
    ///
    /// Returns `None` while a previous invocation is still in flight.
    pub fn begin(&mut self) -> Option<Invocation> {
        if self.state.is_in_flight() {
            debug!(
                "Ignoring trigger for {} {}: request already in flight.",
                self.spec.method(),
                self.spec.url()
            );
            return None;
        }
        self.state = HarnessState::InFlight;
        Some(Invocation {
            request: PreparedRequest {
                method: self.spec.method(),
                url: self.url.clone(),
                headers: self.spec.headers().clone(),
                body: self.spec.body().map(str::to_owned),
            },
        })
    }

    /// Stores `result`, discarding whatever the slot held before.
    ///
    /// Returns `false` when no invocation was in flight.
    pub fn settle(&mut self, result: TimingResult) -> bool {
        if !self.state.is_in_flight() {
            warn!(
                "Dropping result for {} {}: no request in flight.",
                self.spec.method(),
                self.spec.url()
            );
            return false;
        }
        self.state = HarnessState::Settled(result);
        true
    }

    /// Runs one invocation to completion on the current task.
    pub async fn trigger<P>(&mut self, port: &P) -> Option<&TimingResult>
    where
        P: RequestPort + ?Sized,
    {
        let invocation = self.begin()?;
        let result = invocation.run(port).await;
        self.settle(result);
        self.state.result()
    }
}

impl Invocation {
    #[must_use]
    pub const fn request(&self) -> &PreparedRequest {
        &self.request
    }

    pub async fn run<P>(self, port: &P) -> TimingResult
    where
        P: RequestPort + ?Sized,
    {
        execute(port, self.request).await
    }
}

/// Times one round trip.
///
/// The clock stops when the response head arrives or the transport fails;
/// the body is read and parsed afterwards and does not count towards the
/// duration.
pub async fn execute<P>(port: &P, request: PreparedRequest) -> TimingResult
where
    P: RequestPort + ?Sized,
{
    let method = request.method;
    let url = request.url.clone();
    let started = Instant::now();
    let outcome = port.dispatch(request).await;
    let duration = DurationSeconds::from(started.elapsed());
    let settled_at = Utc::now();

    match outcome {
        Ok(response) => {
            let status = response.status;
            let payload = match response.body.await {
                Ok(bytes) => ResponsePayload::from_body(&bytes),
                Err(err) => ResponsePayload::Unavailable {
                    reason: format!("failed to read response body: {}", err),
                },
            };
            if let ResponsePayload::Unavailable { reason } = &payload {
                debug!("{} {} payload unavailable: {}", method, url, reason);
            }
            debug!("{} {} -> {} in {}s", method, url, status, duration);
            TimingResult::Completed {
                duration,
                settled_at,
                status,
                payload,
            }
        }
        Err(err) => {
            warn!(
                "{} {} failed after {}s ({}): {}",
                method, url, duration, err.kind, err
            );
            TimingResult::Failed {
                duration,
                settled_at,
                kind: err.kind,
                error: err.message,
            }
        }
    }
}
