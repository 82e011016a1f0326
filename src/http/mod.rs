//! Request timing harness.
//!
//! A [`Harness`] owns one immutable [`RequestSpec`] and a single result slot.
//! Triggering it dispatches exactly one request through a [`RequestPort`],
//! measures the wall-clock time until the response head (or the transport
//! error) arrives, and overwrites the slot with a fresh [`TimingResult`].
mod harness;
mod origin;
mod port;
mod spec;
mod timing;


pub use harness::{Harness, HarnessState, Invocation, execute};
pub use origin::BaseUrl;
pub use port::{PortError, PortErrorKind, PortResponse, PreparedRequest, RequestPort, ReqwestPort};
pub use spec::RequestSpec;
pub use timing::{DurationSeconds, ResponsePayload, TimingResult};
