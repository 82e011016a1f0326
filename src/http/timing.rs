use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::port::PortErrorKind;

/// Fractional digits shown for every duration.
pub const DURATION_PRECISION: u32 = 4;
const NANOS_PER_UNIT: u128 = 100_000;
const UNITS_PER_SEC: u128 = 10_000;
const HALF_UNIT_NANOS: u128 = 50_000;

/// Elapsed wall-clock time rendered in seconds with four decimal places.
///
/// Rounds half-up to the nearest ten-thousandth of a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct DurationSeconds(Duration);

impl DurationSeconds {
    #[must_use]
    pub const fn new(elapsed: Duration) -> Self {
        Self(elapsed)
    }

    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }

    fn units(self) -> u128 {
        self.0
            .as_nanos()
            .saturating_add(HALF_UNIT_NANOS)
            .checked_div(NANOS_PER_UNIT)
            .unwrap_or(0)
    }
}

impl From<Duration> for DurationSeconds {
    fn from(elapsed: Duration) -> Self {
        Self::new(elapsed)
    }
}

impl std::fmt::Display for DurationSeconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let units = self.units();
        let secs = units.checked_div(UNITS_PER_SEC).unwrap_or(0);
        let frac = units.checked_rem(UNITS_PER_SEC).unwrap_or(0);
        write!(f, "{}.{:04}", secs, frac)
    }
}

impl serde::Serialize for DurationSeconds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// What the response body turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    Json(Value),
    Unavailable { reason: String },
}

impl ResponsePayload {
    #[must_use]
    pub fn from_body(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return ResponsePayload::Unavailable {
                reason: "empty response body".to_owned(),
            };
        }
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => ResponsePayload::Json(value),
            Err(err) => ResponsePayload::Unavailable {
                reason: format!("response body is not JSON: {}", err),
            },
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, ResponsePayload::Json(_))
    }
}

/// Settled outcome of one harness invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum TimingResult {
    /// The backend answered; `payload` says whether the body was usable.
    Completed {
        duration: DurationSeconds,
        settled_at: DateTime<Utc>,
        status: u16,
        payload: ResponsePayload,
    },
    /// The transport rejected before any response arrived.
    Failed {
        duration: DurationSeconds,
        settled_at: DateTime<Utc>,
        kind: PortErrorKind,
        error: String,
    },
}

impl TimingResult {
    #[must_use]
    pub const fn duration(&self) -> DurationSeconds {
        match self {
            TimingResult::Completed { duration, .. } | TimingResult::Failed { duration, .. } => {
                *duration
            }
        }
    }

    #[must_use]
    pub const fn settled_at(&self) -> DateTime<Utc> {
        match self {
            TimingResult::Completed { settled_at, .. }
            | TimingResult::Failed { settled_at, .. } => *settled_at,
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, TimingResult::Failed { .. })
    }
}
