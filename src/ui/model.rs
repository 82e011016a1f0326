use std::collections::BTreeMap;

use serde_json::Value;

use crate::http::{Harness, HarnessState, PortErrorKind, ResponsePayload, TimingResult};

/// Placeholder the dashboard shows for an empty headers map or payload.
pub const EMPTY_OBJECT: &str = "{  }";
/// Shown in the duration row while a request is in flight.
pub const IN_FLIGHT_MARKER: &str = "...";
const RESPONSE_PREVIEW_CHARS: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelStatus {
    Idle,
    InFlight,
    Ok { status: u16 },
    Unavailable { status: u16, reason: String },
    Failed { kind: PortErrorKind, error: String },
}

/// Render-ready snapshot of one harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub method: String,
    pub url: String,
    pub duration: Option<String>,
    pub status: PanelStatus,
    pub headers: String,
    pub payload: String,
    pub response: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UiRenderData {
    pub base_url: String,
    pub panels: Vec<PanelView>,
    pub selected: usize,
    pub no_color: bool,
}

impl PanelView {
    #[must_use]
    pub fn from_harness(harness: &Harness) -> Self {
        let spec = harness.spec();
        let (duration, status, response) = match harness.state() {
            HarnessState::Idle => (None, PanelStatus::Idle, None),
            HarnessState::InFlight => (None, PanelStatus::InFlight, None),
            HarnessState::Settled(result) => settled_parts(result),
        };
        Self {
            method: spec.method().to_string(),
            url: spec.url().to_owned(),
            duration,
            status,
            headers: format_headers(spec.headers()),
            payload: spec.body().map_or_else(|| EMPTY_OBJECT.to_owned(), str::to_owned),
            response,
        }
    }

    /// Duration cell: seconds with an `s` suffix once settled.
    #[must_use]
    pub fn duration_text(&self) -> String {
        match (&self.duration, &self.status) {
            (Some(duration), _) => format!("{}s", duration),
            (None, PanelStatus::InFlight) => IN_FLIGHT_MARKER.to_owned(),
            (None, _) => String::new(),
        }
    }

    #[must_use]
    pub fn status_text(&self) -> String {
        match &self.status {
            PanelStatus::Idle => "idle".to_owned(),
            PanelStatus::InFlight => "in flight".to_owned(),
            PanelStatus::Ok { status } => status.to_string(),
            PanelStatus::Unavailable { status, reason } => {
                format!("{} (payload unavailable: {})", status, reason)
            }
            PanelStatus::Failed { kind, error } => format!("failed: {}: {}", kind, error),
        }
    }
}

impl UiRenderData {
    #[must_use]
    pub fn from_harnesses(
        base_url: &str,
        harnesses: &[Harness],
        selected: usize,
        no_color: bool,
    ) -> Self {
        Self {
            base_url: base_url.to_owned(),
            panels: harnesses.iter().map(PanelView::from_harness).collect(),
            selected,
            no_color,
        }
    }
}

fn settled_parts(result: &TimingResult) -> (Option<String>, PanelStatus, Option<String>) {
    let duration = Some(result.duration().to_string());
    match result {
        TimingResult::Completed {
            status,
            payload: ResponsePayload::Json(value),
            ..
        } => (
            duration,
            PanelStatus::Ok { status: *status },
            Some(preview(value)),
        ),
        TimingResult::Completed {
            status,
            payload: ResponsePayload::Unavailable { reason },
            ..
        } => (
            duration,
            PanelStatus::Unavailable {
                status: *status,
                reason: reason.clone(),
            },
            None,
        ),
        TimingResult::Failed { kind, error, .. } => (
            duration,
            PanelStatus::Failed {
                kind: *kind,
                error: error.clone(),
            },
            None,
        ),
    }
}

pub(crate) fn format_headers(headers: &BTreeMap<String, String>) -> String {
    if headers.is_empty() {
        return EMPTY_OBJECT.to_owned();
    }
    serde_json::to_string(headers).unwrap_or_else(|_| EMPTY_OBJECT.to_owned())
}

fn preview(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() <= RESPONSE_PREVIEW_CHARS {
        return rendered;
    }
    let mut truncated: String = rendered.chars().take(RESPONSE_PREVIEW_CHARS).collect();
    truncated.push('…');
    truncated
}
