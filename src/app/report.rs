use serde::Serialize;
use serde_json::Value;

use crate::args::HttpMethod;
use crate::error::AppResult;
use crate::http::{DurationSeconds, Harness, HarnessState, ResponsePayload, TimingResult};
use crate::ui::model::PanelView;

const METHOD_WIDTH: usize = 7;
const MIN_URL_WIDTH: usize = 20;
const DURATION_WIDTH: usize = 10;

#[derive(Debug, Serialize)]
struct ResultRecord<'a> {
    method: HttpMethod,
    url: &'a str,
    request_url: &'a str,
    state: &'static str,
    duration_seconds: Option<DurationSeconds>,
    settled_at: Option<String>,
    status: Option<u16>,
    payload: Option<&'a Value>,
    error_kind: Option<&'static str>,
    error: Option<&'a str>,
}

impl<'a> From<&'a Harness> for ResultRecord<'a> {
    fn from(harness: &'a Harness) -> Self {
        let mut record = ResultRecord {
            method: harness.spec().method(),
            url: harness.spec().url(),
            request_url: harness.url().as_str(),
            state: "idle",
            duration_seconds: None,
            settled_at: None,
            status: None,
            payload: None,
            error_kind: None,
            error: None,
        };
        match harness.state() {
            HarnessState::Idle => {}
            HarnessState::InFlight => record.state = "in_flight",
            HarnessState::Settled(result) => {
                record.duration_seconds = Some(result.duration());
                record.settled_at = Some(result.settled_at().to_rfc3339());
                match result {
                    TimingResult::Completed {
                        status, payload, ..
                    } => {
                        record.status = Some(*status);
                        match payload {
                            ResponsePayload::Json(value) => {
                                record.state = "completed";
                                record.payload = Some(value);
                            }
                            ResponsePayload::Unavailable { reason } => {
                                record.state = "unavailable";
                                record.error = Some(reason);
                            }
                        }
                    }
                    TimingResult::Failed { kind, error, .. } => {
                        record.state = "failed";
                        record.error_kind = Some(kind.as_str());
                        record.error = Some(error);
                    }
                }
            }
        }
        record
    }
}

/// One aligned line per harness: method, path, duration and status.
pub(super) fn render_text(harnesses: &[Harness]) -> String {
    let url_width = harnesses
        .iter()
        .map(|harness| harness.spec().url().len())
        .max()
        .unwrap_or(0)
        .max(MIN_URL_WIDTH);
    harnesses
        .iter()
        .map(PanelView::from_harness)
        .map(|view| {
            format!(
                "{:<mw$} {:<uw$} {:>dw$}  {}",
                view.method,
                view.url,
                view.duration_text(),
                view.status_text(),
                mw = METHOD_WIDTH,
                uw = url_width,
                dw = DURATION_WIDTH,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON array, one record per harness.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub(super) fn render_json(harnesses: &[Harness]) -> AppResult<String> {
    let records: Vec<ResultRecord<'_>> = harnesses.iter().map(ResultRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
