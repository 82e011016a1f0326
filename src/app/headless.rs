use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{info, warn};

use crate::args::OutputFormat;
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{Harness, RequestPort};
use crate::shutdown::ShutdownSender;

use super::report::{render_json, render_text};

/// Fires every harness once, concurrently, and prints the settled timings.
///
/// # Errors
///
/// Returns an error when a request task panics, output cannot be rendered,
/// or `fail_on_error` is set and any request failed at the transport level.
pub(crate) async fn run_headless(
    mut harnesses: Vec<Harness>,
    port: Arc<dyn RequestPort>,
    output_format: OutputFormat,
    fail_on_error: bool,
    shutdown_tx: &ShutdownSender,
) -> AppResult<()> {
    let mut shutdown_rx = shutdown_tx.subscribe();
    let tasks: Vec<_> = harnesses
        .iter_mut()
        .enumerate()
        .filter_map(|(index, harness)| {
            let invocation = harness.begin()?;
            let port = Arc::clone(&port);
            Some(tokio::spawn(async move {
                (index, invocation.run(port.as_ref()).await)
            }))
        })
        .collect();
    info!("Dispatched {} request(s).", tasks.len());

    let joined = tokio::select! {
        _ = shutdown_rx.recv() => {
            warn!("Interrupted before all requests settled.");
            return Ok(());
        }
        joined = join_all(tasks) => joined,
    };

    for outcome in joined {
        let (index, result) = outcome?;
        if let Some(harness) = harnesses.get_mut(index) {
            harness.settle(result);
        }
    }

    let report = match output_format {
        OutputFormat::Text => render_text(&harnesses),
        OutputFormat::Json => render_json(&harnesses)?,
    };
    println!("{}", report);

    let failed = harnesses
        .iter()
        .filter(|harness| {
            harness
                .state()
                .result()
                .is_some_and(|result| result.is_failure())
        })
        .count();
    if failed > 0 {
        warn!("{} of {} request(s) failed.", failed, harnesses.len());
        if fail_on_error {
            return Err(AppError::validation(ValidationError::RequestsFailed));
        }
    }
    Ok(())
}
