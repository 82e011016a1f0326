use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::error::AppResult;
use crate::http::{BaseUrl, Harness, RequestPort};
use crate::shutdown::ShutdownSender;
use crate::ui::model::UiRenderData;
use crate::ui::render::{Ui, UiActions};

use super::input::{InputEvent, spawn_input_reader};
use super::state::{DashboardAction, DashboardState, Settlement};

const INPUT_CHANNEL_CAPACITY: usize = 64;
const RESULT_CHANNEL_CAPACITY: usize = 64;

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Ui::cleanup();
    }
}

/// Runs the interactive dashboard until the user quits or shutdown is signalled.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or the input task panics.
pub(crate) async fn run_dashboard(
    harnesses: Vec<Harness>,
    port: Arc<dyn RequestPort>,
    base_url: &BaseUrl,
    no_color: bool,
    shutdown_tx: &ShutdownSender,
) -> AppResult<()> {
    let mut terminal = Ui::setup_terminal()?;
    let _guard = TerminalGuard;

    let (input_tx, mut input_rx) = mpsc::channel::<InputEvent>(INPUT_CHANNEL_CAPACITY);
    let (result_tx, mut result_rx) = mpsc::channel::<Settlement>(RESULT_CHANNEL_CAPACITY);
    let mut shutdown_rx = shutdown_tx.subscribe();
    let input = spawn_input_reader(input_tx, shutdown_tx);

    let origin = base_url.to_string();
    let mut state = DashboardState::new(harnesses);

    loop {
        let data = UiRenderData::from_harnesses(&origin, state.harnesses(), state.selected(), no_color);
        Ui::render(&mut terminal, &data);

        tokio::select! {
            _ = shutdown_rx.recv() => break,
            event = input_rx.recv() => {
                let Some(event) = event else { break };
                let action = match event {
                    InputEvent::Key(key) => state.handle_key(key),
                    InputEvent::Resize => DashboardAction::Redraw,
                };
                match action {
                    DashboardAction::Quit => break,
                    DashboardAction::Trigger(indices) => {
                        for index in indices {
                            launch(&mut state, index, &port, &result_tx);
                        }
                    }
                    DashboardAction::Redraw | DashboardAction::Ignore => {}
                }
            }
            Some(settlement) = result_rx.recv() => {
                state.settle(settlement);
            }
        }
    }

    drop(shutdown_tx.send(()));
    input.await?;
    Ok(())
}

fn launch(
    state: &mut DashboardState,
    index: usize,
    port: &Arc<dyn RequestPort>,
    result_tx: &mpsc::Sender<Settlement>,
) {
    let Some(invocation) = state.begin(index) else {
        return;
    };
    let port = Arc::clone(port);
    let result_tx = result_tx.clone();
    drop(tokio::spawn(async move {
        let result = invocation.run(port.as_ref()).await;
        if result_tx.send(Settlement { index, result }).await.is_err() {
            debug!("Dashboard closed before panel {} settled.", index);
        }
    }));
}
