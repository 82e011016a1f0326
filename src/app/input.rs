use std::time::Duration;

use crossterm::event::{Event, KeyEvent, poll, read};
use tokio::sync::{broadcast, mpsc};

use crate::shutdown::ShutdownSender;

/// Keyboard polling interval; bounds how long shutdown takes to be noticed.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy)]
pub(super) enum InputEvent {
    Key(KeyEvent),
    Resize,
}

/// Reads terminal events on a blocking thread and forwards them to the
/// render loop until shutdown is signalled or the receiver goes away.
pub(super) fn spawn_input_reader(
    input_tx: mpsc::Sender<InputEvent>,
    shutdown_tx: &ShutdownSender,
) -> tokio::task::JoinHandle<()> {
    let mut shutdown_rx = shutdown_tx.subscribe();

    tokio::task::spawn_blocking(move || {
        loop {
            match shutdown_rx.try_recv() {
                Ok(())
                | Err(
                    broadcast::error::TryRecvError::Closed
                    | broadcast::error::TryRecvError::Lagged(_),
                ) => break,
                Err(broadcast::error::TryRecvError::Empty) => {}
            }

            if !poll(INPUT_POLL_INTERVAL).unwrap_or_default() {
                continue;
            }

            let forwarded = match read() {
                Ok(Event::Key(key)) => Some(InputEvent::Key(key)),
                Ok(Event::Resize(..)) => Some(InputEvent::Resize),
                Ok(
                    Event::FocusGained | Event::FocusLost | Event::Mouse(_) | Event::Paste(_),
                ) => None,
                Err(err) => {
                    tracing::warn!("Failed to read terminal event: {}", err);
                    None
                }
            };

            if let Some(event) = forwarded
                && input_tx.blocking_send(event).is_err()
            {
                break;
            }
        }
    })
}
