//! Process signal wiring for the shutdown signal.

use std::io;

use crate::application::shutdown::{ShutdownSignal, ShutdownTrigger};

/// Exit status for a run aborted by a second Ctrl-C (128 + SIGINT).
const FORCED_EXIT_CODE: i32 = 130;

/// Spawn a task that fires the returned signal on the first Ctrl-C.
///
/// The first Ctrl-C lets the in-flight remote call finish; a second one
/// exits the process immediately.
///
/// Must be called from within a tokio runtime.
#[must_use]
pub fn ctrl_c_signal() -> ShutdownSignal {
    let (trigger, signal) = ShutdownSignal::new();
    tokio::spawn(relay_interrupts(tokio::signal::ctrl_c, trigger, || {
        std::process::exit(FORCED_EXIT_CODE)
    }));
    signal
}

/// Fire `trigger` on the first interrupt and call `force_exit` on the second.
async fn relay_interrupts<F, Fut>(
    mut next_interrupt: F,
    trigger: ShutdownTrigger,
    force_exit: impl FnOnce(),
) where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<()>>,
{
    if let Err(e) = next_interrupt().await {
        tracing::error!("failed to install Ctrl-C handler: {e}");
        return;
    }
    tracing::warn!("received Ctrl-C, stopping after the current call (press again to abort)");
    trigger.trigger();

    if next_interrupt().await.is_ok() {
        tracing::warn!("received second Ctrl-C, aborting");
        force_exit();
    }
}
