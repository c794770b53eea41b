//! Cooperative cancellation for long waits.
//!
//! A `ShutdownSignal` is cheap to clone; every clone observes the same trigger.

use tokio::sync::watch;

/// Fires the paired [`ShutdownSignal`]s.
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

impl ShutdownTrigger {
    /// Fire the signal. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

/// Read side of a shutdown trigger, awaited by the polling loop.
#[derive(Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Create a connected trigger/signal pair.
    #[must_use]
    pub fn new() -> (ShutdownTrigger, Self) {
        let (tx, rx) = watch::channel(false);
        (ShutdownTrigger { tx }, Self { rx })
    }

    /// A signal that never fires.
    #[must_use]
    pub fn never() -> Self {
        let (_trigger, signal) = Self::new();
        signal
    }

    /// Whether the trigger has already fired.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once the trigger fires. Pends forever if the trigger is dropped unfired.
    pub async fn triggered(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
