//! Ring-wide change notification.

use tokio::sync::watch;

/// A change counter shared by every robot in a ring.
///
/// Bumped whenever a robot's charge changes or a charger part is released.
/// Waiters hold a [`watch::Receiver`]: marking the current version as seen
/// (`borrow_and_update`) before re-checking their condition means a change
/// that lands between the check and the wait is never lost.
#[derive(Debug)]
pub struct RingSignal {
    tx: watch::Sender<u64>,
}

impl RingSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    /// Record one change and wake every subscriber.
    pub fn notify(&self) {
        self.tx.send_modify(|version| *version = version.wrapping_add(1));
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }

    /// Number of changes recorded so far.
    pub fn version(&self) -> u64 {
        *self.tx.borrow()
    }
}

impl Default for RingSignal {
    fn default() -> Self {
        Self::new()
    }
}
