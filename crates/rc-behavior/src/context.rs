//! Per-task state handed to a policy loop.

use std::sync::Arc;
use std::time::Duration;

use rc_agent::{Ring, Robot};
use rc_core::{AgentId, AgentRng, SimConfig, Timings};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Everything one policy task needs: the ring table (for neighbour
/// lookups), its own robot id, pacing, its jitter RNG, the robot's
/// cancellation token and a subscription to ring changes.
///
/// Every suspension point goes through [`sleep`](Self::sleep) or
/// [`wait_for_change`](Self::wait_for_change), both of which return `false`
/// as soon as the token is cancelled.
pub struct PolicyContext {
    pub ring:    Arc<Ring>,
    pub agent:   AgentId,
    pub timings: Timings,
    pub rng:     AgentRng,
    cancel:      CancellationToken,
    changes:     watch::Receiver<u64>,
}

impl PolicyContext {
    pub fn new(
        ring:   Arc<Ring>,
        agent:  AgentId,
        config: &SimConfig,
        cancel: CancellationToken,
    ) -> Self {
        let changes = ring.signal().subscribe();
        Self {
            ring,
            agent,
            timings: config.timings,
            rng: AgentRng::new(config.seed, agent),
            cancel,
            changes,
        }
    }

    #[inline]
    pub fn robot(&self) -> &Arc<Robot> {
        self.ring.robot(self.agent)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Sleep for `duration`.  Returns `false` if cancelled first.
    pub async fn sleep(&self, duration: Duration) -> bool {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => false,
            _ = tokio::time::sleep(duration) => true,
        }
    }

    /// Mark every ring change so far as seen.  Call before inspecting the
    /// state a later [`wait_for_change`](Self::wait_for_change) depends on.
    pub fn mark_seen(&mut self) {
        self.changes.borrow_and_update();
    }

    /// Wait for the next ring change after the last [`mark_seen`](Self::mark_seen).
    /// Returns `false` if cancelled first.
    pub async fn wait_for_change(&mut self) -> bool {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => false,
            changed = self.changes.changed() => changed.is_ok(),
        }
    }
}
