//! Outcome of one simulation run.

use std::time::Duration;

use rc_agent::{RingSnapshot, Termination};

/// What [`Sim::run`][crate::Sim::run] returns once the ring has settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimReport {
    /// The snapshot that satisfied the termination predicate.
    ///
    /// Taken before cancellation, so a discharge step landing during
    /// shutdown does not show up here.
    pub snapshot:    RingSnapshot,
    pub termination: Termination,
    /// Wall time from task launch to the termination snapshot.
    pub elapsed:     Duration,
}

impl SimReport {
    /// Final charge per robot, in ring order.  Every value is either 0 or 100.
    pub fn final_charges(&self) -> Vec<u8> {
        self.snapshot.charges()
    }
}
