//! Simulation observer trait for progress reporting and data collection.

use std::time::Duration;

use rc_agent::RingSnapshot;

use crate::SimReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] from the monitor loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  They run on the monitor, never inside a
/// robot task, so a slow observer delays termination detection but never a
/// robot.
///
/// # Example — charge printer
///
/// ```rust,ignore
/// struct ChargePrinter;
///
/// impl SimObserver for ChargePrinter {
///     fn on_snapshot(&mut self, elapsed: Duration, ring: &RingSnapshot) {
///         println!("{elapsed:?}: {:?}", ring.charges());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before any robot task is spawned.
    fn on_start(&mut self, _initial: &RingSnapshot) {}

    /// Called each time the monitor wakes on a ring change, with the
    /// snapshot it is about to test against the termination predicate.
    ///
    /// Changes that land while the monitor is busy are coalesced, so not
    /// every intermediate state is reported.
    fn on_snapshot(&mut self, _elapsed: Duration, _ring: &RingSnapshot) {}

    /// Called once after every task has been joined.
    fn on_sim_end(&mut self, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
