//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use std::time::Duration;

use rc_agent::RingSnapshot;
use rc_sim::{SimObserver, SimReport};

use crate::row::{ChargeRow, RunSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the charge trace and the run summary to any
/// [`OutputWriter`] backend.
///
/// A snapshot identical to the previously written one is skipped, so the
/// trace holds one block of rows per distinct ring state.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    last_written: Option<RingSnapshot>,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_written: None,
            last_error:   None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn record(&mut self, elapsed: Duration, ring: &RingSnapshot) {
        if self.last_written.as_ref() == Some(ring) {
            return;
        }
        let rows = ChargeRow::rows(elapsed.as_millis() as u64, ring);
        let result = self.writer.write_charges(&rows);
        self.store_err(result);
        self.last_written = Some(ring.clone());
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_start(&mut self, initial: &RingSnapshot) {
        self.record(Duration::ZERO, initial);
    }

    fn on_snapshot(&mut self, elapsed: Duration, ring: &RingSnapshot) {
        self.record(elapsed, ring);
    }

    fn on_sim_end(&mut self, report: &SimReport) {
        let robots = &report.snapshot.robots;
        let row = RunSummaryRow {
            elapsed_ms:    report.elapsed.as_millis() as u64,
            termination:   report.termination,
            robots:        robots.len() as u32,
            fully_charged: robots.iter().filter(|r| r.is_fully_charged()).count() as u32,
            discharged:    robots.iter().filter(|r| !r.is_active()).count() as u32,
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
