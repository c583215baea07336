//! The `OutputWriter` trait implemented by output backends.

use crate::{ChargeRow, OutputResult, RunSummaryRow};

/// Trait implemented by charge-trace writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one row per robot for a single observed instant.
    fn write_charges(&mut self, rows: &[ChargeRow]) -> OutputResult<()>;

    /// Write the one-line outcome of the run.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
