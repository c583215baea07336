//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `charge_trace.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ChargeRow, OutputResult, RunSummaryRow};

pub const CHARGE_TRACE_FILE: &str = "charge_trace.csv";
pub const RUN_SUMMARY_FILE: &str = "run_summary.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    charges:  Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut charges = Writer::from_path(dir.join(CHARGE_TRACE_FILE))?;
        charges.write_record(["elapsed_ms", "agent_id", "strategy", "charge", "holds_left", "holds_right"])?;

        let mut summary = Writer::from_path(dir.join(RUN_SUMMARY_FILE))?;
        summary.write_record(["elapsed_ms", "termination", "robots", "fully_charged", "discharged"])?;

        Ok(Self {
            charges,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_charges(&mut self, rows: &[ChargeRow]) -> OutputResult<()> {
        for row in rows {
            self.charges.write_record(&[
                row.elapsed_ms.to_string(),
                row.agent_id.to_string(),
                row.strategy.as_str().to_owned(),
                row.charge.to_string(),
                (row.holds_left as u8).to_string(),
                (row.holds_right as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.elapsed_ms.to_string(),
            row.termination.as_str().to_owned(),
            row.robots.to_string(),
            row.fully_charged.to_string(),
            row.discharged.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.charges.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
