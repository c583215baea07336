//! `rc-output` — simulation output writers for the robot charge simulator.
//!
//! | Writer        | Files created                                 |
//! |---------------|-----------------------------------------------|
//! | [`CsvWriter`] | `charge_trace.csv`, `run_summary.csv`         |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `rc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).await?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ChargeRow, RunSummaryRow};
pub use writer::OutputWriter;
