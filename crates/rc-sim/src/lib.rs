//! `rc-sim` — ring orchestrator for the robot charge simulator.
//!
//! # Run lifecycle
//!
//! ```text
//! SimBuilder::build
//!   validate ring size, build slots + robots, pick a Policy per robot,
//!   wire gentlemanly neighbours
//! Sim::run
//!   ① Launch   — spawn discharge + policy task per robot (2N tasks),
//!                each pair sharing a child cancellation token
//!   ② Monitor  — snapshot → observer → termination predicate;
//!                sleep until the ring's change signal fires, repeat
//!   ③ Shutdown — cancel the root token, join all tasks (parts released)
//! ```
//!
//! The predicate holds when every robot is discharged, or when at least one
//! robot is active and every active robot is fully charged.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rc_core::SimConfig;
//! use rc_sim::{NoopObserver, SimBuilder};
//!
//! let sim = SimBuilder::from_selectors(SimConfig::with_seed(42), &["1", "1", "2", "2", "3", "3"])?
//!     .build()?;
//! let report = sim.run(&mut NoopObserver).await?;
//! println!("{:?}", report.final_charges());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::{MIN_RING_SIZE, SimBuilder};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::SimReport;
pub use sim::Sim;
