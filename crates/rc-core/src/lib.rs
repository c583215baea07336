//! `rc-core` — foundational types for the robot charge ring simulator.
//!
//! This crate is a dependency of every other `rc-*` crate.  It has no
//! `rc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `SlotId`                                   |
//! | [`strategy`]    | `Strategy` enum, selector parsing, `RING_SIZE`        |
//! | [`time`]        | `Timings`, `SimConfig`                                |
//! | [`rng`]         | `AgentRng` (per-agent jitter source)                  |
//! | [`error`]       | `SelectionError`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                              |
//! |---------|---------------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on ids, `Strategy` and the config structs |

pub mod error;
pub mod ids;
pub mod rng;
pub mod strategy;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SelectionError, SelectionResult};
pub use ids::{AgentId, SlotId};
pub use rng::AgentRng;
pub use strategy::{RING_SIZE, Strategy, parse_selectors};
pub use time::{SimConfig, Timings};
