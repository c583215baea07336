//! `rc-agent` — robots, charger parts and the ring table.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`slot`]      | `SharedSlot` — a two-owner, single-holder charger part       |
//! | [`robot`]     | `Robot`, `RobotSnapshot`, `Side`, energy constants            |
//! | [`signal`]    | `RingSignal` — change counter for notification-based waits   |
//! | [`ring`]      | `Ring` (fixed tables), `RingSnapshot`, `Termination`         |
//! | [`builder`]   | `RingBuilder` (topology construction)                        |
//!
//! Robots know their two slots and nothing else.  Neighbour relations are
//! index arithmetic on the [`Ring`], so there are no reference cycles
//! between robots.

pub mod builder;
pub mod ring;
pub mod robot;
pub mod signal;
pub mod slot;


pub use builder::RingBuilder;
pub use ring::{Ring, RingSnapshot, Termination};
pub use robot::{CHARGE_STEP, FULL_CHARGE, INITIAL_CHARGE, Robot, RobotSnapshot, Side};
pub use signal::RingSignal;
pub use slot::SharedSlot;
