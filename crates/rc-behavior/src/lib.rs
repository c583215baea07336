//! `rc-behavior` — robot charging policies and the discharge role.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`model`]       | `Policy` enum — the closed set of policies, one `run` method  |
//! | [`greedy`]      | `Greedy`, `GREEDY_THRESHOLD`                                  |
//! | [`random`]      | `Random`                                                      |
//! | [`gentlemanly`] | `Gentlemanly`, `Neighbors`                                    |
//! | [`mod@discharge`] | `discharge` — the per-robot drain task                      |
//! | [`context`]     | `PolicyContext` — ring handle, pacing, RNG, cancellation      |
//! | [`error`]       | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Design notes
//!
//! Every robot runs two tasks: [`discharge()`] and its [`Policy`].  Both share
//! one cancellation token.  Attempts to take a part never block; a failed
//! attempt is retried after the next ring change, so a robot that never
//! wins a part can starve.  That is a property of the policies, not a bug
//! to be patched here.

pub mod context;
pub mod discharge;
pub mod error;
pub mod gentlemanly;
pub mod greedy;
pub mod model;
pub mod random;

#[cfg(test)]
mod tests;

pub use context::PolicyContext;
pub use discharge::discharge;
pub use error::{BehaviorError, BehaviorResult};
pub use gentlemanly::{Gentlemanly, Neighbors};
pub use greedy::{GREEDY_THRESHOLD, Greedy};
pub use model::Policy;
pub use random::Random;
