//! Simulation time model.
//!
//! # Design
//!
//! The simulation runs in wall-clock time: every robot paces itself with
//! real sleeps.  `Timings` holds each of those pauses.  The defaults are the
//! reference pacing (one discharge step per second, one charge step per half
//! second); `Timings::scaled` shrinks all of them by the same factor so tests
//! and demos can run the identical schedule faster.

use std::time::Duration;

// ── Timings ───────────────────────────────────────────────────────────────────

/// Every pause used by the discharge and policy tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timings {
    /// Pause between two discharge steps.
    pub discharge_interval: Duration,
    /// Pause before each charge step while a robot holds both parts.
    pub charge_tick: Duration,
    /// Pause of a greedy robot that is charged above its threshold.
    pub greedy_idle: Duration,
    /// Pause of a gentlemanly robot after handing a part to a neighbour.
    pub yield_pause: Duration,
    /// Lower bound of the random robot's extra pause after a charge step.
    pub jitter_min: Duration,
    /// Upper bound (inclusive) of the same pause.
    pub jitter_max: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            discharge_interval: Duration::from_millis(1_000),
            charge_tick:        Duration::from_millis(500),
            greedy_idle:        Duration::from_millis(500),
            yield_pause:        Duration::from_millis(200),
            jitter_min:         Duration::from_millis(100),
            jitter_max:         Duration::from_millis(300),
        }
    }
}

impl Timings {
    /// The default pacing, `factor` times faster.
    ///
    /// A factor of `0` is treated as `1`.
    pub fn scaled(factor: u32) -> Self {
        let factor = factor.max(1);
        let d = Self::default();
        Self {
            discharge_interval: d.discharge_interval / factor,
            charge_tick:        d.charge_tick / factor,
            greedy_idle:        d.greedy_idle / factor,
            yield_pause:        d.yield_pause / factor,
            jitter_min:         d.jitter_min / factor,
            jitter_max:         d.jitter_max / factor,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Built by the application crate (from CLI flags) and passed to the
/// simulation builder.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Pacing of every task.
    pub timings: Timings,

    /// Master RNG seed for the random policy's jitter.
    pub seed: u64,
}

impl SimConfig {
    /// Default pacing with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { timings: Timings::default(), seed }
    }
}
