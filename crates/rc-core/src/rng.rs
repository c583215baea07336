//! Deterministic per-agent RNG.
//!
//! # Seeding
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Agents never share RNG state, so the random policy task of each robot
//! owns its generator outright and no synchronisation is needed.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-agent deterministic RNG.
///
/// Created once per robot when its policy task is spawned and moved into
/// that task.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// A duration drawn uniformly from `[min, max]` at microsecond
    /// resolution.  Returns `min` when the range is empty or inverted.
    pub fn jitter(&mut self, min: Duration, max: Duration) -> Duration {
        let lo = min.as_micros() as u64;
        let hi = max.as_micros() as u64;
        if hi <= lo {
            return min;
        }
        Duration::from_micros(self.0.gen_range(lo..=hi))
    }
}
