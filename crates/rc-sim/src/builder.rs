//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use rc_agent::RingBuilder;
use rc_behavior::{Neighbors, Policy};
use rc_core::{SimConfig, Strategy, parse_selectors};
use tracing::debug;

use crate::{Sim, SimError, SimResult};

/// Smallest ring in which every robot has two distinct charger parts.
pub const MIN_RING_SIZE: usize = 2;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — pacing and seed
/// - one [`Strategy`] per ring position, either directly or from the raw
///   selector strings via [`from_selectors`](Self::from_selectors)
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::from_selectors(SimConfig::default(), &["1", "2", "3", "3", "2", "1"])?
///     .build()?;
/// let report = sim.run(&mut NoopObserver).await?;
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    strategies: Vec<Strategy>,
}

impl SimBuilder {
    /// Create a builder for a ring with one robot per entry of `strategies`.
    pub fn new(config: SimConfig, strategies: Vec<Strategy>) -> Self {
        Self { config, strategies }
    }

    /// Validate the six raw selectors and create a builder from them.
    ///
    /// Fails before any simulation state exists.
    pub fn from_selectors<S: AsRef<str>>(config: SimConfig, selectors: &[S]) -> SimResult<Self> {
        let strategies = parse_selectors(selectors)?;
        Ok(Self::new(config, strategies))
    }

    /// Build the ring, pick a policy per robot and wire gentlemanly
    /// neighbours, returning a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let n = self.strategies.len();
        if n < MIN_RING_SIZE {
            return Err(SimError::RingTooSmall { min: MIN_RING_SIZE, got: n });
        }

        let ring = Arc::new(RingBuilder::new(self.strategies).build());

        let policies = ring
            .robots()
            .iter()
            .map(|robot| {
                let mut policy = Policy::for_strategy(robot.strategy());
                if robot.strategy() == Strategy::Gentlemanly {
                    let neighbors = Neighbors::in_ring(&ring, robot.id());
                    debug!(
                        agent = robot.id().0,
                        left = neighbors.left.0,
                        right = neighbors.right.0,
                        "wired neighbours"
                    );
                    policy.set_neighbors(neighbors);
                }
                policy
            })
            .collect();

        Ok(Sim { config: self.config, ring, policies })
    }
}

