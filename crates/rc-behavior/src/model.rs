//! `Policy` — the closed set of charging policies behind one `run` capability.

use std::sync::Arc;

use rc_agent::Robot;
use rc_core::Strategy;
use tracing::info;

use crate::{BehaviorResult, Gentlemanly, Greedy, Neighbors, PolicyContext, Random};

/// One robot's acquisition / yield / charging behaviour.
///
/// Each variant is its own loop built from the shared [`Robot`] primitives;
/// the enum only dispatches and guarantees cleanup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Policy {
    Greedy(Greedy),
    Random(Random),
    Gentlemanly(Gentlemanly),
}

impl Policy {
    /// The policy for `strategy`.  A gentlemanly policy starts without
    /// neighbours; see [`set_neighbors`](Self::set_neighbors).
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Greedy      => Policy::Greedy(Greedy),
            Strategy::Random      => Policy::Random(Random),
            Strategy::Gentlemanly => Policy::Gentlemanly(Gentlemanly::new()),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Policy::Greedy(_)      => Strategy::Greedy,
            Policy::Random(_)      => Strategy::Random,
            Policy::Gentlemanly(_) => Strategy::Gentlemanly,
        }
    }

    /// Wire neighbour lookups.  Only gentlemanly policies use them; for the
    /// others this is a no-op.
    pub fn set_neighbors(&mut self, neighbors: Neighbors) {
        if let Policy::Gentlemanly(g) = self {
            g.set_neighbors(neighbors);
        }
    }

    /// Run the policy loop until the context is cancelled.
    ///
    /// Whatever the exit path (cancellation, configuration error, or the
    /// future being dropped mid-wait), both parts are released before this
    /// returns.
    pub async fn run(&self, mut ctx: PolicyContext) -> BehaviorResult<()> {
        let _release = ReleaseOnExit(ctx.robot().clone());
        match self {
            Policy::Greedy(p)      => p.run(&mut ctx).await,
            Policy::Random(p)      => p.run(&mut ctx).await,
            Policy::Gentlemanly(p) => p.run(&mut ctx).await,
        }
    }
}

/// Releases both of a robot's parts when dropped.
struct ReleaseOnExit(Arc<Robot>);

impl Drop for ReleaseOnExit {
    fn drop(&mut self) {
        self.0.free_all();
        info!(agent = self.0.id().0, strategy = %self.0.strategy(), "robot disconnected");
    }
}
