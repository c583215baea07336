//! Gentlemanly policy: take what is available, but hand a part over to a
//! neighbour that is weaker.

use rc_agent::{Ring, Robot, Side};
use rc_core::AgentId;
use tracing::debug;

use crate::{BehaviorError, BehaviorResult, PolicyContext};

/// Ring positions of the two robots a gentlemanly robot compares itself to.
///
/// `left` shares the robot's left part, `right` its right part.  These are
/// read-only lookups into the ring table, not ownership edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighbors {
    pub left:  AgentId,
    pub right: AgentId,
}

impl Neighbors {
    /// The two robots adjacent to `agent` in `ring`.
    pub fn in_ring(ring: &Ring, agent: AgentId) -> Self {
        Self { left: ring.left_neighbor(agent), right: ring.right_neighbor(agent) }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Gentlemanly {
    neighbors: Option<Neighbors>,
}

impl Gentlemanly {
    /// A gentlemanly policy whose neighbours still have to be set.
    pub fn new() -> Self {
        Self { neighbors: None }
    }

    pub fn with_neighbors(neighbors: Neighbors) -> Self {
        Self { neighbors: Some(neighbors) }
    }

    /// Set once during ring setup.
    pub fn set_neighbors(&mut self, neighbors: Neighbors) {
        self.neighbors = Some(neighbors);
    }

    pub fn neighbors(&self) -> Option<Neighbors> {
        self.neighbors
    }

    /// Give a held part to a weaker neighbour, checking left before right.
    ///
    /// A part is given away when this robot holds it and the neighbour
    /// sharing it is active with a strictly lower charge.  Returns the side
    /// this call actually released, if any; a part already released by a
    /// concurrent discharge to zero does not count.
    pub fn try_yield(&self, ring: &Ring, robot: &Robot) -> BehaviorResult<Option<Side>> {
        let neighbors = self
            .neighbors
            .ok_or(BehaviorError::NeighborsNotConfigured(robot.id()))?;

        let own = robot.charge();
        for (side, neighbor) in [(Side::Left, neighbors.left), (Side::Right, neighbors.right)] {
            let other = ring.robot(neighbor).snapshot();
            if !other.is_active() || other.charge >= own {
                continue;
            }
            if robot.try_free(side) {
                debug!(
                    agent = robot.id().0,
                    neighbor = neighbor.0,
                    side = side.as_str(),
                    "gave charger part to weaker neighbour"
                );
                return Ok(Some(side));
            }
        }
        Ok(None)
    }

    /// Loop until cancelled: one attempt at each part, then either give a
    /// part away and pause, or charge one tick if both are held, or wait for
    /// the next ring change.
    ///
    /// Fails immediately if the neighbours were never set.
    pub async fn run(&self, ctx: &mut PolicyContext) -> BehaviorResult<()> {
        if self.neighbors.is_none() {
            return Err(BehaviorError::NeighborsNotConfigured(ctx.agent));
        }
        let robot = ctx.robot().clone();
        while !ctx.is_cancelled() {
            ctx.mark_seen();

            robot.try_take_left();
            robot.try_take_right();

            if self.try_yield(&ctx.ring, &robot)?.is_some() {
                if !ctx.sleep(ctx.timings.yield_pause).await {
                    break;
                }
            } else if robot.gathered_both() {
                if !ctx.sleep(ctx.timings.charge_tick).await {
                    break;
                }
                robot.apply_charge();
            } else if !ctx.wait_for_change().await {
                break;
            }
        }
        Ok(())
    }
}
