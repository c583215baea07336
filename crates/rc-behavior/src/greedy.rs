//! Greedy policy: grab both parts when running low and keep them until full.

use tracing::debug;

use crate::{BehaviorResult, PolicyContext};

/// Below this charge a greedy robot goes after the charger.
pub const GREEDY_THRESHOLD: u8 = 60;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Greedy;

impl Greedy {
    /// Loop until cancelled:
    ///
    /// - charge below [`GREEDY_THRESHOLD`]: one attempt at the left part,
    ///   one at the right; holding both, charge tick by tick until full.
    ///   Holding fewer, wait for the next ring change and retry.
    /// - otherwise idle for `greedy_idle`.
    pub async fn run(&self, ctx: &mut PolicyContext) -> BehaviorResult<()> {
        let robot = ctx.robot().clone();
        while !ctx.is_cancelled() {
            ctx.mark_seen();

            if robot.charge() >= GREEDY_THRESHOLD {
                if !ctx.sleep(ctx.timings.greedy_idle).await {
                    break;
                }
                continue;
            }

            robot.try_take_left();
            robot.try_take_right();

            if !robot.gathered_both() {
                if !ctx.wait_for_change().await {
                    break;
                }
                continue;
            }

            debug!(agent = ctx.agent.0, charge = robot.charge(), "greedy robot charging");
            while !robot.is_fully_charged() {
                if !ctx.sleep(ctx.timings.charge_tick).await {
                    return Ok(());
                }
                robot.apply_charge();
            }
        }
        Ok(())
    }
}
