//! Random policy: wait until both parts look free, take them, then charge
//! with a randomised pause after every tick.

use rc_agent::Side;
use tracing::debug;

use crate::{BehaviorResult, PolicyContext};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Random;

impl Random {
    /// Loop until cancelled.
    ///
    /// Observing both parts free and taking them are separate steps, so the
    /// takes may still fail; charging is gated on actually holding both.
    /// Once both are held the robot keeps them and charges until cancelled.
    pub async fn run(&self, ctx: &mut PolicyContext) -> BehaviorResult<()> {
        let robot = ctx.robot().clone();
        while !ctx.is_cancelled() {
            ctx.mark_seen();

            if robot.is_fully_charged() {
                if !ctx.wait_for_change().await {
                    break;
                }
                continue;
            }

            if !Self::wait_until_both_free(ctx).await {
                return Ok(());
            }

            robot.try_take_left();
            robot.try_take_right();
            if !robot.gathered_both() {
                continue;
            }

            debug!(agent = ctx.agent.0, charge = robot.charge(), "random robot charging");
            loop {
                if !ctx.sleep(ctx.timings.charge_tick).await {
                    return Ok(());
                }
                robot.apply_charge();
                let pause = ctx.rng.jitter(ctx.timings.jitter_min, ctx.timings.jitter_max);
                if !ctx.sleep(pause).await {
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    /// Block until both adjacent parts report free.  Returns `false` if
    /// cancelled first.
    async fn wait_until_both_free(ctx: &mut PolicyContext) -> bool {
        loop {
            ctx.mark_seen();
            let robot = ctx.robot();
            if robot.slot(Side::Left).is_free() && robot.slot(Side::Right).is_free() {
                return true;
            }
            if !ctx.wait_for_change().await {
                return false;
            }
        }
    }
}
