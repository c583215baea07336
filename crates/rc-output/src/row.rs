//! Plain data row types written by output backends.

use rc_agent::{RingSnapshot, RobotSnapshot, Termination};
use rc_core::Strategy;

/// One robot's state at an observed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeRow {
    /// Milliseconds since the robot tasks were launched.
    pub elapsed_ms:  u64,
    pub agent_id:    u32,
    pub strategy:    Strategy,
    pub charge:      u8,
    pub holds_left:  bool,
    pub holds_right: bool,
}

impl ChargeRow {
    pub fn from_snapshot(elapsed_ms: u64, robot: &RobotSnapshot) -> Self {
        Self {
            elapsed_ms,
            agent_id:    robot.id.0,
            strategy:    robot.strategy,
            charge:      robot.charge,
            holds_left:  robot.holds_left,
            holds_right: robot.holds_right,
        }
    }

    /// One row per robot of `ring`, in ring order.
    pub fn rows(elapsed_ms: u64, ring: &RingSnapshot) -> Vec<Self> {
        ring.robots.iter().map(|r| Self::from_snapshot(elapsed_ms, r)).collect()
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummaryRow {
    pub elapsed_ms:    u64,
    pub termination:   Termination,
    pub robots:        u32,
    pub fully_charged: u32,
    pub discharged:    u32,
}
