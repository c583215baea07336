//! `Ring` — the fixed table of robots and charger parts.
//!
//! # Topology
//!
//! For a ring of `n` robots, robot `i` owns the view
//!
//! ```text
//! left part  = slot[i]
//! right part = slot[(i + n - 1) % n]
//! ```
//!
//! so every slot is shared by exactly two neighbours.  Robot `i`'s left
//! neighbour is the robot on the other side of its left part, `(i + 1) % n`,
//! and its right neighbour is `(i + n - 1) % n`.  Neighbours are resolved by
//! index into the table; robots never hold references to one another.

use std::sync::Arc;

use rc_core::AgentId;

use crate::{RingSignal, Robot, RobotSnapshot, SharedSlot};

/// Why the termination predicate holds.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Termination {
    /// Every robot is discharged.
    AllDischarged,
    /// At least one robot is active and every active robot is full.
    AllActiveFullyCharged,
}

impl Termination {
    pub fn as_str(self) -> &'static str {
        match self {
            Termination::AllDischarged         => "all_discharged",
            Termination::AllActiveFullyCharged => "all_active_fully_charged",
        }
    }
}

/// Point-in-time copy of every robot in the ring.
///
/// Robots are read one by one, each under its own lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingSnapshot {
    pub robots: Vec<RobotSnapshot>,
}

impl RingSnapshot {
    pub fn all_inactive(&self) -> bool {
        self.robots.iter().all(|r| !r.is_active())
    }

    pub fn all_active_fully_charged(&self) -> bool {
        self.robots.iter().filter(|r| r.is_active()).all(|r| r.is_fully_charged())
    }

    /// `Some` once the simulation may stop.
    pub fn termination(&self) -> Option<Termination> {
        if self.all_inactive() {
            Some(Termination::AllDischarged)
        } else if self.all_active_fully_charged() {
            Some(Termination::AllActiveFullyCharged)
        } else {
            None
        }
    }

    pub fn charges(&self) -> Vec<u8> {
        self.robots.iter().map(|r| r.charge).collect()
    }
}

/// Fixed-size robot and slot tables plus the shared change signal.
///
/// Built once by [`RingBuilder`][crate::RingBuilder]; nothing is added or
/// removed afterwards.
#[derive(Debug)]
pub struct Ring {
    pub(crate) slots:  Vec<Arc<SharedSlot>>,
    pub(crate) robots: Vec<Arc<Robot>>,
    pub(crate) signal: Arc<RingSignal>,
}

impl Ring {
    pub fn len(&self) -> usize {
        self.robots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }

    /// # Panics
    /// Panics if `id` is not a position of this ring.
    #[inline]
    pub fn robot(&self, id: AgentId) -> &Arc<Robot> {
        &self.robots[id.index()]
    }

    pub fn robots(&self) -> &[Arc<Robot>] {
        &self.robots
    }

    pub fn slots(&self) -> &[Arc<SharedSlot>] {
        &self.slots
    }

    pub fn signal(&self) -> &Arc<RingSignal> {
        &self.signal
    }

    /// The robot sharing `id`'s left part.
    pub fn left_neighbor(&self, id: AgentId) -> AgentId {
        let n = self.len() as u32;
        AgentId((id.0 + 1) % n)
    }

    /// The robot sharing `id`'s right part.
    pub fn right_neighbor(&self, id: AgentId) -> AgentId {
        let n = self.len() as u32;
        AgentId((id.0 + n - 1) % n)
    }

    pub fn snapshot(&self) -> RingSnapshot {
        RingSnapshot { robots: self.robots.iter().map(|r| r.snapshot()).collect() }
    }
}
