//! `Robot` — one agent of the ring with its energy model and the shared
//! acquire / release / charge primitives every policy is built from.
//!
//! # Locking
//!
//! A robot's charge and its two ownership flags live behind one mutex.  The
//! discharge task and the policy task of the same robot both go through it,
//! and every slot operation a robot performs happens inside that section, so
//! `holds_left` always equals `left.owner() == Some(id)` to any observer that
//! takes the lock.  The lock order is robot → slot; slots never call back
//! into robots and no code path holds two robot locks at once.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rc_core::{AgentId, Strategy};
use tracing::{debug, info};

use crate::{RingSignal, SharedSlot};

/// Charge of a freshly built robot, in percent.
pub const INITIAL_CHARGE: u8 = 50;
/// Amount added by one charge step and removed by one discharge step.
pub const CHARGE_STEP: u8 = 10;
/// A robot at this charge is fully charged.
pub const FULL_CHARGE: u8 = 100;

/// Which of a robot's two charger parts an operation targets.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left  => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Debug)]
struct RobotState {
    charge:      u8,
    holds_left:  bool,
    holds_right: bool,
}

impl RobotState {
    fn holds(&self, side: Side) -> bool {
        match side {
            Side::Left  => self.holds_left,
            Side::Right => self.holds_right,
        }
    }

    fn set_holds(&mut self, side: Side, value: bool) {
        match side {
            Side::Left  => self.holds_left = value,
            Side::Right => self.holds_right = value,
        }
    }
}

/// Point-in-time copy of one robot's observable state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RobotSnapshot {
    pub id:          AgentId,
    pub strategy:    Strategy,
    pub charge:      u8,
    pub holds_left:  bool,
    pub holds_right: bool,
}

impl RobotSnapshot {
    pub fn is_active(&self) -> bool {
        self.charge != 0
    }

    pub fn is_fully_charged(&self) -> bool {
        self.charge == FULL_CHARGE
    }
}

/// A robot bound to its two adjacent charger parts.
#[derive(Debug)]
pub struct Robot {
    id:       AgentId,
    strategy: Strategy,
    left:     Arc<SharedSlot>,
    right:    Arc<SharedSlot>,
    state:    Mutex<RobotState>,
    signal:   Arc<RingSignal>,
}

impl Robot {
    pub fn new(
        id:       AgentId,
        strategy: Strategy,
        left:     Arc<SharedSlot>,
        right:    Arc<SharedSlot>,
        signal:   Arc<RingSignal>,
    ) -> Self {
        Self {
            id,
            strategy,
            left,
            right,
            state: Mutex::new(RobotState {
                charge:      INITIAL_CHARGE,
                holds_left:  false,
                holds_right: false,
            }),
            signal,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn slot(&self, side: Side) -> &Arc<SharedSlot> {
        match side {
            Side::Left  => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn signal(&self) -> &Arc<RingSignal> {
        &self.signal
    }

    pub fn charge(&self) -> u8 {
        self.lock().charge
    }

    pub fn is_active(&self) -> bool {
        self.lock().charge != 0
    }

    pub fn is_fully_charged(&self) -> bool {
        self.lock().charge == FULL_CHARGE
    }

    pub fn holds_left(&self) -> bool {
        self.lock().holds_left
    }

    pub fn holds_right(&self) -> bool {
        self.lock().holds_right
    }

    /// `true` while the robot holds both of its charger parts.
    pub fn gathered_both(&self) -> bool {
        let state = self.lock();
        state.holds_left && state.holds_right
    }

    pub fn snapshot(&self) -> RobotSnapshot {
        let state = self.lock();
        RobotSnapshot {
            id:          self.id,
            strategy:    self.strategy,
            charge:      state.charge,
            holds_left:  state.holds_left,
            holds_right: state.holds_right,
        }
    }

    /// `true` when both hold flags agree with the owners of the two slots.
    ///
    /// Read under the robot lock, so it holds at every instant unless a slot
    /// was changed behind the robot's back.
    pub fn holdings_consistent(&self) -> bool {
        let state = self.lock();
        state.holds_left == (self.left.owner() == Some(self.id))
            && state.holds_right == (self.right.owner() == Some(self.id))
    }

    // ── Acquire / release ─────────────────────────────────────────────────

    pub fn try_take_left(&self) -> bool {
        self.try_take(Side::Left)
    }

    pub fn try_take_right(&self) -> bool {
        self.try_take(Side::Right)
    }

    pub fn try_free_left(&self) -> bool {
        self.try_free(Side::Left)
    }

    pub fn try_free_right(&self) -> bool {
        self.try_free(Side::Right)
    }

    /// One non-blocking attempt to take the part on `side`.
    ///
    /// A discharged robot never takes anything.
    pub fn try_take(&self, side: Side) -> bool {
        let mut state = self.lock();
        if state.charge == 0 {
            return false;
        }
        let slot = self.slot(side);
        if !slot.try_acquire(self.id) {
            return false;
        }
        state.set_holds(side, true);
        debug!(
            agent = self.id.0,
            slot = slot.name(),
            side = side.as_str(),
            gathered = state.holds_left && state.holds_right,
            "took charger part"
        );
        true
    }

    /// Release the part on `side` if this robot owns it.  Works whether or
    /// not the robot is still active.
    pub fn try_free(&self, side: Side) -> bool {
        let freed = {
            let mut state = self.lock();
            let slot = self.slot(side);
            let freed = slot.try_release(self.id);
            if freed {
                state.set_holds(side, false);
                debug!(agent = self.id.0, slot = slot.name(), side = side.as_str(), "freed charger part");
            }
            freed
        };
        if freed {
            self.signal.notify();
        }
        freed
    }

    /// Release both parts.  Idempotent.
    pub fn free_all(&self) {
        self.try_free(Side::Left);
        self.try_free(Side::Right);
    }

    // ── Energy model ──────────────────────────────────────────────────────

    /// Add one charge step if the robot is active, holds both parts and is
    /// not yet full.  Returns whether the charge changed.
    pub fn apply_charge(&self) -> bool {
        let charge = {
            let mut state = self.lock();
            if state.charge == 0
                || !(state.holds_left && state.holds_right)
                || state.charge >= FULL_CHARGE
            {
                return false;
            }
            state.charge = (state.charge + CHARGE_STEP).min(FULL_CHARGE);
            state.charge
        };
        debug!(agent = self.id.0, charge, "charged");
        self.signal.notify();
        true
    }

    /// Remove one charge step if the robot is active.
    ///
    /// Reaching zero releases both parts inside the same critical section;
    /// the robot is then discharged for good.  Returns whether the charge
    /// changed.
    pub fn apply_discharge(&self) -> bool {
        let charge = {
            let mut state = self.lock();
            if state.charge == 0 {
                return false;
            }
            state.charge = state.charge.saturating_sub(CHARGE_STEP);
            if state.charge == 0 {
                for side in [Side::Left, Side::Right] {
                    if state.holds(side) && self.slot(side).try_release(self.id) {
                        state.set_holds(side, false);
                    }
                }
            }
            state.charge
        };
        debug!(agent = self.id.0, charge, "discharged");
        if charge == 0 {
            info!(agent = self.id.0, strategy = %self.strategy, "robot discharged");
        }
        self.signal.notify();
        true
    }

    // Every update to `RobotState` completes before the guard drops, so a
    // poisoned lock still holds a consistent state.
    fn lock(&self) -> MutexGuard<'_, RobotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
