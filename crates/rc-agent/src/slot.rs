//! `SharedSlot` — a charger part shared by two adjacent robots.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rc_core::{AgentId, SlotId};

/// A mutually exclusive, single-owner resource.
///
/// Every operation runs under the slot's own lock, so operations on
/// different slots never contend.  None of them blocks beyond that short
/// critical section: a busy slot is reported, never waited on.
#[derive(Debug)]
pub struct SharedSlot {
    id:    SlotId,
    name:  String,
    owner: Mutex<Option<AgentId>>,
}

impl SharedSlot {
    pub fn new(id: SlotId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), owner: Mutex::new(None) }
    }

    /// Conventional charger part name for ring position `index`:
    /// `Fork1, Cable1, Fork2, Cable2, …`.
    pub fn charger_part_name(index: usize) -> String {
        let kind = if index % 2 == 0 { "Fork" } else { "Cable" };
        format!("{kind}{}", index / 2 + 1)
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Take the slot for `agent` if nobody owns it.
    ///
    /// Returns `false` when the slot is owned, including when `agent`
    /// already owns it.
    pub fn try_acquire(&self, agent: AgentId) -> bool {
        let mut owner = self.lock();
        if owner.is_none() {
            *owner = Some(agent);
            true
        } else {
            false
        }
    }

    /// Give the slot up if `agent` is its current owner.
    pub fn try_release(&self, agent: AgentId) -> bool {
        let mut owner = self.lock();
        if *owner == Some(agent) {
            *owner = None;
            true
        } else {
            false
        }
    }

    pub fn is_free(&self) -> bool {
        self.lock().is_none()
    }

    /// Current owner, if any.
    pub fn owner(&self) -> Option<AgentId> {
        *self.lock()
    }

    // The guarded value is a plain `Option` that is never left half-written,
    // so a poisoned lock still holds a consistent owner.
    fn lock(&self) -> MutexGuard<'_, Option<AgentId>> {
        self.owner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Display for SharedSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
