//! Fluent builder for a [`Ring`].
//!
//! # Usage
//!
//! ```rust
//! use rc_agent::RingBuilder;
//! use rc_core::{AgentId, Strategy};
//!
//! let ring = RingBuilder::new(vec![Strategy::Greedy; 6]).build();
//!
//! assert_eq!(ring.len(), 6);
//! assert_eq!(ring.slots()[0].name(), "Fork1");
//! assert_eq!(ring.left_neighbor(AgentId(5)), AgentId(0));
//! ```

use std::sync::Arc;

use rc_core::{AgentId, SlotId, Strategy};

use crate::{Ring, RingSignal, Robot, SharedSlot};

/// Builds the slot table, then one robot per strategy bound to its two
/// adjacent slots.  Ids are handed out sequentially here, once.
pub struct RingBuilder {
    strategies: Vec<Strategy>,
    signal:     Option<Arc<RingSignal>>,
}

impl RingBuilder {
    /// One robot per entry of `strategies`, in ring order.
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies, signal: None }
    }

    /// Share an existing change signal instead of creating a fresh one.
    pub fn signal(mut self, signal: Arc<RingSignal>) -> Self {
        self.signal = Some(signal);
        self
    }

    pub fn build(self) -> Ring {
        let n = self.strategies.len();
        let signal = self.signal.unwrap_or_default();

        let slots: Vec<Arc<SharedSlot>> = (0..n)
            .map(|i| Arc::new(SharedSlot::new(SlotId(i as u32), SharedSlot::charger_part_name(i))))
            .collect();

        let robots = self
            .strategies
            .iter()
            .enumerate()
            .map(|(i, &strategy)| {
                let left = Arc::clone(&slots[i]);
                let right = Arc::clone(&slots[(i + n - 1) % n]);
                Arc::new(Robot::new(AgentId(i as u32), strategy, left, right, Arc::clone(&signal)))
            })
            .collect();

        Ring { slots, robots, signal }
    }
}
