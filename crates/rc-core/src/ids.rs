//! Strongly typed, zero-cost identifier wrappers.
//!
//! Ids are assigned sequentially by the ring builder (robot `i` and slot `i`
//! sit at ring position `i`), so the inner integer doubles as an index into
//! the fixed robot and slot tables.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a table index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

    };
}

typed_id! {
    /// Ring position of a robot.  Stable for the robot's whole life.
    pub struct AgentId(u32);
}

typed_id! {
    /// Ring position of a shared charger part.
    pub struct SlotId(u32);
}
