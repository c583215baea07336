//! Charging strategy tags and selector parsing.
//!
//! The command line hands the simulator one selector per ring position.
//! Selectors map onto strategies in a single fixed order:
//!
//! | Selector | Strategy       |
//! |----------|----------------|
//! | `1`      | `Greedy`       |
//! | `2`      | `Random`       |
//! | `3`      | `Gentlemanly`  |

use crate::{SelectionError, SelectionResult};

/// Number of robots (and charger parts) in the standard ring.
pub const RING_SIZE: usize = 6;

/// The acquisition policy a robot runs for its whole life.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Grabs both parts whenever charge drops below the threshold and keeps
    /// them until full.
    Greedy,
    /// Waits until both parts look free, grabs them and charges with a
    /// randomised pause between ticks.
    Random,
    /// Grabs what it can but hands a part over to a weaker neighbour.
    Gentlemanly,
}

impl Strategy {
    /// All strategies in selector order.
    pub const ALL: [Strategy; 3] = [Strategy::Greedy, Strategy::Random, Strategy::Gentlemanly];

    /// Map a selector value (1-based) onto a strategy.
    pub fn from_selector(selector: i64) -> Option<Strategy> {
        match selector {
            1 => Some(Strategy::Greedy),
            2 => Some(Strategy::Random),
            3 => Some(Strategy::Gentlemanly),
            _ => None,
        }
    }

    /// Inverse of [`from_selector`](Self::from_selector).
    pub fn selector(self) -> u8 {
        match self {
            Strategy::Greedy      => 1,
            Strategy::Random      => 2,
            Strategy::Gentlemanly => 3,
        }
    }

    /// Human-readable label, used in logs and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Greedy      => "greedy",
            Strategy::Random      => "random",
            Strategy::Gentlemanly => "gentlemanly",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate exactly [`RING_SIZE`] textual selectors and map them onto
/// strategies.
///
/// The count is checked first; after that the first offending position
/// (1-based) is reported.  Surrounding whitespace is ignored.
pub fn parse_selectors<S: AsRef<str>>(args: &[S]) -> SelectionResult<Vec<Strategy>> {
    if args.len() != RING_SIZE {
        return Err(SelectionError::ArgumentCount { expected: RING_SIZE, got: args.len() });
    }

    args.iter()
        .enumerate()
        .map(|(i, raw)| {
            let position = i + 1;
            let raw = raw.as_ref().trim();
            let value: i64 = raw.parse().map_err(|_| SelectionError::ArgumentFormat {
                position,
                value: raw.to_owned(),
            })?;
            Strategy::from_selector(value)
                .ok_or(SelectionError::ArgumentRange { position, value })
        })
        .collect()
}
