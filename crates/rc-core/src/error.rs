//! Strategy selection errors.
//!
//! These are raised before any simulation state is built.  None of them is
//! recoverable: the caller reports the message and stops.

use thiserror::Error;

/// Why a list of policy selectors was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("illegal number of arguments: expected {expected} selectors (1/2/3), got {got}")]
    ArgumentCount { expected: usize, got: usize },

    #[error("illegal argument {value:?} at position {position}: expected an integer selector (1/2/3)")]
    ArgumentFormat { position: usize, value: String },

    #[error("illegal argument {value} at position {position}: selector must be 1, 2 or 3")]
    ArgumentRange { position: usize, value: i64 },
}

impl SelectionError {
    /// 1-based position of the offending selector, or `None` for a count
    /// mismatch.
    pub fn position(&self) -> Option<usize> {
        match self {
            SelectionError::ArgumentCount { .. } => None,
            SelectionError::ArgumentFormat { position, .. }
            | SelectionError::ArgumentRange { position, .. } => Some(*position),
        }
    }
}

/// Shorthand result type for selector parsing.
pub type SelectionResult<T> = Result<T, SelectionError>;
