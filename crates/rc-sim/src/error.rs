use rc_behavior::BehaviorError;
use rc_core::SelectionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid strategy selection: {0}")]
    Selection(#[from] SelectionError),

    #[error("a ring needs at least {min} robots, got {got}")]
    RingTooSmall {
        min: usize,
        got: usize,
    },

    #[error("policy error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("robot task failed: {0}")]
    TaskFailed(String),
}

pub type SimResult<T> = Result<T, SimError>;
