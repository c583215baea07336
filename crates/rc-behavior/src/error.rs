use rc_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BehaviorError {
    /// A gentlemanly robot ran before the orchestrator wired its
    /// neighbours.  This is a wiring bug, never a runtime condition.
    #[error("neighbours of gentlemanly robot {0} are not set")]
    NeighborsNotConfigured(AgentId),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
