//! The discharge role: one per robot, independent of its policy.

use std::sync::Arc;
use std::time::Duration;

use rc_agent::Robot;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Drain `robot` by one step every `interval` until it is discharged or
/// `cancel` fires.
///
/// On the way out the same token is cancelled, which stops the robot's
/// policy task: a discharged robot no longer competes for parts.
pub async fn discharge(robot: Arc<Robot>, interval: Duration, cancel: CancellationToken) {
    while robot.is_active() && !cancel.is_cancelled() {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
        robot.apply_discharge();
    }
    debug!(agent = robot.id().0, charge = robot.charge(), "discharge task finished");
    cancel.cancel();
}
