//! The `Sim` struct: task launch, termination detection and shutdown.

use std::sync::Arc;

use rc_agent::{Ring, RingSnapshot, Termination};
use rc_behavior::{BehaviorResult, Policy, PolicyContext, discharge};
use rc_core::SimConfig;
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::{SimError, SimObserver, SimReport, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The ring, one policy per robot, and the pacing they run with.
///
/// `Sim::run` drives one simulation:
///
/// 1. **Launch**: one discharge task and one policy task per robot (2N
///    tasks).  Each robot's pair shares a child of the run's root
///    cancellation token.
/// 2. **Monitor**: wait on the ring's change signal and re-test the
///    termination predicate (every robot discharged, or every active robot
///    full) after each change.  A policy task that fails ends the run at
///    once.
/// 3. **Shutdown**: cancel the root token and join every task; policy tasks
///    release their parts on the way out.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  The ring's state is
/// consumed by a run: charges are not reset, so run a `Sim` once.
pub struct Sim {
    pub(crate) config:   SimConfig,
    pub(crate) ring:     Arc<Ring>,
    pub(crate) policies: Vec<Policy>,
}

/// Handles of the tasks spawned for one run.
struct RobotTasks {
    discharge: Vec<JoinHandle<()>>,
    policy:    JoinSet<BehaviorResult<()>>,
}

/// How the monitor loop ended.
enum Outcome {
    Settled(RingSnapshot, Termination),
    Failed(SimError),
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    pub fn ring(&self) -> &Arc<Ring> {
        &self.ring
    }

    /// Policy per robot, in ring order.
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Run until the termination predicate holds, then cancel and join every
    /// task.
    ///
    /// Must be called from inside a tokio runtime.  Calls observer hooks from
    /// the monitor loop.  Use [`NoopObserver`][crate::NoopObserver] if you
    /// don't need callbacks.
    pub async fn run<O: SimObserver>(&self, observer: &mut O) -> SimResult<SimReport> {
        let mut changes = self.ring.signal().subscribe();
        changes.borrow_and_update();
        observer.on_start(&self.ring.snapshot());

        let root = CancellationToken::new();
        let started = Instant::now();
        let mut tasks = self.spawn_tasks(&root);
        info!(robots = self.ring.len(), seed = self.config.seed, "simulation started");

        // ── Monitor ───────────────────────────────────────────────────────
        //
        // `changed()` marks the version seen before the snapshot is taken, so
        // a change racing with the snapshot always triggers one more pass.
        // A policy returning `Ok` only means its robot ran down.
        let outcome = loop {
            let snapshot = self.ring.snapshot();
            debug_assert!(
                self.ring.robots().iter().all(|r| r.holdings_consistent()),
                "hold flags disagree with slot owners"
            );
            observer.on_snapshot(started.elapsed(), &snapshot);
            if let Some(termination) = snapshot.termination() {
                break Outcome::Settled(snapshot, termination);
            }
            tokio::select! {
                changed = changes.changed() => {
                    if changed.is_err() {
                        break Outcome::Failed(SimError::TaskFailed("ring change signal closed".into()));
                    }
                }
                Some(joined) = tasks.policy.join_next() => {
                    if let Err(e) = policy_exit(joined) {
                        error!(error = %e, "policy task failed, stopping the run");
                        break Outcome::Failed(e);
                    }
                }
            }
        };
        let elapsed = started.elapsed();

        // ── Shutdown ──────────────────────────────────────────────────────
        root.cancel();
        let joined = join_all(tasks).await;

        let (snapshot, termination) = match outcome {
            Outcome::Settled(snapshot, termination) => (snapshot, termination),
            Outcome::Failed(e) => return Err(e),
        };
        joined?;

        let report = SimReport { snapshot, termination, elapsed };
        log_finished(&report);
        observer.on_sim_end(&report);
        Ok(report)
    }

    // ── Task launch ───────────────────────────────────────────────────────

    fn spawn_tasks(&self, root: &CancellationToken) -> RobotTasks {
        let mut tasks = RobotTasks {
            discharge: Vec::with_capacity(self.ring.len()),
            policy:    JoinSet::new(),
        };
        for (robot, &policy) in self.ring.robots().iter().zip(&self.policies) {
            let token = root.child_token();

            tasks.discharge.push(tokio::spawn(discharge(
                Arc::clone(robot),
                self.config.timings.discharge_interval,
                token.clone(),
            )));

            let ctx = PolicyContext::new(Arc::clone(&self.ring), robot.id(), &self.config, token);
            tasks.policy.spawn(async move { policy.run(ctx).await });

            debug!(agent = robot.id().0, strategy = %robot.strategy(), "robot tasks spawned");
        }
        tasks
    }
}

// ── Shutdown helpers ──────────────────────────────────────────────────────────

/// Map a finished policy task to the run's error type.
fn policy_exit(joined: Result<BehaviorResult<()>, JoinError>) -> SimResult<()> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(SimError::Behavior(e)),
        Err(e)     => Err(SimError::TaskFailed(e.to_string())),
    }
}

/// Join every task still running, then report the first failure, if any.
///
/// All handles are awaited even after a failure so no task outlives the run.
async fn join_all(mut tasks: RobotTasks) -> SimResult<()> {
    let mut first_err: Option<SimError> = None;

    for handle in tasks.discharge {
        if let Err(e) = handle.await {
            first_err.get_or_insert(SimError::TaskFailed(e.to_string()));
        }
    }
    while let Some(joined) = tasks.policy.join_next().await {
        if let Err(e) = policy_exit(joined) {
            first_err.get_or_insert(e);
        }
    }

    match first_err {
        Some(e) => Err(e),
        None    => Ok(()),
    }
}

fn log_finished(report: &SimReport) {
    info!(
        elapsed_ms = report.elapsed.as_millis() as u64,
        charges = ?report.final_charges(),
        termination = report.termination.as_str(),
        "simulation finished"
    );
}

