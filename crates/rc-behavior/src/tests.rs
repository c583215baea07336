//! Unit tests for rc-behavior.
//!
//! Async tests run on a paused clock: timers fire in order as soon as every
//! task is idle, so multi-second schedules finish instantly and tick counts
//! are exact.

use std::sync::Arc;
use std::time::Duration;

use rc_agent::{Ring, RingBuilder};
use rc_core::{AgentId, RING_SIZE, SimConfig, Strategy};
use tokio_util::sync::CancellationToken;

use crate::{Neighbors, Policy, PolicyContext};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ring(strategy: Strategy) -> Arc<Ring> {
    Arc::new(RingBuilder::new(vec![strategy; RING_SIZE]).build())
}

fn context(ring: &Arc<Ring>, agent: u32, cancel: &CancellationToken) -> PolicyContext {
    PolicyContext::new(Arc::clone(ring), AgentId(agent), &SimConfig::with_seed(7), cancel.clone())
}

fn wired(ring: &Ring, agent: u32) -> Policy {
    let mut policy = Policy::for_strategy(Strategy::Gentlemanly);
    policy.set_neighbors(Neighbors::in_ring(ring, AgentId(agent)));
    policy
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[cfg(test)]
mod policy_tests {
    use super::*;
    use crate::{Gentlemanly, Greedy};

    #[test]
    fn for_strategy_round_trips() {
        for s in Strategy::ALL {
            assert_eq!(Policy::for_strategy(s).strategy(), s);
        }
    }

    #[test]
    fn set_neighbors_only_affects_gentlemanly() {
        let n = Neighbors { left: AgentId(1), right: AgentId(5) };
        let mut greedy = Policy::for_strategy(Strategy::Greedy);
        greedy.set_neighbors(n);
        assert_eq!(greedy, Policy::Greedy(Greedy));

        let mut gentle = Policy::for_strategy(Strategy::Gentlemanly);
        gentle.set_neighbors(n);
        assert_eq!(gentle, Policy::Gentlemanly(Gentlemanly::with_neighbors(n)));
    }
}

#[cfg(test)]
mod gentlemanly_tests {
    use rc_agent::Side;

    use super::*;
    use crate::{BehaviorError, Gentlemanly};

    #[test]
    fn yield_before_neighbours_are_set_fails() {
        let ring = ring(Strategy::Gentlemanly);
        let robot = ring.robot(AgentId(2));
        let err = Gentlemanly::new().try_yield(&ring, robot).unwrap_err();
        assert_eq!(err, BehaviorError::NeighborsNotConfigured(AgentId(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn run_before_neighbours_are_set_fails() {
        let ring = ring(Strategy::Gentlemanly);
        let cancel = CancellationToken::new();
        let policy = Policy::for_strategy(Strategy::Gentlemanly);
        let err = policy.run(context(&ring, 1, &cancel)).await.unwrap_err();
        assert_eq!(err, BehaviorError::NeighborsNotConfigured(AgentId(1)));
        assert!(ring.slots().iter().all(|s| s.is_free()));
    }

    #[test]
    fn neighbours_in_ring() {
        let ring = ring(Strategy::Gentlemanly);
        assert_eq!(
            Neighbors::in_ring(&ring, AgentId(0)),
            Neighbors { left: AgentId(1), right: AgentId(5) }
        );
        assert_eq!(
            Neighbors::in_ring(&ring, AgentId(5)),
            Neighbors { left: AgentId(0), right: AgentId(4) }
        );
    }

    #[test]
    fn gives_part_to_weaker_left_neighbour() {
        let ring = ring(Strategy::Gentlemanly);
        let gentle = Gentlemanly::with_neighbors(Neighbors::in_ring(&ring, AgentId(1)));
        let me = ring.robot(AgentId(1));
        let left = ring.robot(AgentId(2));
        let right = ring.robot(AgentId(0));

        assert!(me.try_take_left() && me.try_take_right());
        assert!(me.gathered_both());

        left.apply_discharge();
        assert_eq!(gentle.try_yield(&ring, me).unwrap(), Some(Side::Left));
        assert!(!me.gathered_both());
        assert!(!me.try_free_left(), "already given away");
        assert!(left.try_take_right(), "left neighbour can take the shared part");
        assert!(!right.try_take_left(), "right part is still held");
    }

    #[test]
    fn keeps_parts_against_equal_or_discharged_neighbours() {
        let ring = ring(Strategy::Gentlemanly);
        let gentle = Gentlemanly::with_neighbors(Neighbors::in_ring(&ring, AgentId(1)));
        let me = ring.robot(AgentId(1));
        me.try_take_left();
        me.try_take_right();

        assert_eq!(gentle.try_yield(&ring, me).unwrap(), None, "equal charge");

        let left = ring.robot(AgentId(2));
        while left.is_active() {
            left.apply_discharge();
        }
        assert_eq!(gentle.try_yield(&ring, me).unwrap(), None, "discharged neighbour");
        assert!(me.gathered_both());
    }

    #[test]
    fn checks_left_before_right() {
        let ring = ring(Strategy::Gentlemanly);
        let gentle = Gentlemanly::with_neighbors(Neighbors::in_ring(&ring, AgentId(3)));
        let me = ring.robot(AgentId(3));
        me.try_take_left();
        me.try_take_right();
        ring.robot(AgentId(4)).apply_discharge();
        ring.robot(AgentId(2)).apply_discharge();

        assert_eq!(gentle.try_yield(&ring, me).unwrap(), Some(Side::Left));
        assert_eq!(gentle.try_yield(&ring, me).unwrap(), Some(Side::Right));
        assert_eq!(gentle.try_yield(&ring, me).unwrap(), None);
    }

    #[test]
    fn yield_reports_only_parts_it_released() {
        for _ in 0..2_000 {
            let ring = ring(Strategy::Gentlemanly);
            let gentle = Gentlemanly::with_neighbors(Neighbors::in_ring(&ring, AgentId(1)));
            let me = ring.robot(AgentId(1));
            assert!(me.try_take_left() && me.try_take_right());
            for _ in 0..3 {
                me.apply_discharge();
            }
            let left = ring.robot(AgentId(2));
            for _ in 0..4 {
                left.apply_discharge();
            }
            assert_eq!((me.charge(), left.charge()), (20, 10));

            // Two discharge steps take `me` to zero, which releases both
            // parts; a successful hand-over adds exactly one more change.
            let before = ring.signal().version();
            let yielded = std::thread::scope(|s| {
                s.spawn(|| {
                    me.apply_discharge();
                    me.apply_discharge();
                });
                gentle.try_yield(&ring, me).unwrap()
            });
            let changes = ring.signal().version() - before;

            match yielded {
                Some(side) => {
                    assert_eq!(side, Side::Left);
                    assert_eq!(changes, 3, "reported a hand-over that never happened");
                }
                None => assert_eq!(changes, 2),
            }
            assert!(ring.slots().iter().all(|s| s.is_free()));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn charges_and_releases_on_cancel() {
        let ring = ring(Strategy::Gentlemanly);
        let cancel = CancellationToken::new();
        // Stronger neighbours never trigger a hand-over.
        for id in [1, 5] {
            let n = ring.robot(AgentId(id));
            n.try_take_left();
            n.try_take_right();
            while n.apply_charge() {}
            n.free_all();
        }
        let policy = wired(&ring, 0);
        let handle = tokio::spawn(policy_task(policy, context(&ring, 0, &cancel)));

        tokio::time::sleep(ms(1_100)).await;
        let me = ring.robot(AgentId(0));
        assert!(me.gathered_both());
        assert_eq!(me.charge(), 70);

        cancel.cancel();
        handle.await.unwrap().unwrap();
        assert!(!me.holds_left() && !me.holds_right());
        assert!(ring.slots().iter().all(|s| s.is_free()));
    }

    async fn policy_task(policy: Policy, ctx: PolicyContext) -> crate::BehaviorResult<()> {
        policy.run(ctx).await
    }
}

#[cfg(test)]
mod greedy_tests {
    use super::*;
    use crate::GREEDY_THRESHOLD;

    #[tokio::test(start_paused = true)]
    async fn charges_to_full_and_keeps_parts() {
        let ring = ring(Strategy::Greedy);
        let cancel = CancellationToken::new();
        let policy = Policy::for_strategy(Strategy::Greedy);
        let ctx = context(&ring, 0, &cancel);
        let handle = tokio::spawn(async move { policy.run(ctx).await });

        tokio::time::sleep(ms(2_600)).await;
        let me = ring.robot(AgentId(0));
        assert_eq!(me.charge(), 100);
        assert!(me.gathered_both());

        tokio::time::sleep(ms(2_000)).await;
        assert_eq!(me.charge(), 100, "no charging past full");

        cancel.cancel();
        handle.await.unwrap().unwrap();
        assert!(ring.slots().iter().all(|s| s.is_free()));
    }

    #[tokio::test(start_paused = true)]
    async fn idles_at_threshold() {
        let ring = ring(Strategy::Greedy);
        let me = ring.robot(AgentId(2));
        me.try_take_left();
        me.try_take_right();
        me.apply_charge();
        me.free_all();
        assert_eq!(me.charge(), GREEDY_THRESHOLD);

        let cancel = CancellationToken::new();
        let policy = Policy::for_strategy(Strategy::Greedy);
        let ctx = context(&ring, 2, &cancel);
        let handle = tokio::spawn(async move { policy.run(ctx).await });

        tokio::time::sleep(ms(3_000)).await;
        assert!(!me.holds_left() && !me.holds_right());
        assert_eq!(me.charge(), GREEDY_THRESHOLD);

        cancel.cancel();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_single_part_while_neighbour_holds_the_other() {
        let ring = ring(Strategy::Greedy);
        let neighbour = ring.robot(AgentId(0));
        assert!(neighbour.try_take_left());

        let cancel = CancellationToken::new();
        let policy = Policy::for_strategy(Strategy::Greedy);
        let ctx = context(&ring, 1, &cancel);
        let handle = tokio::spawn(async move { policy.run(ctx).await });

        tokio::time::sleep(ms(1_000)).await;
        let me = ring.robot(AgentId(1));
        assert!(me.holds_left());
        assert!(!me.holds_right());
        assert_eq!(me.charge(), 50);

        neighbour.try_free_left();
        tokio::time::sleep(ms(600)).await;
        assert!(me.gathered_both());
        assert_eq!(me.charge(), 60);

        cancel.cancel();
        handle.await.unwrap().unwrap();
        assert!(!me.holds_left() && !me.holds_right());
    }
}

#[cfg(test)]
mod random_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn waits_until_both_parts_are_free() {
        let ring = ring(Strategy::Random);
        let neighbour = ring.robot(AgentId(0));
        assert!(neighbour.try_take_left());

        let cancel = CancellationToken::new();
        let policy = Policy::for_strategy(Strategy::Random);
        let ctx = context(&ring, 1, &cancel);
        let handle = tokio::spawn(async move { policy.run(ctx).await });

        tokio::time::sleep(ms(1_000)).await;
        let me = ring.robot(AgentId(1));
        assert!(!me.holds_left() && !me.holds_right(), "takes nothing while one part is busy");
        assert_eq!(me.charge(), 50);

        neighbour.try_free_left();
        tokio::time::sleep(ms(600)).await;
        assert!(me.gathered_both());
        assert_eq!(me.charge(), 60);

        cancel.cancel();
        handle.await.unwrap().unwrap();
        assert!(ring.slots().iter().all(|s| s.is_free()));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_during_wait_exits_without_charging() {
        let ring = ring(Strategy::Random);
        ring.robot(AgentId(3)).try_take_left();

        let cancel = CancellationToken::new();
        let policy = Policy::for_strategy(Strategy::Random);
        let ctx = context(&ring, 4, &cancel);
        let handle = tokio::spawn(async move { policy.run(ctx).await });

        tokio::time::sleep(ms(500)).await;
        cancel.cancel();
        handle.await.unwrap().unwrap();
        assert_eq!(ring.robot(AgentId(4)).charge(), 50);
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_charging_until_full() {
        let ring = ring(Strategy::Random);
        let cancel = CancellationToken::new();
        let policy = Policy::for_strategy(Strategy::Random);
        let ctx = context(&ring, 3, &cancel);
        let handle = tokio::spawn(async move { policy.run(ctx).await });

        // Five ticks of at most 500 + 300 ms each.
        tokio::time::sleep(ms(4_100)).await;
        let me = ring.robot(AgentId(3));
        assert_eq!(me.charge(), 100);
        assert!(me.gathered_both());

        cancel.cancel();
        handle.await.unwrap().unwrap();
        assert!(!me.gathered_both());
    }
}

#[cfg(test)]
mod discharge_tests {
    use super::*;
    use crate::discharge;

    #[tokio::test(start_paused = true)]
    async fn drains_to_zero_then_cancels_policy() {
        let ring = ring(Strategy::Greedy);
        let me = Arc::clone(ring.robot(AgentId(0)));
        me.try_take_right();

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(discharge(Arc::clone(&me), ms(1_000), cancel.clone()));

        tokio::time::sleep(ms(4_100)).await;
        assert_eq!(me.charge(), 10);
        assert!(!cancel.is_cancelled());

        tokio::time::sleep(ms(1_000)).await;
        assert!(!me.is_active());
        assert!(!me.holds_right());
        handle.await.unwrap();
        assert!(cancel.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn stops_on_external_cancel() {
        let ring = ring(Strategy::Greedy);
        let me = Arc::clone(ring.robot(AgentId(0)));
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(discharge(Arc::clone(&me), ms(1_000), cancel.clone()));

        tokio::time::sleep(ms(2_500)).await;
        cancel.cancel();
        handle.await.unwrap();
        assert_eq!(me.charge(), 30);
        assert!(me.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn discharged_robot_stops_its_policy() {
        let ring = ring(Strategy::Greedy);
        let cancel = CancellationToken::new();
        // Neighbours hold both parts, so robot 2 can never charge.
        ring.robot(AgentId(3)).try_take_right();
        ring.robot(AgentId(1)).try_take_left();

        let me = Arc::clone(ring.robot(AgentId(2)));
        let policy = Policy::for_strategy(Strategy::Greedy);
        let ctx = context(&ring, 2, &cancel);
        let policy_handle = tokio::spawn(async move { policy.run(ctx).await });
        let discharge_handle = tokio::spawn(discharge(Arc::clone(&me), ms(1_000), cancel.clone()));

        discharge_handle.await.unwrap();
        policy_handle.await.unwrap().unwrap();
        assert_eq!(me.charge(), 0);
        assert!(!me.holds_left() && !me.holds_right());
    }
}
