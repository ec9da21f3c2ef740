//! Invariants that must hold for any frame-time sequence

use proptest::prelude::*;

use sky_fall::presenter::HeadlessPresenter;
use sky_fall::sim::{
    DifficultyController, EnergyScoreMachine, GamePhase, GameSession, ObjectId, ObjectKind,
    ObjectPool, SeededRandom, SpawnScheduler,
};
use sky_fall::tuning::{EnergyTuning, Tuning};

/// Tuning that keeps many objects in the air at once
fn crowded() -> Tuning {
    Tuning {
        hazard_interval: 0.3,
        hazard_duration: 40.0,
        pickup_interval: 0.5,
        pickup_duration: 40.0,
        ..Default::default()
    }
}

fn frame_times() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(
        prop_oneof![
            8 => 0.0f32..0.5,
            1 => 0.5f32..10.0,
            1 => 100.0f32..100_000.0,
        ],
        1..400,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn energy_score_and_cap_hold(
        seed in any::<u64>(),
        frames in frame_times(),
        crowd in any::<bool>(),
    ) {
        let tuning = if crowd { crowded() } else { Tuning::default() };
        let cap = tuning.active_cap;
        let mut session =
            GameSession::new(tuning, HeadlessPresenter::new(), SeededRandom::new(seed)).unwrap();
        session.start();

        let mut was_over = false;
        for dt in frames {
            session.tick(dt);
            for object in session.presenter_mut().advance(dt) {
                session.complete_motion(object);
            }

            let player = *session.player();
            prop_assert!(player.energy <= 100);
            prop_assert!(session.active_count() <= cap);
            let visible = session.pool().iter().filter(|o| o.visible).count();
            prop_assert_eq!(session.active_count(), visible);

            if was_over {
                prop_assert_eq!(session.phase(), GamePhase::GameOver);
            }
            if player.energy == 0 {
                prop_assert!(!session.is_running());
            }
            was_over = session.phase() == GamePhase::GameOver;
        }
    }

    #[test]
    fn pickups_respect_gate(active in 0usize..45, seed in any::<u64>()) {
        let tuning = Tuning::default();
        let difficulty = DifficultyController::new(&tuning);
        let mut scheduler = SpawnScheduler::new(&tuning);
        let mut rng = SeededRandom::new(seed);

        let state = difficulty.state();
        let request = scheduler.tick(25.0, ObjectKind::Pickup, state, active, &mut rng);
        prop_assert_eq!(request.is_some(), active <= tuning.pickup_gate);
        prop_assert_eq!(scheduler.timers().pickup, 0.0);

        let request = scheduler.tick(25.0, ObjectKind::Hazard, state, active, &mut rng);
        prop_assert_eq!(request.is_some(), active < tuning.active_cap);
    }

    #[test]
    fn difficulty_only_tightens(frames in frame_times()) {
        let tuning = Tuning::default();
        let mut difficulty = DifficultyController::new(&tuning);
        let mut previous = difficulty.state().clone();

        for dt in frames {
            difficulty.tick(dt);
            let s = difficulty.state();
            prop_assert!(s.hazard_interval <= previous.hazard_interval);
            prop_assert!(s.hazard_duration <= previous.hazard_duration);
            prop_assert!(s.pickup_duration <= previous.pickup_duration);
            prop_assert!(s.hazard_interval >= 0.25);
            prop_assert!(s.hazard_duration >= 4.0);
            prop_assert!(s.pickup_duration >= 8.0);
            prop_assert!(s.timer >= 0.0);
            previous = s.clone();
        }
    }

    #[test]
    fn pool_wraps_after_full_cycle(size in 1usize..64) {
        let mut pool = ObjectPool::new(size, size);
        let first = pool.acquire_next(ObjectKind::Hazard).id;
        for _ in 1..size {
            pool.acquire_next(ObjectKind::Hazard);
        }
        prop_assert_eq!(pool.acquire_next(ObjectKind::Hazard).id, first);
        prop_assert_eq!(pool.len(ObjectKind::Hazard), size);
    }

    #[test]
    fn resolutions_follow_energy_rules(kinds in prop::collection::vec(any::<bool>(), 1..100)) {
        let mut machine = EnergyScoreMachine::new(EnergyTuning::default());
        let mut events = Vec::new();

        for (slot, is_hazard) in kinds.into_iter().enumerate() {
            let before = *machine.player();
            let over = machine.is_game_over();
            let kind = if is_hazard { ObjectKind::Hazard } else { ObjectKind::Pickup };
            machine.resolve(ObjectId { kind, slot }, &mut events);
            let after = *machine.player();

            if over {
                prop_assert_eq!(before, after);
                continue;
            }
            match kind {
                ObjectKind::Hazard => {
                    prop_assert_eq!(after.energy, before.energy.saturating_sub(15));
                    prop_assert_eq!(after.score, before.score);
                }
                ObjectKind::Pickup if before.energy == 100 => {
                    prop_assert_eq!(after.score, before.score + 25);
                    prop_assert_eq!(after.energy, 100);
                }
                ObjectKind::Pickup => {
                    prop_assert_eq!(after.energy, (before.energy + 10).min(100));
                    prop_assert_eq!(after.score, before.score);
                }
            }
            prop_assert_eq!(machine.is_game_over(), after.energy == 0);
        }
    }
}
