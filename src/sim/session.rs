//! Session orchestration
//!
//! `GameSession` owns the pools, timers, difficulty ramp and energy machine
//! and advances them once per frame. Order within a tick:
//!
//! 1. Landed objects reported since the last tick are resolved.
//! 2. The difficulty ramp advances.
//! 3. Each kind's spawn timer advances; requests are dispatched immediately.
//!
//! Nothing ticks outside `GamePhase::Playing`.

use super::difficulty::{DifficultyController, DifficultyState};
use super::energy::{EnergyScoreMachine, energy_text, score_text};
use super::pool::{ActiveObjectSet, ObjectPool};
use super::rng::RandomSource;
use super::scheduler::{SpawnRequest, SpawnScheduler};
use super::state::{GameEvent, GamePhase, ObjectId, ObjectKind, PlayerState};
use crate::audio::{Music, Sound};
use crate::presenter::{AmbientEffect, Indicator, Label, Motion, Presenter};
use crate::tuning::{Tuning, TuningError};

/// One game session driving a presenter
pub struct GameSession<P: Presenter, R: RandomSource> {
    tuning: Tuning,
    presenter: P,
    rng: R,
    phase: GamePhase,
    pool: ObjectPool,
    active: ActiveObjectSet,
    scheduler: SpawnScheduler,
    difficulty: DifficultyController,
    energy: EnergyScoreMachine,
    /// Landed objects waiting for the next tick
    completions: Vec<ObjectId>,
    /// Scratch buffer for energy machine output
    events: Vec<GameEvent>,
    /// Seconds of play since `start`
    elapsed: f32,
}

impl<P: Presenter, R: RandomSource> GameSession<P, R> {
    /// Build pools and timers from `tuning` and start the background music.
    /// The session waits in `NotStarted` until `start`.
    pub fn new(tuning: Tuning, mut presenter: P, rng: R) -> Result<Self, TuningError> {
        tuning.validate()?;

        presenter.set_background_music(Music::Background, true);

        Ok(Self {
            pool: ObjectPool::new(tuning.hazard_pool_size, tuning.pickup_pool_size),
            active: ActiveObjectSet::new(tuning.active_cap),
            scheduler: SpawnScheduler::new(&tuning),
            difficulty: DifficultyController::new(&tuning),
            energy: EnergyScoreMachine::new(tuning.energy.clone()),
            completions: Vec::with_capacity(tuning.active_cap),
            events: Vec::new(),
            elapsed: 0.0,
            phase: GamePhase::NotStarted,
            tuning,
            presenter,
            rng,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn player(&self) -> &PlayerState {
        self.energy.player()
    }

    pub fn difficulty(&self) -> &DifficultyState {
        self.difficulty.state()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn active(&self) -> &ActiveObjectSet {
        &self.active
    }

    pub fn pool(&self) -> &ObjectPool {
        &self.pool
    }

    pub fn scheduler(&self) -> &SpawnScheduler {
        &self.scheduler
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Begin a fresh run from any phase
    pub fn start(&mut self) {
        self.restore();
        self.phase = GamePhase::Playing;
        log::info!(
            "Session started: energy {}, hazard every {:.2}s",
            self.energy.player().energy,
            self.difficulty.state().hazard_interval
        );
    }

    /// Clear the field and restore starting values without starting play
    pub fn reset(&mut self) {
        self.restore();
        self.phase = GamePhase::NotStarted;
        log::info!("Session reset");
    }

    /// End the run. No-op unless playing.
    pub fn stop(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.halt();
        self.presenter.show_indicator(Indicator::GameOver, true);
        log::info!(
            "Session stopped after {:.1}s with score {}",
            self.elapsed,
            self.energy.player().score
        );
    }

    /// Completion callback for a presented fall. Resolved on the next tick;
    /// ignored outside play.
    pub fn complete_motion(&mut self, object: ObjectId) {
        if self.phase != GamePhase::Playing {
            log::debug!("Ignoring completion for {:?} in {:?}", object, self.phase);
            return;
        }
        self.completions.push(object);
    }

    /// Advance the session by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if self.phase != GamePhase::Playing {
            return;
        }
        debug_assert!(dt >= 0.0, "negative frame time {dt}");
        let dt = dt.max(0.0);
        self.elapsed += dt;

        self.drain_completions();
        if self.phase != GamePhase::Playing {
            return;
        }

        self.difficulty.tick(dt);

        for kind in ObjectKind::ALL {
            let request = self.scheduler.tick(
                dt,
                kind,
                self.difficulty.state(),
                self.active.len(),
                &mut self.rng,
            );
            if let Some(request) = request {
                self.dispatch(request);
            }
        }

        debug_assert!(self.active.len() <= self.active.cap());
    }

    fn dispatch(&mut self, request: SpawnRequest) {
        let object = self.pool.acquire_next(request.kind);
        object.launch(request.start, request.target, request.duration);

        let motion = Motion {
            object: object.id,
            start: request.start,
            target: request.target,
            duration: request.duration,
            ambient: AmbientEffect::for_kind(object.kind()),
        };

        // A recycled object still in flight keeps its single entry
        if !self.active.insert(motion.object) && !self.active.contains(motion.object) {
            self.pool.release(motion.object);
            return;
        }
        self.presenter.present_object(&motion);

        log::debug!(
            "Spawned {} #{} at x={} -> x={} over {:.1}s ({} active)",
            request.kind.as_str(),
            motion.object.slot,
            request.start.x,
            request.target.x,
            request.duration,
            self.active.len()
        );
    }

    fn drain_completions(&mut self) {
        let mut pending = std::mem::take(&mut self.completions);
        for object in pending.drain(..) {
            if self.phase != GamePhase::Playing {
                break;
            }
            self.land(object);
        }
        // Whatever was left behind a game over is stale
        pending.clear();
        self.completions = pending;
    }

    fn land(&mut self, object: ObjectId) {
        let was_active = self.active.remove(object);
        debug_assert!(was_active, "completion for inactive object {:?}", object);
        if !was_active {
            log::warn!("Completion for inactive object {:?} ignored", object);
            return;
        }
        self.pool.release(object);

        let mut events = std::mem::take(&mut self.events);
        self.energy.resolve(object, &mut events);
        for event in events.drain(..) {
            self.apply(event);
        }
        self.events = events;
    }

    fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::HazardImpact { object } => {
                self.presenter.show_impact(object);
                self.presenter.play_sound(Sound::Impact);
            }
            GameEvent::PickupCollected { object, .. } => {
                self.presenter.hide_object(object);
                self.presenter.play_sound(Sound::Bonus);
            }
            GameEvent::ScoreChanged { score } => {
                self.presenter.update_label(Label::Score, &score_text(score));
            }
            GameEvent::EnergyChanged { energy } => {
                self.presenter.update_label(Label::Energy, &energy_text(energy));
            }
            GameEvent::GameOver => {
                self.halt();
                self.presenter.play_sound(Sound::SessionEnd);
                self.presenter.show_indicator(Indicator::GameOver, true);
                log::info!(
                    "Game over after {:.1}s with score {}",
                    self.elapsed,
                    self.energy.player().score
                );
            }
        }
    }

    /// Leave play: cancel every fall and clear the field
    fn halt(&mut self) {
        self.phase = GamePhase::GameOver;
        self.energy.halt();
        self.clear_field();
    }

    fn clear_field(&mut self) {
        self.presenter.cancel_all_motions();
        for object in self.active.drain() {
            self.presenter.hide_object(object);
        }
        self.pool.release_all();
        self.completions.clear();
    }

    fn restore(&mut self) {
        self.clear_field();
        self.scheduler.reset();
        self.difficulty.reset(&self.tuning);
        self.energy.reset();
        self.elapsed = 0.0;

        self.presenter.show_indicator(Indicator::GameOver, false);
        let player = *self.energy.player();
        self.presenter
            .update_label(Label::Energy, &energy_text(player.energy));
        self.presenter.update_label(Label::Score, &score_text(player.score));
    }
}
