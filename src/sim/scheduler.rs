//! Spawn scheduling
//!
//! Each kind accumulates frame time toward its interval. Crossing the
//! interval resets the timer to zero and produces at most one spawn request,
//! so a single huge frame never bursts out a backlog of objects.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyState;
use super::rng::RandomSource;
use super::state::ObjectKind;
use crate::tuning::Tuning;

/// Parameters for one fall, produced by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRequest {
    pub kind: ObjectKind,
    pub start: Vec2,
    pub target: Vec2,
    /// Seconds the fall takes
    pub duration: f32,
}

/// Accumulated time for each kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimers {
    pub hazard: f32,
    pub pickup: f32,
}

impl SpawnTimers {
    fn get_mut(&mut self, kind: ObjectKind) -> &mut f32 {
        match kind {
            ObjectKind::Hazard => &mut self.hazard,
            ObjectKind::Pickup => &mut self.pickup,
        }
    }
}

/// Per-kind timers and the spawn gates
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    timers: SpawnTimers,
    pickup_interval: f32,
    active_cap: usize,
    pickup_gate: usize,
    min_x: i32,
    max_x: i32,
    spawn_y: f32,
    ground_y: f32,
}

impl SpawnScheduler {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            timers: SpawnTimers::default(),
            pickup_interval: tuning.pickup_interval,
            active_cap: tuning.active_cap,
            pickup_gate: tuning.pickup_gate,
            min_x: tuning.spawn_min_x(),
            max_x: tuning.spawn_max_x(),
            spawn_y: tuning.spawn_y(),
            ground_y: tuning.ground_y(),
        }
    }

    pub fn timers(&self) -> &SpawnTimers {
        &self.timers
    }

    pub fn reset(&mut self) {
        self.timers = SpawnTimers::default();
    }

    /// Current interval for `kind`; hazards follow the difficulty ramp
    pub fn interval(&self, kind: ObjectKind, difficulty: &DifficultyState) -> f32 {
        match kind {
            ObjectKind::Hazard => difficulty.hazard_interval,
            ObjectKind::Pickup => self.pickup_interval,
        }
    }

    /// Whether a spawn of `kind` is allowed with `active` objects falling
    pub fn gate_open(&self, kind: ObjectKind, active: usize) -> bool {
        match kind {
            ObjectKind::Hazard => active < self.active_cap,
            ObjectKind::Pickup => active <= self.pickup_gate && active < self.active_cap,
        }
    }

    /// Advance the timer for `kind`. When it crosses the interval the timer
    /// resets even if the spawn itself is gated off.
    pub fn tick<R: RandomSource>(
        &mut self,
        dt: f32,
        kind: ObjectKind,
        difficulty: &DifficultyState,
        active: usize,
        rng: &mut R,
    ) -> Option<SpawnRequest> {
        let interval = self.interval(kind, difficulty);
        let timer = self.timers.get_mut(kind);
        *timer += dt;
        if *timer <= interval {
            return None;
        }
        *timer = 0.0;

        if !self.gate_open(kind, active) {
            log::trace!("{} spawn suppressed with {} active", kind.as_str(), active);
            return None;
        }

        let start_x = rng.random_int(self.min_x, self.max_x);
        let target_x = rng.random_int(self.min_x, self.max_x);
        let duration = match kind {
            ObjectKind::Hazard => difficulty.hazard_duration,
            ObjectKind::Pickup => difficulty.pickup_duration,
        };

        Some(SpawnRequest {
            kind,
            start: Vec2::new(start_x as f32, self.spawn_y),
            target: Vec2::new(target_x as f32, self.ground_y),
            duration,
        })
    }
}
