//! Difficulty ramp
//!
//! Every `interval` seconds the hazard spawn interval and both travel
//! durations shrink by fixed steps until they reach their floors. The ramp
//! only tightens; nothing eases it back within a session.

use serde::{Deserialize, Serialize};

use crate::tuning::{DifficultyTuning, Tuning};

/// Live difficulty values read by the spawn scheduler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyState {
    /// Seconds between hazard spawns
    pub hazard_interval: f32,
    /// Seconds a hazard takes to fall (smaller is faster)
    pub hazard_duration: f32,
    /// Seconds a pickup takes to fall (smaller is faster)
    pub pickup_duration: f32,
    /// Time accumulated toward the next step
    pub timer: f32,
    /// Steps applied so far
    pub level: u32,
}

impl DifficultyState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            hazard_interval: tuning.hazard_interval,
            hazard_duration: tuning.hazard_duration,
            pickup_duration: tuning.pickup_duration,
            timer: 0.0,
            level: 0,
        }
    }
}

/// Periodic timer driving the ramp
#[derive(Debug, Clone)]
pub struct DifficultyController {
    params: DifficultyTuning,
    state: DifficultyState,
}

impl DifficultyController {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            params: tuning.difficulty.clone(),
            state: DifficultyState::new(tuning),
        }
    }

    pub fn state(&self) -> &DifficultyState {
        &self.state
    }

    /// Back to the session's starting values
    pub fn reset(&mut self, tuning: &Tuning) {
        self.params = tuning.difficulty.clone();
        self.state = DifficultyState::new(tuning);
    }

    /// Advance the step timer; tightens once when it crosses the interval.
    /// Returns true if a step was applied.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.state.timer += dt;
        if self.state.timer > self.params.interval {
            self.state.timer = 0.0;
            self.tighten();
            true
        } else {
            false
        }
    }

    /// Apply one step, clamped to the floors
    pub fn tighten(&mut self) {
        let p = &self.params;
        let s = &mut self.state;

        s.hazard_interval =
            (s.hazard_interval - p.hazard_interval_step).max(p.hazard_interval_floor);
        s.hazard_duration =
            (s.hazard_duration - p.hazard_duration_step).max(p.hazard_duration_floor);
        s.pickup_duration =
            (s.pickup_duration - p.pickup_duration_step).max(p.pickup_duration_floor);
        s.level += 1;

        log::debug!(
            "Difficulty {}: hazard every {:.2}s, hazard fall {:.1}s, pickup fall {:.1}s",
            s.level,
            s.hazard_interval,
            s.hazard_duration,
            s.pickup_duration
        );
    }
}
