//! Data-driven game balance
//!
//! Every number the simulation reads lives here so a run can be re-tuned from
//! a JSON document without touching code. `Tuning::default()` is the reference
//! balance the game ships with.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Difficulty ramp parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTuning {
    /// Seconds between two tightening steps
    pub interval: f32,
    /// Subtracted from the hazard spawn interval each step
    pub hazard_interval_step: f32,
    pub hazard_interval_floor: f32,
    /// Subtracted from the hazard travel duration each step
    pub hazard_duration_step: f32,
    pub hazard_duration_floor: f32,
    /// Subtracted from the pickup travel duration each step
    pub pickup_duration_step: f32,
    pub pickup_duration_floor: f32,
}

impl Default for DifficultyTuning {
    fn default() -> Self {
        Self {
            interval: DIFFICULTY_INTERVAL,
            hazard_interval_step: 0.2,
            hazard_interval_floor: 0.25,
            hazard_duration_step: 1.0,
            hazard_duration_floor: 4.0,
            pickup_duration_step: 1.0,
            pickup_duration_floor: 8.0,
        }
    }
}

/// Energy and score rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyTuning {
    /// Energy at session start, also the ceiling
    pub max_energy: u32,
    /// Energy lost when a hazard lands
    pub hazard_damage: u32,
    /// Energy restored by a pickup when below max
    pub pickup_heal: u32,
    /// Score awarded by a pickup collected at full energy
    pub overflow_bonus: u64,
}

impl Default for EnergyTuning {
    fn default() -> Self {
        Self {
            max_energy: MAX_ENERGY,
            hazard_damage: 15,
            pickup_heal: 10,
            overflow_bonus: 25,
        }
    }
}

/// Complete balance configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play area ===
    pub play_width: f32,
    pub play_height: f32,
    /// Sprite height used to start objects just above the top edge
    pub object_height: f32,
    /// Fraction of play height where falling objects land
    pub ground_fraction: f32,
    /// Fraction of play width objects spawn and land within (centered)
    pub spawn_band: f32,

    // === Pools ===
    pub hazard_pool_size: usize,
    pub pickup_pool_size: usize,
    /// Hard cap on simultaneously falling objects
    pub active_cap: usize,
    /// Pickups are suppressed while more than this many objects fall
    pub pickup_gate: usize,

    // === Spawning ===
    pub hazard_interval: f32,
    pub hazard_duration: f32,
    /// Pickup cadence does not ramp
    pub pickup_interval: f32,
    pub pickup_duration: f32,

    pub difficulty: DifficultyTuning,
    pub energy: EnergyTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,
            object_height: OBJECT_HEIGHT,
            ground_fraction: 0.15,
            spawn_band: 0.8,

            hazard_pool_size: HAZARD_POOL_SIZE,
            pickup_pool_size: PICKUP_POOL_SIZE,
            active_cap: ACTIVE_CAP,
            pickup_gate: PICKUP_GATE,

            hazard_interval: 2.5,
            hazard_duration: 10.0,
            pickup_interval: 20.0,
            pickup_duration: 15.0,

            difficulty: DifficultyTuning::default(),
            energy: EnergyTuning::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning document. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with. NaN fails every check.
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }
        fn positive(x: f32) -> bool {
            x > 0.0
        }
        fn at_least(x: f32, min: f32) -> bool {
            x >= min
        }

        if self.hazard_pool_size == 0 {
            return invalid("hazard_pool_size", "pool must hold at least one object");
        }
        if self.pickup_pool_size == 0 {
            return invalid("pickup_pool_size", "pool must hold at least one object");
        }
        if self.active_cap == 0 {
            return invalid("active_cap", "must allow at least one falling object");
        }
        if self.pickup_gate > self.active_cap {
            return invalid("pickup_gate", "must not exceed active_cap");
        }
        if !(positive(self.spawn_band) && self.spawn_band <= 1.0) {
            return invalid("spawn_band", "must be in (0, 1]");
        }
        // The band has to span at least one whole unit to draw from
        if !at_least(self.play_width * self.spawn_band, 1.0) {
            return invalid("spawn_band", "spawn band narrower than one unit");
        }
        if !positive(self.play_height) {
            return invalid("play_height", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.ground_fraction) {
            return invalid("ground_fraction", "must be in [0, 1]");
        }

        if !positive(self.hazard_interval) {
            return invalid("hazard_interval", "must be positive");
        }
        if !positive(self.hazard_duration) {
            return invalid("hazard_duration", "must be positive");
        }
        if !positive(self.pickup_interval) {
            return invalid("pickup_interval", "must be positive");
        }
        if !positive(self.pickup_duration) {
            return invalid("pickup_duration", "must be positive");
        }

        let d = &self.difficulty;
        if !positive(d.interval) {
            return invalid("difficulty.interval", "must be positive");
        }
        if !(at_least(d.hazard_interval_step, 0.0)
            && at_least(d.hazard_duration_step, 0.0)
            && at_least(d.pickup_duration_step, 0.0))
        {
            return invalid("difficulty", "steps must not be negative");
        }
        if !positive(d.hazard_interval_floor) {
            return invalid("difficulty.hazard_interval_floor", "must be positive");
        }
        if !positive(d.hazard_duration_floor) {
            return invalid("difficulty.hazard_duration_floor", "must be positive");
        }
        if !positive(d.pickup_duration_floor) {
            return invalid("difficulty.pickup_duration_floor", "must be positive");
        }
        // Floors above the starting values would make the ramp ease off
        if !at_least(self.hazard_interval, d.hazard_interval_floor) {
            return invalid("hazard_interval", "starts below its difficulty floor");
        }
        if !at_least(self.hazard_duration, d.hazard_duration_floor) {
            return invalid("hazard_duration", "starts below its difficulty floor");
        }
        if !at_least(self.pickup_duration, d.pickup_duration_floor) {
            return invalid("pickup_duration", "starts below its difficulty floor");
        }

        if self.energy.max_energy == 0 {
            return invalid("energy.max_energy", "must be positive");
        }
        Ok(())
    }

    /// Left edge of the spawn band (inclusive)
    pub fn spawn_min_x(&self) -> i32 {
        (self.play_width * (1.0 - self.spawn_band) * 0.5) as i32
    }

    /// Right edge of the spawn band (inclusive)
    pub fn spawn_max_x(&self) -> i32 {
        self.spawn_min_x() + (self.play_width * self.spawn_band) as i32 - 1
    }

    /// Y where falling objects start, half a sprite above the top edge
    pub fn spawn_y(&self) -> f32 {
        self.play_height + self.object_height * 0.5
    }

    /// Y of the ground line objects fall to
    pub fn ground_y(&self) -> f32 {
        self.play_height * self.ground_fraction
    }
}
