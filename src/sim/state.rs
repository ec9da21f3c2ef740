//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed or reset, waiting for `start`
    #[default]
    NotStarted,
    /// Active gameplay
    Playing,
    /// Run ended (energy ran out or explicit stop)
    GameOver,
}

/// What a falling object does when it lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Meteor: costs energy on impact
    Hazard,
    /// Health drop: restores energy, or scores at full energy
    Pickup,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 2] = [ObjectKind::Hazard, ObjectKind::Pickup];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Hazard => "hazard",
            ObjectKind::Pickup => "pickup",
        }
    }
}

/// Stable identity of a pooled object: its kind and slot in that kind's pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId {
    pub kind: ObjectKind,
    pub slot: usize,
}

/// A recyclable falling object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PooledObject {
    pub id: ObjectId,
    /// Visible while falling
    pub visible: bool,
    /// Where the current fall started
    pub start: Vec2,
    /// Where the current fall lands
    pub target: Vec2,
    /// Seconds the current fall takes
    pub duration: f32,
}

impl PooledObject {
    pub fn new(kind: ObjectKind, slot: usize) -> Self {
        Self {
            id: ObjectId { kind, slot },
            visible: false,
            start: Vec2::ZERO,
            target: Vec2::ZERO,
            duration: 0.0,
        }
    }

    #[inline]
    pub fn kind(&self) -> ObjectKind {
        self.id.kind
    }

    /// Reposition and show for a new fall
    pub fn launch(&mut self, start: Vec2, target: Vec2, duration: f32) {
        self.start = start;
        self.target = target;
        self.duration = duration;
        self.visible = true;
    }

    /// Return to the idle state
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Player energy and score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// 0..=max energy
    pub energy: u32,
    pub score: u64,
}

impl PlayerState {
    pub fn new(max_energy: u32) -> Self {
        Self {
            energy: max_energy,
            score: 0,
        }
    }
}

/// Outcome of resolving a landed object, consumed by the session to drive
/// the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Hazard hit the ground
    HazardImpact { object: ObjectId },
    /// Pickup collected; `bonus` when it converted to score
    PickupCollected { object: ObjectId, bonus: bool },
    ScoreChanged { score: u64 },
    EnergyChanged { energy: u32 },
    /// Energy reached zero
    GameOver,
}
