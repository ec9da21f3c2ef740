//! Energy and score rules
//!
//! Landed objects are resolved here into `GameEvent`s. The machine knows
//! nothing about the presenter; the session turns events into sounds,
//! labels and visuals.

use super::state::{GameEvent, ObjectId, ObjectKind, PlayerState};
use crate::tuning::EnergyTuning;

/// Whether the machine still accepts resolutions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyPhase {
    Playing,
    GameOver,
}

/// Energy/score state machine
#[derive(Debug, Clone)]
pub struct EnergyScoreMachine {
    rules: EnergyTuning,
    player: PlayerState,
    phase: EnergyPhase,
}

impl EnergyScoreMachine {
    pub fn new(rules: EnergyTuning) -> Self {
        Self {
            player: PlayerState::new(rules.max_energy),
            rules,
            phase: EnergyPhase::Playing,
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn phase(&self) -> EnergyPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == EnergyPhase::GameOver
    }

    /// Full energy, zero score, playing
    pub fn reset(&mut self) {
        self.player = PlayerState::new(self.rules.max_energy);
        self.phase = EnergyPhase::Playing;
    }

    /// Enter GameOver without an energy check (explicit stop)
    pub fn halt(&mut self) {
        self.phase = EnergyPhase::GameOver;
    }

    /// Resolve one landed object, appending what happened to `events`.
    ///
    /// Ignored once the machine is in GameOver. Every resolution ends with an
    /// `EnergyChanged` event; a resolution that empties energy also emits
    /// `GameOver`, exactly once.
    pub fn resolve(&mut self, object: ObjectId, events: &mut Vec<GameEvent>) {
        if self.phase == EnergyPhase::GameOver {
            log::debug!("Ignoring {:?} after game over", object);
            return;
        }

        match object.kind {
            ObjectKind::Hazard => {
                self.player.energy = self.player.energy.saturating_sub(self.rules.hazard_damage);
                events.push(GameEvent::HazardImpact { object });
            }
            ObjectKind::Pickup => {
                // Only a pickup caught at exactly full energy converts to score
                let bonus = self.player.energy == self.rules.max_energy;
                if bonus {
                    self.player.score = self.player.score.saturating_add(self.rules.overflow_bonus);
                    events.push(GameEvent::PickupCollected { object, bonus });
                    events.push(GameEvent::ScoreChanged {
                        score: self.player.score,
                    });
                } else {
                    self.player.energy = self
                        .player
                        .energy
                        .saturating_add(self.rules.pickup_heal)
                        .min(self.rules.max_energy);
                    events.push(GameEvent::PickupCollected { object, bonus });
                }
            }
        }

        if self.player.energy == 0 {
            self.phase = EnergyPhase::GameOver;
            events.push(GameEvent::GameOver);
        }

        events.push(GameEvent::EnergyChanged {
            energy: self.player.energy,
        });
    }
}

/// HUD text for the energy label
pub fn energy_text(energy: u32) -> String {
    format!("{}%", energy)
}

/// HUD text for the score label
pub fn score_text(score: u64) -> String {
    score.to_string()
}
