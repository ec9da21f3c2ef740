//! Rendering/audio collaborator
//!
//! The simulation drives whatever engine draws the game through `Presenter`.
//! Motions are fire-and-forget: the engine animates the fall and, when it
//! finishes, the host calls `GameSession::complete_motion` with the object id.
//!
//! `HeadlessPresenter` implements the trait without an engine. It records
//! every command and advances falls from elapsed time, which is enough to
//! run full sessions in tests and in the native binary.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::audio::{Music, Sound};
use crate::sim::state::{ObjectId, ObjectKind};

/// Looping effect layered on a fall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmbientEffect {
    /// Meteors spin as they fall
    Rotate,
    /// Health drops sway side to side
    Swing,
}

impl AmbientEffect {
    pub fn for_kind(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Hazard => AmbientEffect::Rotate,
            ObjectKind::Pickup => AmbientEffect::Swing,
        }
    }
}

/// Immutable description of one fall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub object: ObjectId,
    pub start: Vec2,
    pub target: Vec2,
    /// Seconds, linear
    pub duration: f32,
    pub ambient: AmbientEffect,
}

impl Motion {
    /// Position after `elapsed` seconds
    pub fn position_at(&self, elapsed: f32) -> Vec2 {
        if self.duration <= 0.0 {
            return self.target;
        }
        let t = (elapsed / self.duration).clamp(0.0, 1.0);
        self.start.lerp(self.target, t)
    }
}

/// HUD text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Energy,
    Score,
}

/// On/off HUD overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    GameOver,
}

/// What the simulation asks of the rendering/audio engine
pub trait Presenter {
    /// Start a fall. Must lead to exactly one `complete_motion(motion.object)`
    /// when it finishes, unless cancelled. Presenting an object that is
    /// already falling replaces its previous fall.
    fn present_object(&mut self, motion: &Motion);
    /// Stop every fall; no completion may be reported for them afterwards
    fn cancel_all_motions(&mut self);
    /// Ground-hit animation for a landed hazard
    fn show_impact(&mut self, object: ObjectId);
    fn hide_object(&mut self, object: ObjectId);
    fn play_sound(&mut self, sound: Sound);
    fn set_background_music(&mut self, music: Music, looped: bool);
    fn update_label(&mut self, label: Label, text: &str);
    fn show_indicator(&mut self, indicator: Indicator, visible: bool);
}

/// A recorded presenter call
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCommand {
    Present(Motion),
    CancelAll,
    Impact(ObjectId),
    Hide(ObjectId),
    Sound(Sound),
    Music { music: Music, looped: bool },
    Label { label: Label, text: String },
    Indicator { indicator: Indicator, visible: bool },
}

#[derive(Debug, Clone)]
struct InFlight {
    motion: Motion,
    elapsed: f32,
}

/// Engine-less presenter
#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    commands: Vec<PresenterCommand>,
    in_flight: Vec<InFlight>,
    labels: HashMap<Label, String>,
    indicators: HashMap<Indicator, bool>,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received, oldest first
    pub fn commands(&self) -> &[PresenterCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Sounds played, oldest first
    pub fn sounds(&self) -> impl Iterator<Item = Sound> + '_ {
        self.commands.iter().filter_map(|c| match c {
            PresenterCommand::Sound(sound) => Some(*sound),
            _ => None,
        })
    }

    pub fn label(&self, label: Label) -> Option<&str> {
        self.labels.get(&label).map(String::as_str)
    }

    pub fn indicator_visible(&self, indicator: Indicator) -> bool {
        self.indicators.get(&indicator).copied().unwrap_or(false)
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Current position of a falling object
    pub fn position_of(&self, object: ObjectId) -> Option<Vec2> {
        self.in_flight
            .iter()
            .find(|f| f.motion.object == object)
            .map(|f| f.motion.position_at(f.elapsed))
    }

    /// Advance every fall by `dt`; returns the objects that landed, in the
    /// order their falls were started
    pub fn advance(&mut self, dt: f32) -> Vec<ObjectId> {
        let mut landed = Vec::new();
        self.in_flight.retain_mut(|f| {
            f.elapsed += dt;
            if f.elapsed >= f.motion.duration {
                landed.push(f.motion.object);
                false
            } else {
                true
            }
        });
        landed
    }

    /// Land every fall immediately
    pub fn finish_all(&mut self) -> Vec<ObjectId> {
        self.in_flight.drain(..).map(|f| f.motion.object).collect()
    }
}

impl Presenter for HeadlessPresenter {
    fn present_object(&mut self, motion: &Motion) {
        self.in_flight.retain(|f| f.motion.object != motion.object);
        self.in_flight.push(InFlight {
            motion: *motion,
            elapsed: 0.0,
        });
        self.commands.push(PresenterCommand::Present(*motion));
    }

    fn cancel_all_motions(&mut self) {
        self.in_flight.clear();
        self.commands.push(PresenterCommand::CancelAll);
    }

    fn show_impact(&mut self, object: ObjectId) {
        self.commands.push(PresenterCommand::Impact(object));
    }

    fn hide_object(&mut self, object: ObjectId) {
        self.commands.push(PresenterCommand::Hide(object));
    }

    fn play_sound(&mut self, sound: Sound) {
        log::trace!("Sound {}", sound.file_name());
        self.commands.push(PresenterCommand::Sound(sound));
    }

    fn set_background_music(&mut self, music: Music, looped: bool) {
        self.commands.push(PresenterCommand::Music { music, looped });
    }

    fn update_label(&mut self, label: Label, text: &str) {
        self.labels.insert(label, text.to_string());
        self.commands.push(PresenterCommand::Label {
            label,
            text: text.to_string(),
        });
    }

    fn show_indicator(&mut self, indicator: Indicator, visible: bool) {
        self.indicators.insert(indicator, visible);
        self.commands
            .push(PresenterCommand::Indicator { indicator, visible });
    }
}
