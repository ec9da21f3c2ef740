//! Sky Fall - runtime core of a falling-hazard survival game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pools, spawning, difficulty, energy/score)
//! - `presenter`: Rendering/audio collaborator interface and a headless implementation
//! - `audio`: Sound and music cues the simulation requests
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod presenter;
pub mod sim;
pub mod tuning;

pub use presenter::{HeadlessPresenter, Presenter};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the display refresh the game targets)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest real frame time fed to the fixed-step accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Design resolution of the play area
    pub const PLAY_WIDTH: f32 = 2048.0;
    pub const PLAY_HEIGHT: f32 = 1536.0;
    /// Falling sprite height (spawn offset above the top edge)
    pub const OBJECT_HEIGHT: f32 = 120.0;

    /// Pool sizes comfortably above the on-screen maximum
    pub const HAZARD_POOL_SIZE: usize = 50;
    pub const PICKUP_POOL_SIZE: usize = 20;
    /// Maximum simultaneously falling objects
    pub const ACTIVE_CAP: usize = 40;
    /// Pickups spawn only while at most this many objects fall
    pub const PICKUP_GATE: usize = 30;

    /// Seconds between difficulty steps
    pub const DIFFICULTY_INTERVAL: f32 = 60.0;

    /// Full energy
    pub const MAX_ENERGY: u32 = 100;
}
