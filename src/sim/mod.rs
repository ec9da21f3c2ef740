//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, injected through `RandomSource`
//! - Frame time is the only clock
//! - No rendering or audio; the session talks to a `Presenter`

pub mod difficulty;
pub mod energy;
pub mod pool;
pub mod rng;
pub mod scheduler;
pub mod session;
pub mod state;

pub use difficulty::{DifficultyController, DifficultyState};
pub use energy::{EnergyPhase, EnergyScoreMachine};
pub use pool::{ActiveObjectSet, ObjectPool};
pub use rng::{RandomSource, RngState, SeededRandom};
pub use scheduler::{SpawnRequest, SpawnScheduler, SpawnTimers};
pub use session::GameSession;
pub use state::{GameEvent, GamePhase, ObjectId, ObjectKind, PlayerState, PooledObject};
