//! Sky Fall entry point
//!
//! Runs a headless session: frames are fed through a fixed-step accumulator
//! and the `HeadlessPresenter` lands falls as time passes, until energy runs
//! out or the time limit is reached.
//!
//! Usage: `sky-fall [seed] [tuning.json]`

use sky_fall::consts::*;
use sky_fall::presenter::{HeadlessPresenter, Label};
use sky_fall::sim::{GameSession, SeededRandom};
use sky_fall::{Tuning, TuningError};

/// Give up after this much simulated time
const MAX_SESSION_SECS: f32 = 30.0 * 60.0;
/// Frame time the fake display delivers
const FRAME_DT: f32 = 1.0 / 60.0;

/// Game instance: session plus the frame accumulator
struct Game {
    session: GameSession<HeadlessPresenter, SeededRandom>,
    accumulator: f32,
}

impl Game {
    fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        let session = GameSession::new(tuning, HeadlessPresenter::new(), SeededRandom::new(seed))?;
        Ok(Self {
            session,
            accumulator: 0.0,
        })
    }

    /// Run simulation ticks for one real frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.session.tick(SIM_DT);
            for object in self.session.presenter_mut().advance(SIM_DT) {
                self.session.complete_motion(object);
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }
}

fn load_tuning(path: Option<&String>) -> Result<Tuning, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let tuning = Tuning::from_json(&json)?;
            log::info!("Loaded tuning from {}", path);
            Ok(tuning)
        }
        None => Ok(Tuning::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sky Fall (headless) starting...");

    let args: Vec<String> = std::env::args().collect();
    let seed = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5EED_u64);

    let tuning = match load_tuning(args.get(2)) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("Bad tuning file: {}", e);
            std::process::exit(2);
        }
    };

    let mut game = match Game::new(tuning, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Cannot start session: {}", e);
            std::process::exit(2);
        }
    };

    log::info!("Game initialized with seed: {}", seed);
    game.session.start();

    while game.session.is_running() && game.session.elapsed() < MAX_SESSION_SECS {
        game.update(FRAME_DT);
    }
    game.session.stop();

    let session = &game.session;
    println!(
        "Survived {:.1}s, score {}, energy {}, difficulty level {}",
        session.elapsed(),
        session.player().score,
        session
            .presenter()
            .label(Label::Energy)
            .unwrap_or("?"),
        session.difficulty().level
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive GameSession directly
}
