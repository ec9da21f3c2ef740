//! Audio cues requested by the simulation
//!
//! The simulation never plays audio itself; it names a cue and the presenter
//! maps it to whatever its audio engine loaded.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    /// Hazard hit the ground
    Impact,
    /// Pickup collected
    Bonus,
    /// Energy ran out
    SessionEnd,
}

impl Sound {
    /// All cues, for preloading
    pub const ALL: [Sound; 3] = [Sound::Impact, Sound::Bonus, Sound::SessionEnd];

    /// Asset file the presentation layer loads for this cue
    pub fn file_name(&self) -> &'static str {
        match self {
            Sound::Impact => "boom.wav",
            Sound::Bonus => "health.wav",
            Sound::SessionEnd => "fire_truck.wav",
        }
    }
}

/// Background music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Music {
    Background,
}

impl Music {
    pub fn file_name(&self) -> &'static str {
        match self {
            Music::Background => "background.mp3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues_have_distinct_assets() {
        let mut names: Vec<_> = Sound::ALL.iter().map(Sound::file_name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Sound::ALL.len());
    }
}
