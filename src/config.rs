use std::path::PathBuf;
use std::time::Duration;

use crate::map::Legend;

pub const SPEED: u32 = 15;
pub const MAP_FILE: &str = "maps/map2.txt";

/// Everything the binary needs. There are no flags or environment variables; the map
/// path is fixed and resolved against the crate directory.
#[derive(Debug, Clone)]
pub struct Settings {
    pub map_path: PathBuf,
    /// Frames per second.
    pub speed: u32,
    pub legend: Legend,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            map_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(MAP_FILE),
            speed: SPEED,
            legend: Legend::default(),
        }
    }
}

impl Settings {
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }
}
