use libgame::board::TileState;
use serde::{Deserialize, Serialize};

pub type Rgb = [u8; 3];

/// Colours of the two tile states. The defaults are the ends of matplotlib's "plasma" map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Palette {
    pub alive: Rgb,
    pub dead: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: [240, 249, 33],
            dead: [13, 8, 135],
        }
    }
}

impl Palette {
    pub fn color(&self, tile: TileState) -> Rgb {
        match tile {
            TileState::Alive => self.alive,
            TileState::Dead => self.dead,
        }
    }
}
