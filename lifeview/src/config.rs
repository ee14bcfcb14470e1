use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use libgame::sim::RunSettings;
use serde::{Deserialize, Serialize};

use crate::renderer::Palette;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Number of generations to advance and render. Negative values are rejected.
    pub steps: i64,

    /// Seconds to wait between two frames.
    pub pause_seconds: f64,

    pub palette: Palette,

    /// Clear the terminal before every frame so each one replaces the last.
    pub clear_screen: bool,

    /// Write the last board to `save_dir` once the run is over.
    pub save_final: bool,
    pub save_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steps: 10,
            pause_seconds: 0.5,
            palette: Palette::default(),
            clear_screen: true,
            save_final: false,
            save_dir: PathBuf::from("boards"),
        }
    }
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")
    }

    pub fn run_settings(&self) -> anyhow::Result<RunSettings> {
        Ok(RunSettings::new(self.steps, self.pause_seconds)?)
    }
}
