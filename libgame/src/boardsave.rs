use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{Game, board::GameBoard};

/// A board snapshot on disk, from which a run can be restarted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSave {
    /// The number of generations the board had been advanced when it was saved.
    #[serde(default)]
    pub generation: usize,

    pub board: GameBoard,
}

impl BoardSave {
    pub fn save<P>(&self, path: P) -> anyhow::Result<()>
    where
        P: AsRef<Path>,
    {
        let save_serialized =
            serde_json::to_string_pretty(&self).context("Couldn't serialize board save")?;

        let path = path.as_ref();
        let parent_path = path.parent().context("No parent path")?;

        fs::create_dir_all(parent_path).context("Couldn't create board save directory")?;
        fs::write(path, save_serialized).context("Couldn't write board save")?;

        Ok(())
    }

    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let save_serialized = fs::read(path).context("Couldn't read board save")?;
        let save =
            serde_json::from_slice(&save_serialized).context("Couldn't deserialize board save")?;
        Ok(save)
    }
}

impl From<Game> for BoardSave {
    fn from(game: Game) -> Self {
        Self {
            generation: game.generation,
            board: game.board,
        }
    }
}

impl From<BoardSave> for Game {
    fn from(save: BoardSave) -> Self {
        Self {
            board: save.board,
            generation: save.generation,
        }
    }
}
