use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use libgame::{
    board::GameBoard,
    boardsave::BoardSave,
    patterns,
};

pub const USAGE: &str = "\
usage: lifeview <command> [args...] [config.json]

commands:
    random <width> <height> <alive_cells>   random board with the given population
    pattern <name> <width> <height>         built-in pattern centred on an empty board
    load <path>                             plaintext (.cells/.txt) or saved (.json) board
    patterns                                list the built-in patterns";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run {
        source: BoardSource,
        config_path: Option<PathBuf>,
    },
    ListPatterns,
}

/// Where the initial board of a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    Random {
        width: usize,
        height: usize,
        alive_cells: usize,
    },
    Pattern {
        name: String,
        width: usize,
        height: usize,
    },
    Load(PathBuf),
}

impl BoardSource {
    pub fn build(&self) -> anyhow::Result<BoardSave> {
        let board = match self {
            BoardSource::Random {
                width,
                height,
                alive_cells,
            } => GameBoard::new_random(*width, *height, *alive_cells)?,

            BoardSource::Pattern {
                name,
                width,
                height,
            } => patterns::find(name)
                .with_context(|| format!("Unknown pattern {name:?}"))?
                .place(*width, *height)?,

            BoardSource::Load(path) => return load_board(path),
        };

        Ok(BoardSave {
            generation: 0,
            board,
        })
    }
}

fn load_board(path: &Path) -> anyhow::Result<BoardSave> {
    if path.extension().is_some_and(|extension| extension == "json") {
        return BoardSave::load(path);
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Couldn't read board {}", path.display()))?;
    let board = GameBoard::from_plaintext(&text)
        .with_context(|| format!("Couldn't parse board {}", path.display()))?;

    Ok(BoardSave {
        generation: 0,
        board,
    })
}

pub fn parse_cmd<'a, I>(mut args: I) -> anyhow::Result<Command>
where
    I: Iterator<Item = &'a str>,
{
    let source = match args.next().context("No command")? {
        "random" => BoardSource::Random {
            width: parse_arg(args.next(), "width")?,
            height: parse_arg(args.next(), "height")?,
            alive_cells: parse_arg(args.next(), "alive cell count")?,
        },

        "pattern" => BoardSource::Pattern {
            name: args.next().context("missing pattern name")?.to_owned(),
            width: parse_arg(args.next(), "width")?,
            height: parse_arg(args.next(), "height")?,
        },

        "load" => BoardSource::Load(args.next().context("missing board path")?.into()),

        "patterns" => {
            if let Some(extra) = args.next() {
                bail!("Unexpected argument {extra:?}");
            }
            return Ok(Command::ListPatterns);
        }

        other => bail!("Unknown command {other:?}"),
    };

    let config_path = args.next().map(PathBuf::from);
    if let Some(extra) = args.next() {
        bail!("Unexpected argument {extra:?}");
    }

    Ok(Command::Run {
        source,
        config_path,
    })
}

fn parse_arg(arg: Option<&str>, name: &str) -> anyhow::Result<usize> {
    arg.with_context(|| format!("missing {name}"))?
        .parse::<usize>()
        .with_context(|| format!("invalid {name}"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use libgame::{board::TileState, error::GameError};

    use super::*;

    fn parse(line: &str) -> anyhow::Result<Command> {
        parse_cmd(line.split_whitespace())
    }

    #[test]
    fn parses_random() {
        assert_eq!(
            parse("random 20 10 50").unwrap(),
            Command::Run {
                source: BoardSource::Random {
                    width: 20,
                    height: 10,
                    alive_cells: 50
                },
                config_path: None,
            }
        );
    }

    #[test]
    fn parses_pattern_with_config() {
        assert_eq!(
            parse("pattern glider 12 12 run.json").unwrap(),
            Command::Run {
                source: BoardSource::Pattern {
                    name: "glider".to_owned(),
                    width: 12,
                    height: 12
                },
                config_path: Some(PathBuf::from("run.json")),
            }
        );
    }

    #[test]
    fn parses_list() {
        assert_eq!(parse("patterns").unwrap(), Command::ListPatterns);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("").is_err());
        assert!(parse("explode").is_err());
        assert!(parse("random 20 10").is_err());
        assert!(parse("random 20 ten 5").is_err());
        assert!(parse("random -1 10 5").is_err());
        assert!(parse("load").is_err());
        assert!(parse("load a.cells b.json c").is_err());
        assert!(parse("patterns extra").is_err());
    }

    #[test]
    fn unknown_pattern_fails_to_build() {
        let source = BoardSource::Pattern {
            name: "spaceship".to_owned(),
            width: 10,
            height: 10,
        };
        assert!(source.build().is_err());
    }

    #[test]
    fn random_source_reports_overfull_board() {
        let source = BoardSource::Random {
            width: 2,
            height: 2,
            alive_cells: 9,
        };
        let error = source.build().unwrap_err();

        assert!(matches!(
            error.downcast_ref::<GameError>(),
            Some(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn loads_plaintext_and_saved_boards() {
        let dir = tempfile::tempdir().unwrap();

        let plaintext_path = dir.path().join("blinker.cells");
        fs::write(&plaintext_path, "!Name: Blinker\n...\nOOO\n...\n").unwrap();
        let loaded = BoardSource::Load(plaintext_path).build().unwrap();
        assert_eq!(loaded.generation, 0);
        assert_eq!(loaded.board.count_cells(TileState::Alive), 3);

        let saved_path = dir.path().join("saved.json");
        let save = BoardSave {
            generation: 12,
            board: loaded.board.clone(),
        };
        save.save(&saved_path).unwrap();
        assert_eq!(BoardSource::Load(saved_path).build().unwrap(), save);
    }
}
