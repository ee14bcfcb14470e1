use std::{env, io, path::PathBuf, process::ExitCode};

use anyhow::Context;
use itertools::Itertools;
use libgame::{boardsave::BoardSave, patterns, sim};
use renderer::TerminalRenderer;
use sleeper::Sleeper;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{BoardSource, Command};
use config::Config;

mod cli;
mod config;
mod renderer;
mod sleeper;

const DEFAULT_LOG_FILTER: &str = "lifeview=info,libgame=info";

fn main() -> ExitCode {
    init_tracing();

    let args = env::args().skip(1).collect_vec();
    let command = match cli::parse_cmd(args.iter().map(String::as_str)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("! {e:#}\n\n{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };

    let result = match command {
        Command::ListPatterns => {
            for pattern in patterns::PATTERNS {
                let (rows, cols) = pattern.extent();
                println!("{:<12} {cols}x{rows}", pattern.name);
            }
            Ok(())
        }
        Command::Run {
            source,
            config_path,
        } => run(source, config_path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = failure_message(&e);
            error!("{message}");
            eprintln!("! {message}");
            ExitCode::FAILURE
        }
    }
}

/// The whole context chain of a failed run, on one line.
fn failure_message(error: &anyhow::Error) -> String {
    format!("{error:#}")
}

/// Generation number of the last board of a run that started at `start`.
fn final_generation(start: usize, steps: usize) -> anyhow::Result<usize> {
    start
        .checked_add(steps)
        .with_context(|| format!("Generation {start} cannot be advanced by {steps} steps"))
}

/// Logs go to stderr, stdout carries the frames.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(source: BoardSource, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let settings = config.run_settings()?;

    let initial = source.build()?;
    info!(?source, generation = initial.generation, "loaded initial board");

    let mut renderer = TerminalRenderer::stdout(config.palette, config.clear_screen);
    let mut sleeper = Sleeper::new();

    let board = sim::run(initial.board, settings, &mut renderer, &mut sleeper)?;
    info!(slept = ?sleeper.total_slept, "run complete");

    if config.save_final {
        let generation = final_generation(initial.generation, settings.steps())?;
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let path = config
            .save_dir
            .join(format!("{timestamp}_gen{generation}.json"));

        BoardSave { generation, board }.save(&path)?;
        info!(path = %path.display(), "saved final board");
    }

    Ok(())
}
