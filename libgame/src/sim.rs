use std::time::Duration;

use tracing::{debug, info, trace};

use crate::{
    Game,
    board::{GameBoard, TileState},
    error::{GameError, GameResult},
};

/// Receives every board the simulation produces, together with its 1-based step number.
pub trait Render {
    fn render(&mut self, board: &GameBoard, step: usize) -> anyhow::Result<()>;
}

impl<F> Render for F
where
    F: FnMut(&GameBoard, usize) -> anyhow::Result<()>,
{
    fn render(&mut self, board: &GameBoard, step: usize) -> anyhow::Result<()> {
        self(board, step)
    }
}

/// Blocks between two steps.
pub trait Pause {
    fn pause(&mut self, duration: Duration) -> anyhow::Result<()>;
}

impl<F> Pause for F
where
    F: FnMut(Duration) -> anyhow::Result<()>,
{
    fn pause(&mut self, duration: Duration) -> anyhow::Result<()> {
        self(duration)
    }
}

/// Validated parameters of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    steps: usize,
    pause: Duration,
}

impl RunSettings {
    pub fn new(steps: i64, pause_seconds: f64) -> GameResult<Self> {
        let steps = usize::try_from(steps).map_err(|_| {
            GameError::InvalidArgument(format!("step count must not be negative, got {steps}"))
        })?;

        let pause = Duration::try_from_secs_f64(pause_seconds).map_err(|_| {
            GameError::InvalidArgument(format!(
                "pause must be a finite, non-negative number of seconds, got {pause_seconds}"
            ))
        })?;

        Ok(Self { steps, pause })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }
}

/// Advances `initial` by `settings.steps()` generations, rendering each new board and pausing
/// between steps (never after the last one). Collaborator errors abort the run and are returned
/// as they were produced.
pub fn run<R, P>(
    initial: GameBoard,
    settings: RunSettings,
    render: &mut R,
    pause: &mut P,
) -> anyhow::Result<GameBoard>
where
    R: Render + ?Sized,
    P: Pause + ?Sized,
{
    info!(
        width = initial.width(),
        height = initial.height(),
        steps = settings.steps,
        pause_secs = settings.pause.as_secs_f64(),
        "starting simulation"
    );

    let mut game = Game::new(initial);

    for step in 0..settings.steps {
        game.tick();

        debug!(
            step = game.generation,
            alive = game.count_cells(TileState::Alive),
            "advanced board"
        );

        render.render(&game.board, game.generation)?;

        if step + 1 < settings.steps {
            trace!(duration = ?settings.pause, "pausing");
            pause.pause(settings.pause)?;
        }
    }

    info!(
        generations = game.generation,
        alive = game.count_cells(TileState::Alive),
        "simulation finished"
    );

    Ok(game.board)
}
