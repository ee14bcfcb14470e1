mod palette;

use std::io::{self, Write};

use anyhow::Context;
use colored::Colorize;
use libgame::{board::GameBoard, sim::Render};

pub use palette::Palette;

/// Every tile is drawn two columns wide so it comes out roughly square.
const TILE: &str = "  ";

/// Draws boards as a coloured heatmap on a terminal, one frame per step.
pub struct TerminalRenderer<W>
where
    W: Write,
{
    out: W,
    palette: Palette,
    clear_screen: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(palette: Palette, clear_screen: bool) -> Self {
        Self::new(io::stdout(), palette, clear_screen)
    }
}

impl<W> TerminalRenderer<W>
where
    W: Write,
{
    pub fn new(out: W, palette: Palette, clear_screen: bool) -> Self {
        Self {
            out,
            palette,
            clear_screen,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&self, board: &GameBoard, step: usize) -> String {
        let mut frame = if self.clear_screen {
            let clear = termion::clear::All;
            let goto = termion::cursor::Goto(1, 1);
            format!("{clear}{goto}")
        } else {
            String::new()
        };

        frame.push_str(&format!("Board State at Step {step}\n"));

        for row in board.rows() {
            for tile in row {
                let [r, g, b] = self.palette.color(*tile);
                frame.push_str(&TILE.on_truecolor(r, g, b).to_string());
            }
            frame.push('\n');
        }

        frame
    }
}

impl<W> Render for TerminalRenderer<W>
where
    W: Write,
{
    fn render(&mut self, board: &GameBoard, step: usize) -> anyhow::Result<()> {
        let frame = self.draw(board, step);

        self.out
            .write_all(frame.as_bytes())
            .context("Couldn't write frame")?;
        self.out.flush().context("Couldn't flush frame")?;

        Ok(())
    }
}
