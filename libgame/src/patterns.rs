use crate::{
    board::{GameBoard, TileState},
    error::{GameError, GameResult},
};

/// A named arrangement of live cells, given as `(row, col)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Rows and columns spanned by the pattern.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(rows, cols), (row, col)| {
                (rows.max(row + 1), cols.max(col + 1))
            })
    }

    /// Places the pattern centred on an otherwise dead `width` x `height` board.
    pub fn place(&self, width: usize, height: usize) -> GameResult<GameBoard> {
        let mut board = GameBoard::new(width, height)?;

        let (rows, cols) = self.extent();
        if rows > height || cols > width {
            return Err(GameError::InvalidInput(format!(
                "pattern {} needs {cols}x{rows} cells, board is {width}x{height}",
                self.name
            )));
        }

        let top = (height - rows) / 2;
        let left = (width - cols) / 2;

        for (row, col) in self.cells {
            if let Some(tile) = board.tile_mut([left + col, top + row]) {
                *tile = TileState::Alive;
            }
        }

        Ok(board)
    }
}
