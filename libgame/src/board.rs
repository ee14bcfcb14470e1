use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    error::{GameError, GameResult},
    pos::Position,
};

/// A fixed-size, row-major grid of tiles. The dimensions are at least 1x1 and never change
/// for the lifetime of a board value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct GameBoard {
    width: usize,
    height: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    /// Creates an all-dead board.
    pub fn new(width: usize, height: usize) -> GameResult<Self> {
        let tile_count = tile_count(width, height)?;

        let mut tiles = Vec::new();
        tiles.try_reserve_exact(tile_count).map_err(|_| {
            GameError::InvalidInput(format!("a {width}x{height} board does not fit in memory"))
        })?;
        tiles.resize(tile_count, TileState::default());

        Self::with_tiles(width, height, tiles)
    }

    pub fn new_random(width: usize, height: usize, alive_cells: usize) -> GameResult<Self> {
        Self::new_random_with(&mut rand::rng(), width, height, alive_cells)
    }

    /// Spawns exactly `alive_cells` live tiles at distinct positions picked with `rng`.
    pub fn new_random_with<R>(
        rng: &mut R,
        width: usize,
        height: usize,
        alive_cells: usize,
    ) -> GameResult<Self>
    where
        R: Rng,
    {
        let mut board = Self::new(width, height)?;

        if alive_cells > board.tiles.len() {
            return Err(GameError::InvalidInput(format!(
                "a {width}x{height} board cannot hold {alive_cells} alive cells"
            )));
        }

        let mut available_board_positions = Vec::new();
        available_board_positions
            .try_reserve_exact(board.tiles.len())
            .map_err(|_| {
                GameError::InvalidInput(format!("a {width}x{height} board does not fit in memory"))
            })?;
        available_board_positions.extend(
            (0..board.width)
                .cartesian_product(0..board.height)
                .map(|(x, y)| Position { x, y }),
        );

        for _ in 0..alive_cells {
            let chosen_position_index = rng.random_range(0..available_board_positions.len());
            let chosen_position = available_board_positions.swap_remove(chosen_position_index);

            if let Some(tile) = board.tile_mut(chosen_position) {
                *tile = TileState::Alive;
            }
        }

        Ok(board)
    }

    pub fn with_tiles(width: usize, height: usize, tiles: Vec<TileState>) -> GameResult<Self> {
        let tile_count = tile_count(width, height)?;

        if tiles.len() != tile_count {
            return Err(GameError::InvalidInput(format!(
                "expected {tile_count} tiles for a {width}x{height} board, got {}",
                tiles.len()
            )));
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Builds a board with the dimensions of `self` around `tiles`, which must hold exactly
    /// one tile per cell.
    pub(crate) fn with_same_shape(&self, tiles: Vec<TileState>) -> Self {
        debug_assert_eq!(tiles.len(), self.tiles.len());

        Self {
            width: self.width,
            height: self.height,
            tiles,
        }
    }

    /// Builds a board from rows of `0`/`1` values. Rows must all have the same length.
    pub fn from_rows<R>(rows: &[R]) -> GameResult<Self>
    where
        R: AsRef<[u8]>,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GameError::InvalidInput(format!(
                    "row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }

            for (x, value) in row.iter().enumerate() {
                let tile = TileState::try_from(*value).map_err(|_| {
                    GameError::InvalidInput(format!("cell ({x}, {y}) holds {value}, expected 0 or 1"))
                })?;
                tiles.push(tile);
            }
        }

        Self::with_tiles(width, height, tiles)
    }

    /// Parses the plaintext cell format: `O`, `#` or `1` for live cells, `.` or `0` for dead
    /// ones, and `!` at the start of a line for comments.
    pub fn from_plaintext(text: &str) -> GameResult<Self> {
        let mut lines = text.lines().filter(|line| !line.starts_with('!')).collect_vec();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        let rows = lines
            .iter()
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .map(|(x, char)| match char {
                        'O' | '#' | '1' => Ok(1),
                        '.' | '0' => Ok(0),
                        _ => Err(GameError::InvalidInput(format!(
                            "unexpected character {char:?} at line {}, column {}",
                            y + 1,
                            x + 1
                        ))),
                    })
                    .collect::<GameResult<Vec<u8>>>()
            })
            .collect::<GameResult<Vec<_>>>()?;

        Self::from_rows(&rows)
    }

    pub fn to_plaintext(&self) -> String {
        self.rows()
            .map(|row| {
                let mut line = row
                    .iter()
                    .map(|tile| match tile {
                        TileState::Alive => 'O',
                        TileState::Dead => '.',
                    })
                    .collect::<String>();
                line.push('\n');
                line
            })
            .collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileState] {
        &self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileState]> {
        self.tiles.chunks_exact(self.width)
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn count_cells(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|tile| **tile == state).count()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }
}

/// Number of tiles on a `width` x `height` board, rejecting empty and unaddressable dimensions.
fn tile_count(width: usize, height: usize) -> GameResult<usize> {
    if width == 0 || height == 0 {
        return Err(GameError::InvalidInput(format!(
            "board must be at least 1x1, got {width}x{height}"
        )));
    }

    width
        .checked_mul(height)
        .filter(|count| isize::try_from(*count).is_ok())
        .ok_or_else(|| GameError::InvalidInput(format!("a {width}x{height} board is too large")))
}

impl TryFrom<Vec<Vec<u8>>> for GameBoard {
    type Error = GameError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<GameBoard> for Vec<Vec<u8>> {
    fn from(board: GameBoard) -> Self {
        board
            .rows()
            .map(|row| row.iter().map(|tile| u8::from(*tile)).collect())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl From<TileState> for u8 {
    fn from(value: TileState) -> Self {
        match value {
            TileState::Alive => 1,
            TileState::Dead => 0,
        }
    }
}

impl TryFrom<u8> for TileState {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TileState::Alive),
            0 => Ok(TileState::Dead),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(GameBoard::new(0, 3), Err(GameError::InvalidInput(_))));
        assert!(matches!(GameBoard::new(3, 0), Err(GameError::InvalidInput(_))));
        assert!(GameBoard::new(1, 1).is_ok());
    }

    #[test]
    fn rejects_tile_count_mismatch() {
        let result = GameBoard::with_tiles(2, 2, vec![TileState::Dead; 3]);
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn rejects_oversized_dimensions() {
        let result = GameBoard::with_tiles(usize::MAX, 2, vec![TileState::Dead]);
        assert!(matches!(result, Err(GameError::InvalidInput(_))));

        let result = GameBoard::new(usize::MAX, usize::MAX);
        assert!(matches!(result, Err(GameError::InvalidInput(_))));

        let result = GameBoard::new(usize::MAX / 2 + 1, 1);
        assert!(matches!(result, Err(GameError::InvalidInput(_))));

        let result = GameBoard::new_random(usize::MAX, 3, 0);
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn rejects_dimensions_whose_product_overflows() {
        let result = GameBoard::new(1 << 32, 1 << 32);
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn from_rows_is_row_major() {
        let board = GameBoard::from_rows(&[[0u8, 1, 0], [0, 0, 1]]).unwrap();

        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
        assert_eq!(board.tile([1, 0]), Some(&TileState::Alive));
        assert_eq!(board.tile([2, 1]), Some(&TileState::Alive));
        assert_eq!(board.tile([0, 1]), Some(&TileState::Dead));
        assert_eq!(board.tile([3, 0]), None);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let rows = vec![vec![0u8, 1, 0], vec![1, 0]];
        assert!(matches!(GameBoard::from_rows(&rows), Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn from_rows_rejects_non_binary_values() {
        let result = GameBoard::from_rows(&[[0u8, 2], [1, 0]]);
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn plaintext_skips_comments_and_trailing_blank_lines() {
        let board = GameBoard::from_plaintext("!Name: Blinker\n.....\n.OOO.\n.....\n\n").unwrap();

        assert_eq!((board.width(), board.height()), (5, 3));
        assert_eq!(board.count_cells(TileState::Alive), 3);
        assert_eq!(board.to_plaintext(), ".....\n.OOO.\n.....\n");
    }

    #[test]
    fn plaintext_accepts_alternate_alphabets() {
        let hashes = GameBoard::from_plaintext("#.\n.#").unwrap();
        let digits = GameBoard::from_plaintext("10\n01").unwrap();
        assert_eq!(hashes, digits);
    }

    #[test]
    fn plaintext_rejects_unknown_characters() {
        let result = GameBoard::from_plaintext(".O.\n.x.");
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn random_board_has_requested_population() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = GameBoard::new_random_with(&mut rng, 6, 4, 10).unwrap();

        assert_eq!(board.count_cells(TileState::Alive), 10);
        assert_eq!(board.count_cells(TileState::Dead), 14);
    }

    #[test]
    fn random_board_rejects_overfull_population() {
        let result = GameBoard::new_random(2, 2, 5);
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn serializes_as_binary_rows() {
        let board = GameBoard::from_rows(&[[1u8, 0], [0, 1]]).unwrap();
        let serialized = serde_json::to_string(&board).unwrap();
        assert_eq!(serialized, "[[1,0],[0,1]]");

        let deserialized: GameBoard = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, board);
    }

    #[test]
    fn deserialization_validates_cells() {
        assert!(serde_json::from_str::<GameBoard>("[[1,0],[0,3]]").is_err());
        assert!(serde_json::from_str::<GameBoard>("[[1,0],[0]]").is_err());
        assert!(serde_json::from_str::<GameBoard>("[]").is_err());
    }
}
